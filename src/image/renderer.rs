use ::image::imageops::{self, FilterType};

use super::Image;
use crate::geometry::{fit_within, ScalingPolicy, Size};

/// Resamples `image` to exactly `size` with a smooth filter.
pub fn render_scaled(image: &Image, size: Size) -> Image {
    if size == image.size() {
        return image.clone();
    }
    if size.is_empty() || image.is_empty() {
        return Image::from_parts(Size::default(), Vec::new());
    }
    let resized = imageops::resize(
        &image.to_rgba_image(),
        size.width,
        size.height,
        FilterType::Triangle,
    );
    Image::from(&resized)
}

/// Renders `image` into a panel of `panel` size using `policy`.
pub fn render_into_panel(image: &Image, panel: Size, policy: ScalingPolicy) -> Image {
    render_scaled(image, fit_within(image.size(), panel, policy))
}

#[cfg(test)]
mod test {
    use super::{render_into_panel, render_scaled};
    use crate::color::Rgba;
    use crate::geometry::{PixelCoordinate, ScalingPolicy, Size};
    use crate::image::Image;

    fn uniform(width: u32, height: u32, color: Rgba) -> Image {
        Image::new(width, height, vec![color; (width * height) as usize]).unwrap()
    }

    #[test]
    fn same_size_is_a_copy() {
        let image = uniform(3, 3, Rgba::opaque_gray(9));
        assert_eq!(render_scaled(&image, image.size()), image);
    }

    #[test]
    fn downscale_keeps_uniform_color() {
        let color = Rgba::new(10, 200, 30, 255);
        let rendered = render_scaled(&uniform(40, 20, color), Size::new(10, 5));
        assert_eq!(rendered.size(), Size::new(10, 5));
        assert_eq!(rendered.pixel(PixelCoordinate::new(4, 2)), Some(color));
    }

    #[test]
    fn panel_rendering_upscales_with_fit_policy() {
        let image = uniform(20, 10, Rgba::opaque_gray(100));
        let rendered = render_into_panel(&image, Size::new(200, 200), ScalingPolicy::Fit);
        assert_eq!(rendered.size(), Size::new(200, 100));
    }

    #[test]
    fn panel_rendering_keeps_small_image_with_shrink_policy() {
        let image = uniform(20, 10, Rgba::opaque_gray(100));
        let rendered =
            render_into_panel(&image, Size::new(200, 200), ScalingPolicy::ShrinkToFit);
        assert_eq!(rendered.size(), Size::new(20, 10));
    }

    #[test]
    fn empty_target_renders_nothing() {
        let image = uniform(20, 10, Rgba::opaque_gray(100));
        assert!(render_scaled(&image, Size::new(0, 5)).is_empty());
    }
}
