use std::fmt::Display;

use crate::color::Rgba;
use crate::error::Error;
use crate::geometry::{PixelCoordinate, Size};

pub mod reader;
pub mod renderer;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self, image: &Image) -> crate::Result<()>;
}

/// An RGBA8 raster, row-major with the origin in the top-left corner.
///
/// Never mutated after construction; a new image replaces an old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    size: Size,
    pixels: Vec<Rgba>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> crate::Result<Self> {
        let size = Size::new(width, height);
        if size.area() != pixels.len() {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndBuffer(
                size.area(),
                pixels.len(),
            ));
        }
        Ok(Self::from_parts(size, pixels))
    }

    pub(crate) fn from_parts(size: Size, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(size.area(), pixels.len());
        Image { size, pixels }
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, coordinate: PixelCoordinate) -> Option<Rgba> {
        if coordinate.x >= self.size.width || coordinate.y >= self.size.height {
            return None;
        }
        let index = coordinate.y as usize * self.size.width as usize + coordinate.x as usize;
        self.pixels.get(index).copied()
    }

    pub fn sample(&self, coordinate: PixelCoordinate) -> Option<PixelSample> {
        self.pixel(coordinate)
            .map(|color| PixelSample { coordinate, color })
    }

    /// Pixels of the rows in `first_row..end_row`.
    pub fn rows(&self, first_row: u32, end_row: u32) -> &[Rgba] {
        let width = self.size.width as usize;
        let end_row = end_row.min(self.size.height) as usize;
        let first_row = (first_row as usize).min(end_row);
        &self.pixels[first_row * width..end_row * width]
    }

    pub fn to_rgba_image(&self) -> ::image::RgbaImage {
        ::image::RgbaImage::from_fn(self.size.width, self.size.height, |x, y| {
            let color = self.pixel(PixelCoordinate::new(x, y)).unwrap_or_default();
            ::image::Rgba(color.into())
        })
    }
}

impl From<&::image::RgbaImage> for Image {
    fn from(value: &::image::RgbaImage) -> Self {
        let size = Size::new(value.width(), value.height());
        let pixels = value.pixels().map(Rgba::from).collect();
        Image::from_parts(size, pixels)
    }
}

impl From<::image::DynamicImage> for Image {
    fn from(value: ::image::DynamicImage) -> Self {
        Image::from(&value.into_rgba8())
    }
}

/// The color found under the pointer, in native image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSample {
    pub coordinate: PixelCoordinate,
    pub color: Rgba,
}

impl Display for PixelSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pos: ({}, {}) | RGB: ({}, {}, {})",
            self.coordinate.x,
            self.coordinate.y,
            self.color.red,
            self.color.green,
            self.color.blue
        )
    }
}

#[cfg(test)]
mod test {
    use super::{Image, PixelSample};
    use crate::color::Rgba;
    use crate::error::Error;
    use crate::geometry::PixelCoordinate;

    fn gradient(width: u32, height: u32) -> Image {
        let pixels = (0..width * height)
            .map(|index| Rgba::new(index as u8, (index / width) as u8, 7, 255))
            .collect();
        Image::new(width, height, pixels).unwrap()
    }

    #[test]
    fn create_image_with_wrong_pixel_count() {
        let result = Image::new(3, 2, vec![Rgba::default(); 5]);
        if let Err(Error::MismatchOfSizeBetweenDimensionsAndBuffer(expected, actual)) = result {
            assert_eq!(expected, 6);
            assert_eq!(actual, 5);
            return;
        }
        panic!("Mismatch of dimensions and pixel count was not detected");
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let image = gradient(4, 3);
        assert_eq!(
            image.pixel(PixelCoordinate::new(1, 2)),
            Some(Rgba::new(9, 2, 7, 255))
        );
    }

    #[test]
    fn pixel_lookup_out_of_bounds() {
        let image = gradient(4, 3);
        assert_eq!(image.pixel(PixelCoordinate::new(4, 0)), None);
        assert_eq!(image.pixel(PixelCoordinate::new(0, 3)), None);
    }

    #[test]
    fn sample_formats_position_and_color() {
        let sample = PixelSample {
            coordinate: PixelCoordinate::new(900, 600),
            color: Rgba::new(10, 20, 30, 40),
        };
        assert_eq!(sample.to_string(), "Pos: (900, 600) | RGB: (10, 20, 30)");
    }

    #[test]
    fn rows_are_clamped_to_height() {
        let image = gradient(4, 3);
        assert_eq!(image.rows(1, 2).len(), 4);
        assert_eq!(image.rows(2, 10).len(), 4);
        assert!(image.rows(5, 10).is_empty());
    }

    #[test]
    fn convert_to_and_from_rgba_image() {
        let image = gradient(5, 2);
        let converted = Image::from(&image.to_rgba_image());
        assert_eq!(converted, image);
    }
}
