use crate::error::Error;
use crate::geometry::{centering_offset, PixelCoordinate, Point, Size};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapping {
    Inside(PixelCoordinate),
    /// The pointer is in the letterbox margin or outside the viewport.
    Outside,
}

/// Converts a viewport-local pointer position into a pixel of the native image.
///
/// `displayed` is the size of the rendering, centered inside `viewport`.
/// Offsets keep their fractional part, native coordinates are truncated.
pub fn map_to_image_space(
    pointer: Point,
    viewport: Size,
    displayed: Size,
    image: Size,
) -> Result<Mapping> {
    if displayed.is_empty() || image.is_empty() {
        return Err(Error::NoImageLoaded);
    }
    let (offset_x, offset_y) = centering_offset(viewport, displayed);
    let local_x = pointer.x - offset_x;
    let local_y = pointer.y - offset_y;
    let displayed_width = displayed.width as f64;
    let displayed_height = displayed.height as f64;
    // NaN fails every comparison and lands here as well
    if !(0.0..displayed_width).contains(&local_x) || !(0.0..displayed_height).contains(&local_y) {
        return Ok(Mapping::Outside);
    }
    Ok(Mapping::Inside(PixelCoordinate::new(
        scale_to_native(local_x, displayed.width, image.width),
        scale_to_native(local_y, displayed.height, image.height),
    )))
}

fn scale_to_native(local: f64, displayed: u32, native: u32) -> u32 {
    let scaled = (local * native as f64 / displayed as f64).floor() as u32;
    scaled.min(native - 1)
}
