use std::fmt::Display;

use crate::mapper::{map_to_image_space, Mapping};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn fits_within(&self, bounds: Size) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A pointer position in viewport-local coordinates. Not clipped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A pixel position in the native resolution of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelCoordinate {
    pub x: u32,
    pub y: u32,
}

impl PixelCoordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        PixelCoordinate { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalingPolicy {
    /// Preserve aspect ratio, only ever scale down.
    ShrinkToFit,
    /// Preserve aspect ratio, scale up or down until one side touches the bounds.
    Fit,
}

/// Computes the size an image of `image_size` is rendered at inside `bounds`.
///
/// The larger relative dimension matches the bounds exactly, the other one is
/// rounded to the nearest pixel and letterboxed. A non-empty image never
/// collapses to zero pixels inside a non-empty bounds.
pub fn fit_within(image_size: Size, bounds: Size, policy: ScalingPolicy) -> Size {
    if image_size.is_empty() {
        return Size::default();
    }
    if policy == ScalingPolicy::ShrinkToFit && image_size.fits_within(bounds) {
        return image_size;
    }
    let scale_x = bounds.width as f64 / image_size.width as f64;
    let scale_y = bounds.height as f64 / image_size.height as f64;
    let scale = scale_x.min(scale_y);
    Size::new(
        scale_dimension(image_size.width, scale, bounds.width),
        scale_dimension(image_size.height, scale, bounds.height),
    )
}

fn scale_dimension(length: u32, scale: f64, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    let scaled = (length as f64 * scale).round() as u32;
    scaled.clamp(1, bound)
}

/// Where a rendering of an image sits inside a fixed-size viewport.
///
/// Recomputed from scratch whenever the viewport or the image changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayGeometry {
    viewport: Size,
    displayed: Size,
    image: Size,
}

impl DisplayGeometry {
    pub fn new(viewport: Size, image: Size) -> Self {
        DisplayGeometry {
            viewport,
            displayed: fit_within(image, viewport, ScalingPolicy::ShrinkToFit),
            image,
        }
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn displayed_size(&self) -> Size {
        self.displayed
    }

    pub fn image_size(&self) -> Size {
        self.image
    }

    /// Top-left corner of the rendering inside the viewport. Half pixels are kept.
    pub fn offset(&self) -> (f64, f64) {
        centering_offset(self.viewport, self.displayed)
    }

    pub fn map(&self, pointer: Point) -> crate::Result<Mapping> {
        map_to_image_space(pointer, self.viewport, self.displayed, self.image)
    }
}

pub(crate) fn centering_offset(viewport: Size, displayed: Size) -> (f64, f64) {
    (
        (viewport.width as f64 - displayed.width as f64) / 2.0,
        (viewport.height as f64 - displayed.height as f64) / 2.0,
    )
}
