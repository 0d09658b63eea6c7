//! Mapping between image pixels and surface coordinates.

use image::imageops::{self, FilterType};
use image::DynamicImage;

use crate::types::{PixelBuffer, Point};

/// Surface units per image pixel.
pub const PEN_SCALE: f64 = 4.0;

/// Pen diameter used for every edge stroke.
pub const EDGE_PEN_DIAMETER: u32 = 4;

/// The drawing area measured in image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingArea {
    pub width: f64,
    pub height: f64,
}

impl DrawingArea {
    /// Area addressable on a surface of the given size.
    pub fn from_surface(width: f64, height: f64) -> Self {
        Self {
            width: width / PEN_SCALE,
            height: height / PEN_SCALE,
        }
    }

    /// Offset that centres `buffer` in the area, plus half a pixel so pen
    /// marks sit on pixel centres.
    pub fn centering_offset(&self, buffer: &PixelBuffer) -> Point {
        Point::new(
            (self.width - buffer.width() as f64) / 2.0 + 0.5,
            (self.height - buffer.height() as f64) / 2.0 + 0.5,
        )
    }

    /// Largest size with the aspect ratio of `width` x `height` that fits.
    ///
    /// Never smaller than 1x1.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (1, 1);
        }
        let max_w = self.width.floor().max(1.0);
        let max_h = self.height.floor().max(1.0);
        let scale = (max_w / width as f64).min(max_h / height as f64);

        let w = ((width as f64 * scale).floor() as u32).max(1);
        let h = ((height as f64 * scale).floor() as u32).max(1);
        (w, h)
    }

    /// Resize a decoded image to fit the area and take its RGBA pixels.
    pub fn fit_image(&self, image: &DynamicImage) -> PixelBuffer {
        let rgba = image.to_rgba8();
        let (w, h) = self.fit(rgba.width(), rgba.height());

        if (w, h) == rgba.dimensions() {
            return PixelBuffer::from(rgba);
        }
        PixelBuffer::from(imageops::resize(&rgba, w, h, FilterType::Triangle))
    }
}

/// Map an image-space point onto the surface.
pub fn to_surface(point: Point, offset: Point) -> Point {
    Point::new((point.x + offset.x) * PEN_SCALE, (point.y + offset.y) * PEN_SCALE)
}
