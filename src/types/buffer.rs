//! Flat RGBA pixel buffers.

use image::RgbaImage;

use crate::error::{Result, StrokifyError};

use super::Colour;

/// An immutable RGBA pixel buffer, row-major, four channels per pixel.
///
/// Alpha is carried but never read by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a channel array, checking it holds exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let Some(expected) = width.checked_mul(height).and_then(|n| n.checked_mul(4)) else {
            return Err(StrokifyError::InvalidBuffer {
                message: format!("{}x{} is too large to address", width, height),
            });
        };
        if data.len() != expected {
            return Err(StrokifyError::InvalidBuffer {
                message: format!(
                    "{}x{} needs {} channel bytes, got {}",
                    width,
                    height,
                    expected,
                    data.len()
                ),
            });
        }

        Ok(Self { width, height, data })
    }

    /// Build a buffer where every pixel has the same colour.
    pub fn filled(width: usize, height: usize, colour: Colour) -> Self {
        let data = colour.to_rgba().repeat(width * height);
        Self { width, height, data }
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Colour) -> Self {
        let mut data = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).to_rgba());
            }
        }
        Self { width, height, data }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw channel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Colour of an in-bounds pixel.
    ///
    /// Panics if `(x, y)` lies outside the buffer.
    pub fn colour(&self, x: usize, y: usize) -> Colour {
        let i = (y * self.width + x) * 4;
        Colour::rgb(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Mean of the three colour channels, or 0 outside the buffer.
    pub fn luminance(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 0.0;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        (self.data[i] as f64 + self.data[i + 1] as f64 + self.data[i + 2] as f64) / 3.0
    }

    /// Iterate all pixel colours in raster order.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| Colour::rgb(px[0], px[1], px[2]))
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("needs 16 channel bytes, got 15"));
    }

    #[test]
    fn test_new_rejects_overflowing_size() {
        let err = PixelBuffer::new(1usize << 62, 1, vec![]).unwrap_err();
        assert!(matches!(err, StrokifyError::InvalidBuffer { .. }));
        assert!(PixelBuffer::new(usize::MAX, 2, vec![]).is_err());
    }

    #[test]
    fn test_colour_ignores_alpha() {
        let buffer = PixelBuffer::new(1, 1, vec![10, 20, 30, 0]).unwrap();
        assert_eq!(buffer.colour(0, 0), Colour::rgb(10, 20, 30));
    }

    #[test]
    fn test_luminance_is_bounds_safe() {
        let buffer = PixelBuffer::filled(2, 2, Colour::rgb(30, 60, 90));
        assert_eq!(buffer.luminance(1, 1), 60.0);
        assert_eq!(buffer.luminance(-1, 0), 0.0);
        assert_eq!(buffer.luminance(0, 2), 0.0);
        assert_eq!(buffer.luminance(2, 0), 0.0);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let buffer = PixelBuffer::from_fn(3, 2, |x, y| Colour::rgb(x as u8, y as u8, 0));
        assert_eq!(buffer.colour(2, 1), Colour::rgb(2, 1, 0));
        let all: Vec<Colour> = buffer.colours().collect();
        assert_eq!(all[1], Colour::rgb(1, 0, 0));
        assert_eq!(all[3], Colour::rgb(0, 1, 0));
    }

    #[test]
    fn test_from_rgba_image() {
        let img = RgbaImage::from_pixel(4, 3, image::Rgba([1, 2, 3, 255]));
        let buffer = PixelBuffer::from(img);
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
        assert_eq!(buffer.data().len(), 48);
    }
}
