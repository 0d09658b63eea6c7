//! Sobel edge detection over pixel luminance.

use crate::types::{Colour, Palette, PixelBuffer};

/// Gradient magnitude an interior pixel must exceed to count as an edge.
pub const EDGE_THRESHOLD: f64 = 30.0;

/// Horizontal Sobel kernel, indexed `[dy + 1][dx + 1]`.
const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical Sobel kernel, indexed `[dy + 1][dx + 1]`.
const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// A detected edge pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub x: usize,
    pub y: usize,
    /// Palette colour of the pixel itself.
    pub colour: Colour,
    /// Gradient magnitude, always above [`EDGE_THRESHOLD`].
    pub magnitude: f64,
    /// Gradient direction in radians, `atan2(gy, gx)`.
    pub direction: f64,
}

/// Detect edges in `buffer`, strongest first.
///
/// Only interior pixels are considered, so buffers narrower or shorter than
/// three pixels yield no edges. Equal magnitudes keep raster order.
pub fn detect_edges(buffer: &PixelBuffer, palette: &Palette) -> Vec<Edge> {
    let width = buffer.width();
    let height = buffer.height();
    let mut edges = Vec::new();

    if width < 3 || height < 3 {
        return edges;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let (gx, gy) = gradient(buffer, x as i64, y as i64);
            let magnitude = (gx * gx + gy * gy).sqrt();

            if magnitude > EDGE_THRESHOLD {
                edges.push(Edge {
                    x,
                    y,
                    colour: palette.closest(buffer.colour(x, y)),
                    magnitude,
                    direction: gy.atan2(gx),
                });
            }
        }
    }

    edges.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    edges
}

/// Apply both Sobel kernels to the 3x3 luminance neighbourhood of `(x, y)`.
fn gradient(buffer: &PixelBuffer, x: i64, y: i64) -> (f64, f64) {
    let mut gx = 0.0;
    let mut gy = 0.0;
    for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(&SOBEL_Y).enumerate() {
        for kx in 0..3 {
            let lum = buffer.luminance(x + kx as i64 - 1, y + ky as i64 - 1);
            gx += row_x[kx] * lum;
            gy += row_y[kx] * lum;
        }
    }
    (gx, gy)
}
