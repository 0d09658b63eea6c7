//! Complexity-adaptive colour sampling.
//!
//! Busy images are sampled on a denser grid than flat ones. The density is
//! picked from the mean colour variation between diagonal neighbours on a
//! coarse grid.

use crate::output::Observer;
use crate::types::{Colour, Palette, PixelBuffer};

/// Spacing of the coarse grid used to estimate complexity.
pub const COMPLEXITY_GRID: usize = 4;

/// A quantized pixel kept for stroke synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub x: usize,
    pub y: usize,
    pub colour: Colour,
}

/// Mean variation between each coarse grid origin and the pixel
/// [`COMPLEXITY_GRID`] pixels diagonally below-right of it.
///
/// Variation is the sum of absolute channel differences. Returns 0 when the
/// buffer is too small to hold a single comparable pair.
pub fn complexity(buffer: &PixelBuffer) -> f64 {
    let width = buffer.width();
    let height = buffer.height();
    let mut total: u64 = 0;
    let mut pairs: u64 = 0;

    for y in (0..height).step_by(COMPLEXITY_GRID) {
        for x in (0..width).step_by(COMPLEXITY_GRID) {
            if x + COMPLEXITY_GRID < width && y + COMPLEXITY_GRID < height {
                let a = buffer.colour(x, y);
                let b = buffer.colour(x + COMPLEXITY_GRID, y + COMPLEXITY_GRID);
                total += a.manhattan(b) as u64;
                pairs += 1;
            }
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    total as f64 / pairs as f64
}

/// Sampling step for a given complexity: 2, 3 or 4 pixels.
pub fn sampling_step(complexity: f64) -> usize {
    if complexity > 50.0 {
        2
    } else if complexity > 25.0 {
        3
    } else {
        4
    }
}

/// Sample every `step`th pixel in raster order, dropping samples whose
/// quantized colour equals `fill`.
pub fn sample_grid(buffer: &PixelBuffer, palette: &Palette, fill: Colour, step: usize) -> Vec<Sample> {
    let step = step.max(1);
    let mut samples = Vec::new();

    for y in (0..buffer.height()).step_by(step) {
        for x in (0..buffer.width()).step_by(step) {
            let colour = palette.closest(buffer.colour(x, y));
            if colour != fill {
                samples.push(Sample { x, y, colour });
            }
        }
    }

    samples
}

/// Estimate complexity, choose a density, and sample.
pub fn sample(buffer: &PixelBuffer, palette: &Palette, fill: Colour, observer: &dyn Observer) -> Vec<Sample> {
    let avg = complexity(buffer);
    let step = sampling_step(avg);

    observer.log(&format!("Image complexity: {:.1}, using {}px sampling", avg, step));

    sample_grid(buffer, palette, fill, step)
}
