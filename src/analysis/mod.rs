//! Image analysis: background selection, edge detection and sampling.
//!
//! Everything here reads an immutable [`PixelBuffer`](crate::types::PixelBuffer)
//! and quantizes through the same [`Palette`](crate::types::Palette).

mod background;
mod edges;
mod sampler;

pub use background::dominant_colour;
pub use edges::{detect_edges, Edge, EDGE_THRESHOLD};
pub use sampler::{complexity, sample, sample_grid, sampling_step, Sample, COMPLEXITY_GRID};
