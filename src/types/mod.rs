//! Core domain types for strokify.
//!
//! This module contains the value types shared by every pipeline stage:
//! - `Colour` - RGB colour values
//! - `Palette` - The device's ordered colour set and nearest-colour matching
//! - `PixelBuffer` - Immutable RGBA pixels produced by image fitting
//! - `Point` / `Stroke` - Pen paths in pixel coordinates

mod buffer;
mod colour;
mod palette;
mod stroke;

pub use buffer::PixelBuffer;
pub use colour::Colour;
pub use palette::{Metric, Palette};
pub use stroke::{Point, Stroke};
