//! strokify - Image to pen-stroke drawing compiler
//!
//! A library for turning raster images into ordered fill and pen-stroke
//! commands, and for replaying those commands cooperatively against a
//! drawing surface.

pub mod analysis;
pub mod cli;
pub mod compile;
pub mod config;
pub mod device;
pub mod error;
pub mod execute;
pub mod output;
pub mod render;
pub mod sketch;
pub mod strokes;
pub mod types;

#[cfg(test)]
mod testing;

pub use analysis::{detect_edges, dominant_colour, sample, Edge, Sample};
pub use compile::{Compiler, DrawCommand, DrawingArea};
pub use config::Config;
pub use device::{Device, Surface, Tool};
pub use error::{Result, StrokifyError};
pub use execute::{Executor, Status};
pub use output::{Observer, Printer, Silent};
pub use render::RasterCanvas;
pub use sketch::{Plan, PlanSummary, Sketcher};
pub use strokes::{build_edge_strokes, build_natural_strokes};
pub use types::{Colour, Metric, Palette, PixelBuffer, Point, Stroke};
