//! Rendering module for strokify.
//!
//! This module replays commands onto an in-memory canvas and handles image
//! file input and PNG output.

mod io;
mod raster;

pub use io::{load_image, write_png};
pub use raster::RasterCanvas;
