//! Interfaces to the drawing surface and its toolbar.
//!
//! The pipeline never rasterizes anything itself. Compiled commands are
//! replayed against something implementing both [`Surface`] and [`Device`];
//! see [`RasterCanvas`](crate::render::RasterCanvas) for the in-memory one.

use std::fmt;

use serde::Serialize;

use crate::types::{Colour, Point};

/// Drawing tool selected on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Draw paths with the current pen diameter.
    Pen,
    /// Flood fill from the first point of the next path.
    Fill,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Pen => write!(f, "pen"),
            Tool::Fill => write!(f, "fill"),
        }
    }
}

/// A surface that renders paths with the device's current settings.
pub trait Surface {
    /// Render a path through `points`, given in surface units.
    fn draw(&mut self, points: &[Point]);

    /// Surface size as `(width, height)` in surface units.
    fn size(&self) -> (f64, f64);
}

/// The toolbar controlling how the surface draws.
///
/// Setters hold absolute state, so repeating one has no further effect.
pub trait Device {
    fn set_fill_tool(&mut self);

    fn set_pen_tool(&mut self);

    fn set_colour(&mut self, colour: Colour);

    fn set_pen_diameter(&mut self, diameter: u32);

    /// Colours the device offers, in toolbar order.
    fn colours(&self) -> Vec<Colour>;

    /// Pen diameters the device offers, in any order.
    fn pen_diameters(&self) -> Vec<u32>;
}
