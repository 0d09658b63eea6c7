//! Command compilation.
//!
//! Turns strokes into a flat, inspectable [`DrawCommand`] sequence and maps
//! image pixels onto surface coordinates.

mod command;
mod compiler;
mod layout;

pub use command::{CommandKind, DrawCommand};
pub use compiler::Compiler;
pub use layout::{to_surface, DrawingArea, EDGE_PEN_DIAMETER, PEN_SCALE};
