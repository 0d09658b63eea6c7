//! Stroke synthesis.
//!
//! Two independent generators produce [`Stroke`](crate::types::Stroke)s:
//! natural strokes chained from colour samples, and short edge strokes that
//! trace the local gradient.

mod edge;
mod natural;

pub use edge::{build_edge_strokes, MAX_EDGE_STROKES};
pub use natural::{build_natural_strokes, CONNECTION_RADIUS, MAX_STROKE_LENGTH};
