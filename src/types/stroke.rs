//! Points and strokes.

use serde::Serialize;

use super::Colour;

/// A point in fractional pixel (or surface) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single-colour pen stroke through one or more points.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    colour: Colour,
    is_edge: bool,
}

impl Stroke {
    /// Create a stroke. Returns `None` when `points` is empty.
    pub fn new(points: Vec<Point>, colour: Colour, is_edge: bool) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            colour,
            is_edge,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Number of points in the stroke.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke was synthesized from a detected edge.
    pub fn is_edge(&self) -> bool {
        self.is_edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_rejects_empty() {
        assert!(Stroke::new(vec![], Colour::BLACK, false).is_none());
    }

    #[test]
    fn test_stroke_accessors() {
        let stroke = Stroke::new(
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            Colour::WHITE,
            true,
        )
        .unwrap();
        assert_eq!(stroke.len(), 2);
        assert!(stroke.is_edge());
        assert!(!stroke.is_empty());
        assert_eq!(stroke.colour(), Colour::WHITE);
        assert_eq!(stroke.points()[1], Point::new(3.0, 4.0));
    }
}
