//! Short directional strokes along detected edges.

use crate::analysis::Edge;
use crate::types::{Point, Stroke};

/// Most edges turned into strokes; the rest are dropped.
pub const MAX_EDGE_STROKES: usize = 300;

/// Distances along the gradient, in pixels, of the points after the first.
const EDGE_STEPS: [f64; 2] = [2.0, 3.0];

/// Build one three-point stroke for each of the first [`MAX_EDGE_STROKES`]
/// edges.
///
/// `edges` is expected strongest first, as returned by
/// [`detect_edges`](crate::analysis::detect_edges).
pub fn build_edge_strokes(edges: &[Edge]) -> Vec<Stroke> {
    edges
        .iter()
        .take(MAX_EDGE_STROKES)
        .filter_map(|edge| {
            let (dy, dx) = edge.direction.sin_cos();
            let x = edge.x as f64;
            let y = edge.y as f64;

            let mut points = Vec::with_capacity(1 + EDGE_STEPS.len());
            points.push(Point::new(x, y));
            points.extend(EDGE_STEPS.iter().map(|d| Point::new(x + dx * d, y + dy * d)));

            Stroke::new(points, edge.colour, true)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use std::f64::consts::FRAC_PI_2;

    fn edge(x: usize, y: usize, magnitude: f64, direction: f64) -> Edge {
        Edge {
            x,
            y,
            colour: Colour::BLACK,
            magnitude,
            direction,
        }
    }

    #[test]
    fn test_points_follow_gradient() {
        let strokes = build_edge_strokes(&[edge(10, 5, 100.0, 0.0), edge(3, 3, 90.0, FRAC_PI_2)]);

        assert_eq!(strokes.len(), 2);
        let horizontal = strokes[0].points();
        assert_eq!(horizontal[0], Point::new(10.0, 5.0));
        assert_eq!(horizontal[1], Point::new(12.0, 5.0));
        assert_eq!(horizontal[2], Point::new(13.0, 5.0));

        let vertical = strokes[1].points();
        assert!((vertical[1].x - 3.0).abs() < 1e-9);
        assert!((vertical[1].y - 5.0).abs() < 1e-9);
        assert!((vertical[2].y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_edge_strokes_are_flagged() {
        let strokes = build_edge_strokes(&[edge(1, 1, 50.0, 1.0)]);
        assert!(strokes[0].is_edge());
        assert_eq!(strokes[0].len(), 3);
        assert_eq!(strokes[0].colour(), Colour::BLACK);
    }

    #[test]
    fn test_caps_at_strongest_edges() {
        let edges: Vec<Edge> = (0..450).map(|i| edge(i, 0, 1000.0 - i as f64, 0.0)).collect();
        let strokes = build_edge_strokes(&edges);

        assert_eq!(strokes.len(), MAX_EDGE_STROKES);
        assert_eq!(strokes.last().unwrap().points()[0].x, 299.0);
    }

    #[test]
    fn test_empty_edges() {
        assert!(build_edge_strokes(&[]).is_empty());
    }
}
