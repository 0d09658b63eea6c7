//! Greedy proximity chaining of samples into strokes.

use crate::analysis::Sample;
use crate::types::{Point, Stroke};

/// Longest chain a single natural stroke may hold.
pub const MAX_STROKE_LENGTH: usize = 15;

/// Largest distance, in pixels, between consecutive chained samples.
pub const CONNECTION_RADIUS: usize = 4;

/// Chain samples into single-colour strokes.
///
/// Samples are ordered by row then column. Each unused sample seeds a chain
/// which grows by repeatedly taking the nearest unused sample of the same
/// colour within [`CONNECTION_RADIUS`] of the tail, until nothing qualifies
/// or the chain holds [`MAX_STROKE_LENGTH`] points. Ties go to the earlier
/// sample. Every sample ends up in exactly one stroke.
pub fn build_natural_strokes(samples: &[Sample]) -> Vec<Stroke> {
    let mut samples = samples.to_vec();
    samples.sort_by_key(|s| (s.y, s.x));

    let radius_sq = CONNECTION_RADIUS * CONNECTION_RADIUS;
    let mut used = vec![false; samples.len()];
    let mut strokes = Vec::new();

    for seed in 0..samples.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;

        let colour = samples[seed].colour;
        let mut chain = vec![seed];
        let mut tail = samples[seed];

        while chain.len() < MAX_STROKE_LENGTH {
            let mut best: Option<(usize, usize)> = None;

            for (j, candidate) in samples.iter().enumerate() {
                if used[j] || candidate.colour != tail.colour {
                    continue;
                }
                let dist_sq = distance_sq(&tail, candidate);
                if dist_sq <= radius_sq && best.map_or(true, |(_, d)| dist_sq < d) {
                    best = Some((j, dist_sq));
                }
            }

            let Some((next, _)) = best else {
                break;
            };
            used[next] = true;
            chain.push(next);
            tail = samples[next];
        }

        let points = chain
            .iter()
            .map(|&i| Point::new(samples[i].x as f64, samples[i].y as f64))
            .collect();
        strokes.extend(Stroke::new(points, colour, false));
    }

    strokes
}

fn distance_sq(a: &Sample, b: &Sample) -> usize {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    dx * dx + dy * dy
}
