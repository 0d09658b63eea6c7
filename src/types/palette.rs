//! Fixed, ordered palettes and nearest-colour matching.

use std::fmt;

use clap::ValueEnum;
use palette::{white_point::D65, FromColor, Lab, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrokifyError};

use super::Colour;

/// Distance used when matching a colour against the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Squared Euclidean distance over the RGB cube.
    #[default]
    Rgb,
    /// Squared Euclidean distance in CIE L*a*b*.
    Lab,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Rgb => write!(f, "rgb"),
            Metric::Lab => write!(f, "lab"),
        }
    }
}

/// A non-empty, ordered set of colours offered by the drawing device.
///
/// Order is significant: when two entries are equally close to a query the
/// earlier one wins.
#[derive(Debug, Clone)]
pub struct Palette {
    colours: Vec<Colour>,
    metric: Metric,
    /// Lab coordinates of `colours`, only populated for `Metric::Lab`.
    lab: Vec<Lab<D65, f32>>,
}

impl Palette {
    /// Create a palette matched with squared RGB distance.
    pub fn new(colours: Vec<Colour>) -> Result<Self> {
        Self::with_metric(colours, Metric::Rgb)
    }

    /// Create a palette with an explicit distance metric.
    pub fn with_metric(colours: Vec<Colour>, metric: Metric) -> Result<Self> {
        if colours.is_empty() {
            return Err(StrokifyError::EmptyPalette);
        }

        let lab = match metric {
            Metric::Rgb => Vec::new(),
            Metric::Lab => colours.iter().map(|&c| to_lab(c)).collect(),
        };

        Ok(Self { colours, metric, lab })
    }

    /// Look up a builtin palette by name.
    pub fn builtin(name: &str) -> Option<Vec<Colour>> {
        match name {
            "classic" => Some(CLASSIC.to_vec()),
            "pico8" => Some(PICO8.to_vec()),
            "mono" => Some(vec![Colour::WHITE, Colour::BLACK]),
            _ => None,
        }
    }

    /// Names accepted by [`Palette::builtin`].
    pub const BUILTIN_NAMES: [&'static str; 3] = ["classic", "pico8", "mono"];

    /// Find the palette colour closest to `colour`.
    pub fn closest(&self, colour: Colour) -> Colour {
        match self.metric {
            Metric::Rgb => {
                let mut best = self.colours[0];
                let mut best_dist = u32::MAX;
                for &candidate in &self.colours {
                    let dist = colour.distance_sq(candidate);
                    if dist < best_dist {
                        best_dist = dist;
                        best = candidate;
                    }
                }
                best
            }
            Metric::Lab => {
                let query = to_lab(colour);
                let mut best = self.colours[0];
                let mut best_dist = f32::INFINITY;
                for (&candidate, lab) in self.colours.iter().zip(&self.lab) {
                    let dl = query.l - lab.l;
                    let da = query.a - lab.a;
                    let db = query.b - lab.b;
                    let dist = dl * dl + da * da + db * db;
                    if dist < best_dist {
                        best_dist = dist;
                        best = candidate;
                    }
                }
                best
            }
        }
    }

    /// The palette colours in order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// The metric used by [`Palette::closest`].
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

fn to_lab(colour: Colour) -> Lab<D65, f32> {
    let srgb = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );
    Lab::from_color(srgb)
}

/// The classic drawing-game toolbar palette.
const CLASSIC: [Colour; 22] = [
    Colour::rgb(255, 255, 255),
    Colour::rgb(0, 0, 0),
    Colour::rgb(193, 193, 193),
    Colour::rgb(76, 76, 76),
    Colour::rgb(239, 19, 11),
    Colour::rgb(116, 11, 7),
    Colour::rgb(255, 113, 0),
    Colour::rgb(194, 56, 0),
    Colour::rgb(255, 228, 0),
    Colour::rgb(232, 162, 0),
    Colour::rgb(0, 204, 0),
    Colour::rgb(0, 85, 16),
    Colour::rgb(0, 178, 255),
    Colour::rgb(0, 86, 158),
    Colour::rgb(35, 31, 211),
    Colour::rgb(14, 8, 101),
    Colour::rgb(163, 0, 186),
    Colour::rgb(85, 0, 105),
    Colour::rgb(211, 124, 170),
    Colour::rgb(167, 85, 116),
    Colour::rgb(160, 82, 45),
    Colour::rgb(99, 48, 13),
];

/// The PICO-8 16-colour palette.
const PICO8: [Colour; 16] = [
    Colour::rgb(0, 0, 0),       // 0  black
    Colour::rgb(29, 43, 83),    // 1  dark blue
    Colour::rgb(126, 37, 83),   // 2  dark purple
    Colour::rgb(0, 135, 81),    // 3  dark green
    Colour::rgb(171, 82, 54),   // 4  brown
    Colour::rgb(95, 87, 79),    // 5  dark grey
    Colour::rgb(194, 195, 199), // 6  light grey
    Colour::rgb(255, 241, 232), // 7  white
    Colour::rgb(255, 0, 77),    // 8  red
    Colour::rgb(255, 163, 0),   // 9  orange
    Colour::rgb(255, 236, 39),  // 10 yellow
    Colour::rgb(0, 228, 54),    // 11 green
    Colour::rgb(41, 173, 255),  // 12 blue
    Colour::rgb(131, 118, 156), // 13 indigo
    Colour::rgb(255, 119, 168), // 14 pink
    Colour::rgb(255, 204, 170), // 15 peach
];

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_palette() -> Palette {
        Palette::new(vec![
            Colour::rgb(255, 0, 0),
            Colour::rgb(0, 255, 0),
            Colour::rgb(0, 0, 255),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Palette::new(vec![]),
            Err(StrokifyError::EmptyPalette)
        ));
        assert!(Palette::with_metric(vec![], Metric::Lab).is_err());
    }

    #[test]
    fn test_closest_exact_match() {
        let palette = rgb_palette();
        assert_eq!(palette.closest(Colour::rgb(0, 255, 0)), Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_closest_nearest() {
        let palette = rgb_palette();
        assert_eq!(palette.closest(Colour::rgb(200, 30, 40)), Colour::rgb(255, 0, 0));
        assert_eq!(palette.closest(Colour::rgb(10, 20, 180)), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_closest_tie_prefers_palette_order() {
        let palette = Palette::new(vec![Colour::rgb(0, 0, 0), Colour::rgb(2, 2, 2)]).unwrap();
        assert_eq!(palette.closest(Colour::rgb(1, 1, 1)), Colour::rgb(0, 0, 0));

        let reversed = Palette::new(vec![Colour::rgb(2, 2, 2), Colour::rgb(0, 0, 0)]).unwrap();
        assert_eq!(reversed.closest(Colour::rgb(1, 1, 1)), Colour::rgb(2, 2, 2));
    }

    #[test]
    fn test_duplicate_entries_first_wins() {
        let palette = Palette::new(vec![Colour::BLACK, Colour::WHITE, Colour::BLACK]).unwrap();
        assert_eq!(palette.closest(Colour::rgb(5, 5, 5)), Colour::BLACK);
    }

    #[test]
    fn test_lab_metric_matches_exact_and_near() {
        let palette =
            Palette::with_metric(vec![Colour::WHITE, Colour::BLACK, Colour::rgb(255, 0, 0)], Metric::Lab)
                .unwrap();
        assert_eq!(palette.closest(Colour::rgb(250, 250, 250)), Colour::WHITE);
        assert_eq!(palette.closest(Colour::rgb(10, 10, 10)), Colour::BLACK);
        assert_eq!(palette.closest(Colour::rgb(230, 20, 20)), Colour::rgb(255, 0, 0));
        assert_eq!(palette.metric(), Metric::Lab);
    }

    #[test]
    fn test_builtins() {
        for name in Palette::BUILTIN_NAMES {
            let colours = Palette::builtin(name).unwrap();
            assert!(!colours.is_empty());
        }
        assert!(Palette::builtin("nope").is_none());
        assert_eq!(Palette::builtin("pico8").unwrap().len(), 16);
    }
}
