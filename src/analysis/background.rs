//! Background colour selection.

use std::collections::HashMap;

use crate::types::{Colour, Palette, PixelBuffer};

/// The most frequent palette colour in `buffer`.
///
/// Each pixel is quantized first. Among equally frequent colours the one
/// whose first occurrence comes latest in raster order wins. An empty buffer
/// falls back to the first palette colour.
pub fn dominant_colour(buffer: &PixelBuffer, palette: &Palette) -> Colour {
    // Colours in first-seen order, with their counts.
    let mut order: Vec<Colour> = Vec::new();
    let mut counts: HashMap<Colour, usize> = HashMap::new();
    // Most source pixels repeat their neighbour; skip the lookup when they do.
    let mut last: Option<(Colour, Colour)> = None;

    for colour in buffer.colours() {
        let matched = match last {
            Some((raw, matched)) if raw == colour => matched,
            _ => palette.closest(colour),
        };
        last = Some((colour, matched));

        let count = counts.entry(matched).or_insert_with(|| {
            order.push(matched);
            0
        });
        *count += 1;
    }

    order
        .into_iter()
        .reduce(|best, next| if counts[&best] > counts[&next] { best } else { next })
        .unwrap_or(palette.colours()[0])
}
