use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::load_image;
use crate::types::Colour;

/// Extract a colour palette from an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let img = load_image(path)?.to_rgba8();

    let colours = extract(&img, args.max);
    printer.status(
        "Sampled",
        &format!("{} from {}", plural(colours.len(), "colour", "colours"), display_path(path)),
    );

    // Ready to paste under `colours:` in strokify.yaml
    for colour in &colours {
        println!("  - \"{}\"", colour);
    }

    Ok(())
}

/// Opaque colours by frequency, most common first; ties by first appearance.
pub fn extract(img: &image::RgbaImage, max: Option<usize>) -> Vec<Colour> {
    let mut counts: HashMap<Colour, (usize, usize)> = HashMap::new();
    for (i, pixel) in img.pixels().enumerate() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        counts.entry(Colour::rgb(r, g, b)).or_insert((0, i)).0 += 1;
    }

    let mut colours: Vec<(Colour, (usize, usize))> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    if let Some(max) = max {
        colours.truncate(max);
    }

    colours.into_iter().map(|(colour, _)| colour).collect()
}
