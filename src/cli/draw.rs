//! Draw command implementation.
//!
//! Compiles an image into commands, replays them on a raster canvas and
//! writes the result.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::execute::{Executor, Status};
use crate::output::{display_path, plural, Printer};
use crate::render::{load_image, write_png};
use crate::sketch::Sketcher;

use super::{canvas_for, TargetArgs};

/// Draw an image with pen strokes
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Image to draw
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output PNG (default: from config, else out.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Stop after this many commands
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let config = args.target.resolve()?;
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    let image = load_image(&args.file)?;
    let mut canvas = canvas_for(&config)?;
    let sketcher = Sketcher::new(&canvas, config.metric)?;

    printer.status(
        "Drawing",
        &format!(
            "{} ({}x{})",
            display_path(&args.file),
            image.width(),
            image.height()
        ),
    );

    let plan = sketcher.plan_image(&image, printer);
    let total = plan.commands.len();

    let mut executor = Executor::new(plan.commands, printer);
    if let Some(limit) = args.limit {
        // Every poll that returns false lets exactly one command run.
        let mut polls = 0usize;
        executor = executor.with_cancel(move || {
            let stop = polls >= limit;
            polls += 1;
            stop
        });
    }

    match executor.run(&mut canvas) {
        Status::Stopped => printer.warning(
            "Stopped",
            &format!(
                "after {} of {}",
                total - executor.state().remaining,
                plural(total, "command", "commands")
            ),
        ),
        _ => printer.info("Executed", &plural(total, "command", "commands")),
    }

    write_png(canvas.image(), &output)?;
    printer.success("Finished", &display_path(&output));

    Ok(())
}
