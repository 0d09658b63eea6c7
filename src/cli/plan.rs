//! Plan command implementation.
//!
//! Compiles an image without drawing it and reports what the command
//! sequence would contain.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StrokifyError};
use crate::output::{display_path, plural, Printer, Silent};
use crate::render::load_image;
use crate::sketch::{PlanSummary, Sketcher};

use super::{canvas_for, TargetArgs};

/// Compile an image and summarise the commands
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Image to plan
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn run(args: PlanArgs, printer: &Printer) -> Result<()> {
    let summary = summarize(&args, printer)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| StrokifyError::Parse {
            message: format!("Failed to serialize summary: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    printer.info(
        "Fitted",
        &format!("{}x{}, background {}", summary.width, summary.height, summary.fill),
    );
    printer.info(
        "Strokes",
        &format!(
            "{} from edges ({} detected), {} natural from {}",
            summary.edge_strokes,
            summary.edges_detected,
            summary.natural_strokes,
            plural(summary.samples, "sample", "samples")
        ),
    );
    for (kind, count) in &summary.by_kind {
        printer.info("Commands", &format!("{:>6} {}", count, kind));
    }
    printer.success("Planned", &plural(summary.commands, "command", "commands"));

    Ok(())
}

fn summarize(args: &PlanArgs, printer: &Printer) -> Result<PlanSummary> {
    let config = args.target.resolve()?;
    let image = load_image(&args.file)?;
    let canvas = canvas_for(&config)?;
    let sketcher = Sketcher::new(&canvas, config.metric)?;

    printer.status("Planning", &display_path(&args.file));

    let plan = if args.json {
        sketcher.plan_image(&image, &Silent)
    } else {
        sketcher.plan_image(&image, printer)
    };

    Ok(plan.summary())
}
