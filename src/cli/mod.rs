pub mod completions;
pub mod draw;
pub mod init;
pub mod palette;
pub mod plan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::render::RasterCanvas;
use crate::types::Metric;

/// strokify - Turn images into pen-stroke drawings
#[derive(Parser, Debug)]
#[command(name = "strokify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw an image onto a canvas with pen strokes and save it as PNG
    Draw(draw::DrawArgs),

    /// Compile an image into commands and print a summary
    Plan(plan::PlanArgs),

    /// Extract a colour palette from an image
    Palette(palette::PaletteArgs),

    /// Write a default strokify.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options describing the drawing target, shared by `draw` and `plan`.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Config file (default: ./strokify.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Builtin palette to draw with
    #[arg(long)]
    pub palette: Option<String>,

    /// Canvas width in surface units
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in surface units
    #[arg(long)]
    pub height: Option<u32>,

    /// Colour matching metric
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,
}

impl TargetArgs {
    /// Load the config and apply command-line overrides.
    pub fn resolve(&self) -> Result<Config> {
        let cwd = std::env::current_dir()?;
        let mut config = Config::discover(self.config.as_deref(), &cwd)?;

        if let Some(palette) = &self.palette {
            config.palette = palette.clone();
            config.colours.clear();
        }
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Blank canvas matching a config.
pub fn canvas_for(config: &Config) -> Result<RasterCanvas> {
    Ok(RasterCanvas::new(
        config.canvas.width,
        config.canvas.height,
        config.resolve_colours()?,
        config.pens.clone(),
    ))
}
