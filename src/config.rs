//! Project configuration (strokify.yaml) parsing.
//!
//! The config describes the drawing target: its colours, pen diameters and
//! canvas size, plus the default output path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrokifyError};
use crate::types::{Colour, Metric, Palette};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "strokify.yaml";

/// Canvas size in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Drawing target configuration loaded from strokify.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Builtin palette name, used when `colours` is empty.
    pub palette: String,

    /// Explicit toolbar colours as hex strings, in toolbar order.
    pub colours: Vec<String>,

    /// Available pen diameters.
    pub pens: Vec<u32>,

    /// Canvas size.
    pub canvas: CanvasSize,

    /// Colour matching metric.
    pub metric: Metric,

    /// Default output image.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: "classic".to_string(),
            colours: vec![],
            pens: vec![2, 4, 10, 20, 40],
            canvas: CanvasSize::default(),
            metric: Metric::Rgb,
            output: PathBuf::from("out.png"),
        }
    }
}

impl Config {
    /// Load config from a strokify.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StrokifyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| StrokifyError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `path` if given, else `strokify.yaml` in `dir` if present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the toolbar colours.
    pub fn resolve_colours(&self) -> Result<Vec<Colour>> {
        if !self.colours.is_empty() {
            return self.colours.iter().map(|hex| Colour::from_hex(hex)).collect();
        }

        Palette::builtin(&self.palette).ok_or_else(|| StrokifyError::Config {
            message: format!("Unknown palette: {}", self.palette),
            help: Some(format!(
                "Use one of {} or list colours explicitly",
                Palette::BUILTIN_NAMES.join(", ")
            )),
        })
    }

    /// Check values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StrokifyError::Config {
                message: format!(
                    "Canvas must not be empty (got {}x{})",
                    self.canvas.width, self.canvas.height
                ),
                help: None,
            });
        }
        if self.pens.is_empty() || self.pens.contains(&0) {
            return Err(StrokifyError::Config {
                message: "Pen diameters must be a non-empty list of positive sizes".to_string(),
                help: Some("e.g. pens: [2, 4, 10, 20, 40]".to_string()),
            });
        }
        Ok(())
    }

    /// Render a commented default config file.
    pub fn template() -> String {
        let defaults = Self::default();
        let pens: Vec<String> = defaults.pens.iter().map(|p| p.to_string()).collect();
        format!(
            "# Builtin palette ({names}); ignored when `colours` is set.\n\
             palette: {palette}\n\
             # colours:\n\
             #   - \"#FFFFFF\"\n\
             #   - \"#000000\"\n\
             pens: [{pens}]\n\
             canvas:\n  width: {w}\n  height: {h}\n\
             # Colour matching: rgb or lab\n\
             metric: {metric}\n\
             output: {output}\n",
            names = Palette::BUILTIN_NAMES.join(", "),
            palette = defaults.palette,
            pens = pens.join(", "),
            w = defaults.canvas.width,
            h = defaults.canvas.height,
            metric = defaults.metric,
            output = defaults.output.display(),
        )
    }
}
