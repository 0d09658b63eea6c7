//! The image-to-commands pipeline.
//!
//! [`Sketcher`] ties the stages together: background selection, edge
//! detection, adaptive sampling, stroke synthesis and compilation.

use std::collections::BTreeMap;

use image::DynamicImage;
use serde::Serialize;

use crate::analysis::{detect_edges, dominant_colour, sample};
use crate::compile::{Compiler, DrawCommand, DrawingArea};
use crate::device::{Device, Surface};
use crate::error::Result;
use crate::output::Observer;
use crate::strokes::{build_edge_strokes, build_natural_strokes};
use crate::types::{Colour, Metric, Palette, PixelBuffer};

/// A compiled drawing and what went into it.
#[derive(Debug, Clone)]
pub struct Plan {
    pub commands: Vec<DrawCommand>,
    /// Background colour painted by the leading fill.
    pub fill: Colour,
    /// Size of the fitted image in pixels.
    pub size: (usize, usize),
    pub edges_detected: usize,
    pub edge_strokes: usize,
    pub samples: usize,
    pub natural_strokes: usize,
}

/// Machine-readable description of a [`Plan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub width: usize,
    pub height: usize,
    pub fill: Colour,
    pub edges_detected: usize,
    pub edge_strokes: usize,
    pub samples: usize,
    pub natural_strokes: usize,
    pub commands: usize,
    /// Command count per kind (`fill`, `tool`, `colour`, `diameter`, `path`).
    pub by_kind: BTreeMap<String, usize>,
}

impl Plan {
    pub fn strokes(&self) -> usize {
        self.edge_strokes + self.natural_strokes
    }

    pub fn summary(&self) -> PlanSummary {
        let mut by_kind = BTreeMap::new();
        for command in &self.commands {
            *by_kind.entry(command.kind().to_string()).or_insert(0) += 1;
        }

        PlanSummary {
            width: self.size.0,
            height: self.size.1,
            fill: self.fill,
            edges_detected: self.edges_detected,
            edge_strokes: self.edge_strokes,
            samples: self.samples,
            natural_strokes: self.natural_strokes,
            commands: self.commands.len(),
            by_kind,
        }
    }
}

/// Converts images into command sequences for one device and surface.
#[derive(Debug, Clone)]
pub struct Sketcher {
    palette: Palette,
    compiler: Compiler,
    area: DrawingArea,
}

impl Sketcher {
    /// Read the palette, pen diameters and size from a target.
    ///
    /// Fails if the device offers no colours.
    pub fn new<T: Surface + Device + ?Sized>(target: &T, metric: Metric) -> Result<Self> {
        let palette = Palette::with_metric(target.colours(), metric)?;
        let (width, height) = target.size();
        Ok(Self::from_parts(
            palette,
            target.pen_diameters(),
            DrawingArea::from_surface(width, height),
        ))
    }

    pub fn from_parts(palette: Palette, diameters: Vec<u32>, area: DrawingArea) -> Self {
        Self {
            palette,
            compiler: Compiler::new(diameters),
            area,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn area(&self) -> DrawingArea {
        self.area
    }

    /// Fit a decoded image into the drawing area and plan it.
    pub fn plan_image(&self, image: &DynamicImage, observer: &dyn Observer) -> Plan {
        let buffer = self.area.fit_image(image);
        self.plan(&buffer, observer)
    }

    /// Plan an already fitted buffer.
    pub fn plan(&self, buffer: &PixelBuffer, observer: &dyn Observer) -> Plan {
        observer.log("Generating drawing commands...");

        let fill = dominant_colour(buffer, &self.palette);

        observer.log("Detecting edges...");
        let edges = detect_edges(buffer, &self.palette);
        let edge_strokes = build_edge_strokes(&edges);

        observer.log("Creating adaptive sampling...");
        let samples = sample(buffer, &self.palette, fill, observer);

        observer.log("Creating natural strokes...");
        let natural_strokes = build_natural_strokes(&samples);

        let plan_edge_strokes = edge_strokes.len();
        let plan_natural_strokes = natural_strokes.len();

        let mut strokes = edge_strokes;
        strokes.extend(natural_strokes);

        let offset = self.area.centering_offset(buffer);
        let commands = self.compiler.compile(&strokes, offset, fill);

        observer.log(&format!(
            "{} commands generated ({} strokes, {} edges detected).",
            commands.len(),
            strokes.len(),
            edges.len()
        ));

        Plan {
            commands,
            fill,
            size: (buffer.width(), buffer.height()),
            edges_detected: edges.len(),
            edge_strokes: plan_edge_strokes,
            samples: samples.len(),
            natural_strokes: plan_natural_strokes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Silent;
    use crate::testing::Recorder;
    use std::cell::RefCell;

    #[test]
    fn test_new_rejects_empty_palette() {
        let rec = Recorder {
            colours: vec![],
            ..Default::default()
        };
        assert!(Sketcher::new(&rec, Metric::Rgb).is_err());
    }

    #[test]
    fn test_new_reads_target() {
        let rec = Recorder::default();
        let sketcher = Sketcher::new(&rec, Metric::Rgb).unwrap();
        assert_eq!(sketcher.palette().len(), 2);
        assert_eq!(sketcher.area(), DrawingArea::from_surface(800.0, 600.0));
    }

    #[test]
    fn test_uniform_image_is_single_fill() {
        let sketcher = Sketcher::new(&Recorder::default(), Metric::Rgb).unwrap();
        let buffer = PixelBuffer::filled(20, 10, Colour::rgb(10, 10, 10));

        let plan = sketcher.plan(&buffer, &Silent);

        assert_eq!(plan.commands, vec![DrawCommand::Fill(Colour::BLACK)]);
        assert_eq!(plan.strokes(), 0);
        assert_eq!(plan.summary().by_kind.get("fill"), Some(&1));
    }

    #[test]
    fn test_plan_logs_stages() {
        let sketcher = Sketcher::new(&Recorder::default(), Metric::Rgb).unwrap();
        let buffer = PixelBuffer::from_fn(12, 12, |x, _| if x < 8 { Colour::WHITE } else { Colour::BLACK });
        let lines = RefCell::new(Vec::new());
        let observer = |m: &str| lines.borrow_mut().push(m.to_string());

        let plan = sketcher.plan(&buffer, &observer);

        let lines = lines.borrow();
        assert_eq!(lines[0], "Generating drawing commands...");
        assert_eq!(lines[1], "Detecting edges...");
        assert_eq!(
            lines.last().unwrap(),
            &format!(
                "{} commands generated ({} strokes, {} edges detected).",
                plan.commands.len(),
                plan.strokes(),
                plan.edges_detected
            )
        );
        assert_eq!(plan.fill, Colour::WHITE);
        assert!(plan.edge_strokes > 0);
        assert!(plan.natural_strokes > 0);
    }

    #[test]
    fn test_summary_counts_kinds() {
        let sketcher = Sketcher::new(&Recorder::default(), Metric::Rgb).unwrap();
        let buffer = PixelBuffer::from_fn(12, 12, |x, _| if x < 8 { Colour::WHITE } else { Colour::BLACK });
        let plan = sketcher.plan(&buffer, &Silent);
        let summary = plan.summary();

        assert_eq!(summary.commands, plan.commands.len());
        assert_eq!(summary.by_kind.values().sum::<usize>(), plan.commands.len());
        assert_eq!(summary.by_kind["path"], plan.strokes());
        assert_eq!((summary.width, summary.height), (12, 12));
    }
}
