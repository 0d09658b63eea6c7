//! Stroke-to-command compiler.
//!
//! Strokes are layered edges-first and longest-first, grouped by colour and
//! then by pen diameter, so the device changes colour as rarely as possible.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use crate::device::Tool;
use crate::types::{Colour, Point, Stroke};

use super::command::DrawCommand;
use super::layout::{to_surface, EDGE_PEN_DIAMETER};

/// Device state as the compiled sequence will leave it, to skip redundant
/// setter commands. Scoped to one compilation.
#[derive(Debug, Default)]
struct DeviceCache {
    tool: Option<Tool>,
    colour: Option<Colour>,
    diameter: Option<u32>,
}

impl DeviceCache {
    fn select(&mut self, commands: &mut Vec<DrawCommand>, tool: Tool, colour: Colour) {
        if self.tool != Some(tool) {
            commands.push(DrawCommand::SetTool(tool));
            self.tool = Some(tool);
        }
        if self.colour != Some(colour) {
            commands.push(DrawCommand::SetColour(colour));
            self.colour = Some(colour);
        }
    }

    fn diameter(&mut self, commands: &mut Vec<DrawCommand>, diameter: u32) {
        if self.diameter != Some(diameter) {
            commands.push(DrawCommand::SetDiameter(diameter));
            self.diameter = Some(diameter);
        }
    }
}

/// Compiles strokes for a device with a fixed set of pen diameters.
#[derive(Debug, Clone)]
pub struct Compiler {
    /// Available diameters, ascending.
    diameters: Vec<u32>,
}

impl Compiler {
    pub fn new(mut diameters: Vec<u32>) -> Self {
        diameters.sort_unstable();
        Self { diameters }
    }

    /// The device diameters, ascending.
    pub fn diameters(&self) -> &[u32] {
        &self.diameters
    }

    /// Pen diameter for a stroke.
    ///
    /// Edge strokes always use [`EDGE_PEN_DIAMETER`]. Natural strokes pick by
    /// length from the sorted diameters: more than 10 points takes index 3,
    /// more than 5 takes index 2, anything else index 1, each clamped to the
    /// last entry. A device without diameters falls back to the edge pen.
    pub fn pen_diameter(&self, stroke: &Stroke) -> u32 {
        if stroke.is_edge() {
            return EDGE_PEN_DIAMETER;
        }
        let tier = match stroke.len() {
            n if n > 10 => 3,
            n if n > 5 => 2,
            _ => 1,
        };
        let Some(last) = self.diameters.len().checked_sub(1) else {
            return EDGE_PEN_DIAMETER;
        };
        self.diameters[tier.min(last)]
    }

    /// Compile strokes into a command sequence that starts with a fill.
    ///
    /// `offset` is added to every point before scaling to surface units.
    pub fn compile(&self, strokes: &[Stroke], offset: Point, fill: Colour) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Fill(fill)];
        let mut cache = DeviceCache {
            tool: Some(Tool::Fill),
            colour: Some(fill),
            diameter: None,
        };

        let mut ordered: Vec<&Stroke> = strokes.iter().collect();
        ordered.sort_by_key(|s| (!s.is_edge(), Reverse(s.len())));

        for (colour, group) in group_by_colour(&ordered) {
            cache.select(&mut commands, Tool::Pen, colour);

            let mut buckets: BTreeMap<u32, Vec<&Stroke>> = BTreeMap::new();
            for stroke in group {
                buckets.entry(self.pen_diameter(stroke)).or_default().push(stroke);
            }

            for (diameter, bucket) in buckets {
                cache.diameter(&mut commands, diameter);
                for stroke in bucket {
                    commands.push(DrawCommand::DrawPath(surface_path(stroke, offset)));
                }
            }
        }

        commands
    }
}

/// Split strokes by colour, colours in first-seen order, strokes in input
/// order within each colour.
fn group_by_colour<'a>(strokes: &[&'a Stroke]) -> Vec<(Colour, Vec<&'a Stroke>)> {
    let mut groups: Vec<(Colour, Vec<&'a Stroke>)> = Vec::new();
    let mut index: HashMap<Colour, usize> = HashMap::new();

    for &stroke in strokes {
        let slot = *index.entry(stroke.colour()).or_insert_with(|| {
            groups.push((stroke.colour(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(stroke);
    }

    groups
}

/// Stroke points in surface units, padded to the two points a visible mark
/// needs.
fn surface_path(stroke: &Stroke, offset: Point) -> Vec<Point> {
    let mut coords: Vec<Point> = stroke.points().iter().map(|&p| to_surface(p, offset)).collect();
    if coords.len() == 1 {
        let only = coords[0];
        coords.push(Point::new(only.x + 1.0, only.y));
    }
    coords
}
