//! Drawing commands.

use std::fmt;

use crate::device::{Device, Surface, Tool};
use crate::types::{Colour, Point};

/// A single replayable drawing action.
///
/// Commands only set absolute device state or draw, so replaying one leaves
/// the device exactly as the first run did.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Flood the whole surface with a colour: selects the fill tool, sets
    /// the colour and draws a zero-area path at the origin.
    Fill(Colour),
    SetTool(Tool),
    SetColour(Colour),
    SetDiameter(u32),
    /// Draw a path of at least two points, in surface units.
    DrawPath(Vec<Point>),
}

/// Discriminant of a [`DrawCommand`], for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKind {
    Fill,
    SetTool,
    SetColour,
    SetDiameter,
    DrawPath,
}

impl DrawCommand {
    /// Perform the command against a surface and its device.
    pub fn apply<T: Surface + Device + ?Sized>(&self, target: &mut T) {
        match self {
            DrawCommand::Fill(colour) => {
                target.set_fill_tool();
                target.set_colour(*colour);
                target.draw(&[Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
            }
            DrawCommand::SetTool(Tool::Pen) => target.set_pen_tool(),
            DrawCommand::SetTool(Tool::Fill) => target.set_fill_tool(),
            DrawCommand::SetColour(colour) => target.set_colour(*colour),
            DrawCommand::SetDiameter(diameter) => target.set_pen_diameter(*diameter),
            DrawCommand::DrawPath(points) => target.draw(points),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            DrawCommand::Fill(_) => CommandKind::Fill,
            DrawCommand::SetTool(_) => CommandKind::SetTool,
            DrawCommand::SetColour(_) => CommandKind::SetColour,
            DrawCommand::SetDiameter(_) => CommandKind::SetDiameter,
            DrawCommand::DrawPath(_) => CommandKind::DrawPath,
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Fill(colour) => write!(f, "fill {}", colour),
            DrawCommand::SetTool(tool) => write!(f, "tool {}", tool),
            DrawCommand::SetColour(colour) => write!(f, "colour {}", colour),
            DrawCommand::SetDiameter(d) => write!(f, "diameter {}", d),
            DrawCommand::DrawPath(points) => write!(f, "path ({} points)", points.len()),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Fill => "fill",
            CommandKind::SetTool => "tool",
            CommandKind::SetColour => "colour",
            CommandKind::SetDiameter => "diameter",
            CommandKind::DrawPath => "path",
        };
        f.write_str(name)
    }
}
