//! Test doubles shared by unit tests.

use crate::device::{Device, Surface};
use crate::types::{Colour, Point};

/// Records every surface and device call as a short string.
#[derive(Debug)]
pub struct Recorder {
    pub calls: Vec<String>,
    pub colours: Vec<Colour>,
    pub diameters: Vec<u32>,
    pub size: (f64, f64),
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            colours: vec![Colour::WHITE, Colour::BLACK],
            diameters: vec![2, 4, 10, 20, 40],
            size: (800.0, 600.0),
        }
    }
}

impl Surface for Recorder {
    fn draw(&mut self, points: &[Point]) {
        let path: Vec<String> = points.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
        self.calls.push(format!("draw {}", path.join(" ")));
    }

    fn size(&self) -> (f64, f64) {
        self.size
    }
}

impl Device for Recorder {
    fn set_fill_tool(&mut self) {
        self.calls.push("fill-tool".to_string());
    }

    fn set_pen_tool(&mut self) {
        self.calls.push("pen-tool".to_string());
    }

    fn set_colour(&mut self, colour: Colour) {
        self.calls.push(format!("colour {}", colour));
    }

    fn set_pen_diameter(&mut self, diameter: u32) {
        self.calls.push(format!("diameter {}", diameter));
    }

    fn colours(&self) -> Vec<Colour> {
        self.colours.clone()
    }

    fn pen_diameters(&self) -> Vec<u32> {
        self.diameters.clone()
    }
}
