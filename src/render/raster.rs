//! In-memory raster canvas.
//!
//! A minimal stand-in for a real drawing surface: round pen stamps and a
//! 4-connected flood fill on an RGBA image.

use image::{Rgba, RgbaImage};

use crate::device::{Device, Surface, Tool};
use crate::types::{Colour, Point};

/// A white canvas that renders commands into an [`RgbaImage`].
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
    colours: Vec<Colour>,
    diameters: Vec<u32>,
    tool: Tool,
    colour: Colour,
    diameter: u32,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, colours: Vec<Colour>, diameters: Vec<u32>) -> Self {
        let diameter = diameters.iter().copied().min().unwrap_or(1);
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(Colour::WHITE.to_rgba())),
            colours,
            diameters,
            tool: Tool::Pen,
            colour: Colour::BLACK,
            diameter,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Colour of a canvas pixel, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let [r, g, b, _] = self.image.get_pixel(x, y).0;
        Some(Colour::rgb(r, g, b))
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    fn stamp(&mut self, cx: f64, cy: f64) {
        let radius = (self.diameter.max(1) as f64) / 2.0;
        let rgba = Rgba(self.colour.to_rgba());
        let (w, h) = self.image.dimensions();

        let x0 = (cx - radius).floor().max(0.0) as i64;
        let y0 = (cy - radius).floor().max(0.0) as i64;
        let x1 = ((cx + radius).ceil() as i64).min(w as i64 - 1);
        let y1 = ((cy + radius).ceil() as i64).min(h as i64 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(x as u32, y as u32, rgba);
                }
            }
        }
    }

    fn stroke_segment(&mut self, a: Point, b: Point) {
        let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
        // Stamp at least every half radius so the line stays solid.
        let spacing = (self.diameter.max(1) as f64 / 4.0).max(0.5);
        let steps = (length / spacing).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.stamp(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
        }
    }

    fn flood_fill(&mut self, start: Point) {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return;
        }
        let sx = (start.x.max(0.0) as u32).min(w - 1);
        let sy = (start.y.max(0.0) as u32).min(h - 1);

        let target = *self.image.get_pixel(sx, sy);
        let replacement = Rgba(self.colour.to_rgba());
        if target == replacement {
            return;
        }

        let mut stack = vec![(sx, sy)];
        while let Some((x, y)) = stack.pop() {
            if *self.image.get_pixel(x, y) != target {
                continue;
            }
            self.image.put_pixel(x, y, replacement);
            if x > 0 {
                stack.push((x - 1, y));
            }
            if x + 1 < w {
                stack.push((x + 1, y));
            }
            if y > 0 {
                stack.push((x, y - 1));
            }
            if y + 1 < h {
                stack.push((x, y + 1));
            }
        }
    }
}

impl Surface for RasterCanvas {
    fn draw(&mut self, points: &[Point]) {
        let Some(&first) = points.first() else {
            return;
        };
        match self.tool {
            Tool::Fill => self.flood_fill(first),
            Tool::Pen => {
                self.stamp(first.x, first.y);
                for pair in points.windows(2) {
                    self.stroke_segment(pair[0], pair[1]);
                }
            }
        }
    }

    fn size(&self) -> (f64, f64) {
        (self.image.width() as f64, self.image.height() as f64)
    }
}

impl Device for RasterCanvas {
    fn set_fill_tool(&mut self) {
        self.tool = Tool::Fill;
    }

    fn set_pen_tool(&mut self) {
        self.tool = Tool::Pen;
    }

    fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    fn set_pen_diameter(&mut self, diameter: u32) {
        self.diameter = diameter;
    }

    fn colours(&self) -> Vec<Colour> {
        self.colours.clone()
    }

    fn pen_diameters(&self) -> Vec<u32> {
        self.diameters.clone()
    }
}
