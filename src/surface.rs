// The handful of 2D drawing calls the particle field needs. The browser canvas
// implements this in `renderer`; `RecordingSurface` keeps the calls in memory
// so frames can be inspected without a browser.

use vecmath::Vector2;

pub trait DrawSurface {
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, fill_style: &str);
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        stroke_style: &str,
        line_width: f64,
    );
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize {
        width: u32,
        height: u32,
    },
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: Vector2<f64>,
        radius: f64,
        fill_style: String,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        stroke_style: String,
        line_width: f64,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Number of commands that put pixels on the surface.
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Resize { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, fill_style: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill_style: fill_style.to_owned(),
        });
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        stroke_style: &str,
        line_width: f64,
    ) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke_style: stroke_style.to_owned(),
            line_width,
        });
    }
}
