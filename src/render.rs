//! Draw-call boundary
//!
//! The simulation never rasterizes anything itself. Each tick it hands
//! entity geometry to a `Renderer`; the frontend decides how to paint it.
//! `RecordingRenderer` captures the calls as `DrawCommand`s, which is what
//! tests and the headless runner use.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(125, 125, 125);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    /// Palette entities pick their colors from
    pub const PALETTE: [Color; 6] = [
        Color::RED,
        Color::BLUE,
        Color::YELLOW,
        Color::GREEN,
        Color::MAGENTA,
        Color::CYAN,
    ];
}

/// Primitive drawing operations provided by a frontend
///
/// Implementations must not call back into the simulation.
pub trait Renderer {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color);

    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Draw a line of text with its top-left corner at `pos`
    fn text(&mut self, pos: Vec2, text: &str, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        start: Vec2,
        end: Vec2,
        width: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
}

/// Renderer that records the current frame's draw calls
///
/// `clear` starts a new frame and drops what was recorded before it.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last `clear`, inclusive
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            color,
        });
    }
}
