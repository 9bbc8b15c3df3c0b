//! In-memory surface
//!
//! Keeps every draw call so headless runs and tests can inspect a frame.

use super::{Color, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
    },
}

/// Surface that records the current frame
///
/// A full-surface rectangle starts a new frame and drops the previous one,
/// the same way a clear wipes a real canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: u64,
    bounds: Option<(f32, f32)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat rectangles at the origin of this size as a clear
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            bounds: Some((width, height)),
            ..Self::default()
        }
    }

    /// Draw calls of the most recent frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if self.bounds == Some((w, h)) && x == 0.0 && y == 0.0 {
            self.commands.clear();
            self.frames += 1;
        }
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, r, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}
