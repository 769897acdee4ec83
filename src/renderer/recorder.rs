//! Canvas that records draw calls instead of rasterizing them
//!
//! Backs the headless runner and render tests.

use crate::platform::{Canvas, Color};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Circle {
        x: i32,
        y: i32,
        r: i32,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        size: u32,
        text: String,
        color: Color,
    },
    CenteredText {
        width: i32,
        height: i32,
        text: String,
    },
}

/// Draw target that keeps every command in order
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn this frame, banners included
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } | DrawCommand::CenteredText { text, .. } => {
                Some(text.as_str())
            }
            _ => None,
        })
    }

    /// The centered banner, if one was drawn
    pub fn banner(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::CenteredText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of circles drawn (live sprites on screen)
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, r, color });
    }

    fn text(&mut self, x: i32, y: i32, size: u32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            size,
            text: text.to_owned(),
            color,
        });
    }

    fn centered_text(&mut self, width: i32, height: i32, text: &str) {
        self.commands.push(DrawCommand::CenteredText {
            width,
            height,
            text: text.to_owned(),
        });
    }
}
