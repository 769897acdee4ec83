//! Platform abstraction layer
//!
//! The capabilities a host (browser canvas, headless runner, tests) must
//! provide to the game:
//! - Input queries (pointer, primary button, keyboard)
//! - Draw primitives (rects, circles, text)
//!
//! Colors cross this boundary packed as `0xRRGGBBAA`; hosts decompose them.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A color packed as `0xRRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// Split into `[r, g, b, a]` bytes
    pub const fn rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// CSS hex notation (`#rrggbbaa`)
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// Input state queried once per update
///
/// The `*_pressed`/`*_released` edges are consuming: a host reports each edge
/// once and then forgets it, which is why they take `&mut self`.
pub trait Input {
    /// Pointer X in screen pixels
    fn pointer_x(&self) -> i32;
    /// Pointer Y in screen pixels
    fn pointer_y(&self) -> i32;
    /// Primary (left) button currently held
    fn primary_down(&self) -> bool;
    /// Primary button released since the last query
    fn primary_released(&mut self) -> bool;
    /// Key currently held (lowercase character)
    fn key_down(&self, key: char) -> bool;
    /// Key pressed since the last query
    fn key_pressed(&mut self, key: char) -> bool;
}

/// Input fed by host events between frames
///
/// Hosts push keyboard and pointer events as they arrive; the simulation
/// reads it through [`Input`] once per frame.
#[derive(Debug, Clone, Default)]
pub struct EventInput {
    pointer: (i32, i32),
    down: bool,
    released: bool,
    keys_down: HashSet<char>,
    keys_pressed: HashSet<char>,
}

impl EventInput {
    /// Key went down; auto-repeat keeps it held without a new press
    pub fn on_key_down(&mut self, key: char, repeat: bool) {
        self.keys_down.insert(key);
        if !repeat {
            self.keys_pressed.insert(key);
        }
    }

    pub fn on_key_up(&mut self, key: char) {
        self.keys_down.remove(&key);
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
        self.down = true;
        self.released = false;
    }

    pub fn on_pointer_up(&mut self) {
        self.down = false;
        self.released = true;
    }

    /// Drop pending presses and releases, keeping held state
    ///
    /// Called on frames where something else drives the game, so those edges
    /// don't fire later.
    pub fn discard_edges(&mut self) {
        self.keys_pressed.clear();
        self.released = false;
    }
}

impl Input for EventInput {
    fn pointer_x(&self) -> i32 {
        self.pointer.0
    }

    fn pointer_y(&self) -> i32 {
        self.pointer.1
    }

    fn primary_down(&self) -> bool {
        self.down
    }

    fn primary_released(&mut self) -> bool {
        std::mem::take(&mut self.released)
    }

    fn key_down(&self, key: char) -> bool {
        self.keys_down.contains(&key)
    }

    fn key_pressed(&mut self, key: char) -> bool {
        self.keys_pressed.remove(&key)
    }
}

/// Immediate-mode 2D draw target
///
/// Coordinates are screen pixels, origin top-left.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color);
    /// Text with its top-left corner at (x, y)
    fn text(&mut self, x: i32, y: i32, size: u32, text: &str, color: Color);
    /// Banner text centered in a `width` x `height` area at the origin
    fn centered_text(&mut self, width: i32, height: i32, text: &str);
}
