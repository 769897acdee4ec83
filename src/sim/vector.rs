//! 2D vector helpers on top of `glam::Vec2`
//!
//! Addition, subtraction and length come straight from glam. The one
//! game-specific operation is [`limit`], which rescales rather than caps.

use glam::Vec2;

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Rescale `v` to magnitude exactly `speed`, keeping its direction
///
/// Any non-zero vector comes out with length `speed`, so this is a fixed
/// magnitude, not a "no faster than". The zero vector has no direction and is
/// returned unchanged.
#[inline]
pub fn limit(v: Vec2, speed: f32) -> Vec2 {
    if v.x == 0.0 && v.y == 0.0 {
        return v;
    }
    v * (speed / v.length())
}
