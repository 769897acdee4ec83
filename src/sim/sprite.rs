//! Point entities: the player, bullets and enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::distance;
use crate::platform::{Canvas, Color};

/// A positioned, moving, damageable point
///
/// `life == 0` means the sprite is dead (or its pool slot is vacant).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sprite {
    pub life: i32,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Sprite {
    /// A live sprite with one hit point
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            life: 1,
            position,
            velocity,
        }
    }

    /// Revive in place with one hit point
    pub fn init(&mut self, position: Vec2, velocity: Vec2) {
        *self = Self::new(position, velocity);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Step one frame along the velocity (dead sprites stay put)
    pub fn advance(&mut self) {
        if self.is_alive() {
            self.position += self.velocity;
        }
    }

    /// True once the sprite is at least `min_distance` from `camera`
    ///
    /// Checked regardless of life.
    pub fn is_away(&self, camera: Vec2, min_distance: f32) -> bool {
        distance(self.position, camera) >= min_distance
    }

    /// Contact test that damages both sides
    ///
    /// If both sprites are alive and closer than `min_distance`, each loses
    /// one life and this returns true. Otherwise nothing changes.
    pub fn touch(&mut self, other: &mut Sprite, min_distance: f32) -> bool {
        if self.is_alive()
            && other.is_alive()
            && distance(self.position, other.position) < min_distance
        {
            self.life -= 1;
            other.life -= 1;
            return true;
        }
        false
    }

    /// Draw as a filled circle, projected so `camera` lands on `screen_center`
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        camera: Vec2,
        screen_center: Vec2,
        radius: f32,
        color: Color,
    ) {
        if !self.is_alive() {
            return;
        }
        let p = self.position - camera + screen_center;
        canvas.fill_circle(p.x as i32, p.y as i32, radius as i32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_advance_only_when_alive() {
        let mut s = Sprite::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, -1.0));
        s.advance();
        assert_eq!(s.position, Vec2::new(3.0, 0.0));

        s.life = 0;
        s.advance();
        assert_eq!(s.position, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_is_away_ignores_life() {
        let mut s = Sprite::new(Vec2::new(100.0, 0.0), Vec2::ZERO);
        assert!(s.is_away(Vec2::ZERO, 100.0));
        assert!(!s.is_away(Vec2::ZERO, 100.5));
        s.life = 0;
        assert!(s.is_away(Vec2::ZERO, 50.0));
    }

    #[test]
    fn test_touch_in_range() {
        let mut a = Sprite::new(Vec2::ZERO, Vec2::ZERO);
        let mut b = Sprite::new(Vec2::new(10.0, 0.0), Vec2::ZERO);
        b.life = 3;

        assert!(a.touch(&mut b, 35.0));
        assert_eq!(a.life, 0);
        assert_eq!(b.life, 2);

        // `a` is dead now, so no further contact
        assert!(!a.touch(&mut b, 35.0));
        assert_eq!(b.life, 2);
    }

    #[test]
    fn test_touch_out_of_range() {
        let mut a = Sprite::new(Vec2::ZERO, Vec2::ZERO);
        let mut b = Sprite::new(Vec2::new(35.0, 0.0), Vec2::ZERO);

        // Strictly-less-than reach
        assert!(!a.touch(&mut b, 35.0));
        assert_eq!((a.life, b.life), (1, 1));
    }

    #[test]
    fn test_draw_projects_around_camera() {
        let mut canvas = RecordingCanvas::default();
        let s = Sprite::new(Vec2::new(110.0, 95.0), Vec2::ZERO);
        let color = Color::new(0xFF0000FF);

        s.draw(&mut canvas, Vec2::new(100.0, 100.0), Vec2::new(400.0, 300.0), 10.0, color);
        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Circle { x: 410, y: 295, r: 10, color }]
        );

        let dead = Sprite::default();
        dead.draw(&mut canvas, Vec2::ZERO, Vec2::ZERO, 10.0, color);
        assert_eq!(canvas.commands.len(), 1);
    }
}
