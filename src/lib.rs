//! Shooter - a top-down arcade survival game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (sprites, pools, timers, game state)
//! - `renderer`: Render pass over an abstract canvas
//! - `platform`: Input/draw capabilities a host must provide
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::{Canvas, Color, EventInput, Input};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// These are the defaults behind [`Tuning`]; gameplay code reads the tuning,
/// never these directly.
pub mod consts {
    /// Enemy radius (pixels)
    pub const ENEMY_SIZE: f32 = 25.0;
    /// Enemy homing speed (pixels per frame)
    pub const ENEMY_SPEED: f32 = 4.0;

    /// Bullet radius (pixels)
    pub const BULLET_SIZE: f32 = 10.0;
    /// Bullet speed (pixels per frame)
    pub const BULLET_SPEED: f32 = 12.0;

    /// Player max life
    pub const PLAYER_LIFE: i32 = 3;
    /// Player radius (pixels)
    pub const PLAYER_SIZE: f32 = 25.0;
    /// Player speed (pixels per frame, any direction)
    pub const PLAYER_SPEED: f32 = 8.0;

    /// Frames between +1 life regen
    pub const HEAL_DELAY: u32 = 1000;
    /// Frames between shots while the button is held
    pub const SHOOT_DELAY: u32 = 10;
    /// Initial frames between enemy spawns
    pub const SPAWN_DELAY: u32 = 100;
    /// Spawn delay reduction per spawn
    pub const SPAWN_DELAY_STEP: u32 = 5;
    /// Spawn delay never drops below this
    pub const SPAWN_DELAY_FLOOR: u32 = SPAWN_DELAY / 5;
    /// Entities this far from the player are removed
    pub const DESPAWN_DISTANCE: f32 = 2500.0;

    /// Slots per sprite pool (bullets and enemies each)
    pub const POOL_CAPACITY: usize = 1024;

    /// HUD text size (pixels)
    pub const HUD_FONT_SIZE: u32 = 24;
}

/// Packed RRGGBBAA palette
pub mod palette {
    use crate::platform::Color;

    pub const BACKGROUND: Color = Color::new(0x2C2C2CFF);
    /// Translucent overlay behind pause/game-over banners
    pub const SHADOW: Color = Color::new(0x000000AA);
    pub const ENEMY: Color = Color::new(0xDCDCDCFF);
    pub const BULLET: Color = Color::new(0xEA6962FF);
    pub const PLAYER: Color = Color::new(0xEA6962FF);
    pub const TEXT: Color = Color::new(0xDCDCDCFF);
}
