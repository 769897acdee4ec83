//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One `tick` per frame, no delta time
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (by pool slot index)
//! - No rendering or host dependencies beyond the `platform` traits

pub mod autopilot;
pub mod pool;
pub mod rng;
pub mod sprite;
pub mod state;
pub mod tick;
pub mod timer;
pub mod vector;

pub use autopilot::autopilot_input;
pub use pool::SpritePool;
pub use rng::{Lcg, RandomSource};
pub use sprite::Sprite;
pub use state::{GamePhase, GameState};
pub use tick::{MOVE_KEYS, PLAY_KEY, TickInput, edge_offset, tick};
pub use timer::Timer;
pub use vector::{distance, limit};
