//! Game state and phase transitions

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::SpritePool;
use super::sprite::Sprite;
use super::timer::Timer;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing has happened yet
    NotStarted,
    /// Game is paused
    Paused,
    /// Active gameplay
    Running,
    /// Player died; waiting for restart
    GameOver,
}

impl GamePhase {
    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }

    /// Overlay text shown while the simulation is halted
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GamePhase::NotStarted => Some("Shooter (Space to play)"),
            GamePhase::Paused => Some("Paused (Space to play)"),
            GamePhase::GameOver => Some("Game Over (Space to restart)"),
            GamePhase::Running => None,
        }
    }
}

/// Complete game state
///
/// One instance lives for the whole process; restarting after a game over
/// resets it in place.
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Half the screen size: camera-to-screen offset and spawn bound
    pub screen: Vec2,
    pub phase: GamePhase,
    pub player: Sprite,
    pub bullets: SpritePool,
    pub enemies: SpritePool,
    /// +1 life regen cadence
    pub heal: Timer,
    /// Shot cooldown; only rearmed when a shot is fired
    pub shoot: Timer,
    /// Enemy spawn cadence; its delay shrinks with every spawn
    pub spawn: Timer,
    /// Enemies destroyed this run
    pub score: u64,
    pub tuning: Tuning,
    pub rng: R,
}

impl GameState<Pcg32> {
    /// Default tuning with a seeded PCG source
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Tuning::default(), Pcg32::seed_from_u64(seed))
    }
}

impl<R> GameState<R> {
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let capacity = tuning.pool_capacity;
        let mut state = Self {
            screen: Vec2::ZERO,
            phase: GamePhase::NotStarted,
            player: Sprite::default(),
            bullets: SpritePool::new(capacity),
            enemies: SpritePool::new(capacity),
            heal: Timer::new(tuning.heal_delay),
            shoot: Timer::new(tuning.shoot_delay),
            spawn: Timer::new(tuning.spawn_delay),
            score: 0,
            tuning,
            rng,
        };
        state.reset_round();
        state
    }

    /// Fresh round: full-life player at the origin, empty pools, every
    /// cadence ready to fire, spawn ramp restarted. Leaves the phase alone.
    pub fn reset_round(&mut self) {
        self.score = 0;

        self.player = Sprite {
            life: self.tuning.player_life,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        };

        self.bullets.clear();
        self.enemies.clear();

        self.heal = Timer::new(self.tuning.heal_delay);
        self.shoot = Timer::new(self.tuning.shoot_delay);
        self.spawn = Timer::new(self.tuning.spawn_delay);
    }

    /// Window size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        log::info!("Resized to {}x{}", width, height);
    }

    /// World point rendered at the screen center
    pub fn camera(&self) -> Vec2 {
        self.player.position
    }

    /// Play/pause input
    pub fn on_play(&mut self) {
        self.phase = match self.phase {
            GamePhase::NotStarted => {
                log::info!("Game started");
                GamePhase::Running
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Running
            }
            GamePhase::Running => {
                log::info!("Paused (score {})", self.score);
                GamePhase::Paused
            }
            GamePhase::GameOver => {
                self.reset_round();
                log::info!("Restarted");
                GamePhase::Running
            }
        };
    }

    /// Move to GameOver once the player is out of life
    pub fn check_game_over(&mut self) {
        if self.phase.is_running() && !self.player.is_alive() {
            self.phase = GamePhase::GameOver;
            log::info!("Game over (score {})", self.score);
        }
    }
}
