//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document can override any subset of fields,
//! e.g. `{"enemy_speed": 5.0, "spawn_delay": 60}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_speed: f32,

    // === Bullets ===
    pub bullet_size: f32,
    pub bullet_speed: f32,

    // === Player ===
    pub player_life: i32,
    pub player_size: f32,
    pub player_speed: f32,

    // === Cadence (frames) ===
    pub heal_delay: u32,
    pub shoot_delay: u32,
    /// Initial spawn delay; restored on restart
    pub spawn_delay: u32,
    pub spawn_delay_step: u32,
    pub spawn_delay_floor: u32,

    // === World ===
    pub despawn_distance: f32,
    /// Slots per pool (bullets and enemies each)
    pub pool_capacity: usize,

    // === HUD ===
    pub hud_font_size: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,

            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,

            player_life: PLAYER_LIFE,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,

            heal_delay: HEAL_DELAY,
            shoot_delay: SHOOT_DELAY,
            spawn_delay: SPAWN_DELAY,
            spawn_delay_step: SPAWN_DELAY_STEP,
            spawn_delay_floor: SPAWN_DELAY_FLOOR,

            despawn_distance: DESPAWN_DISTANCE,
            pool_capacity: POOL_CAPACITY,

            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    /// The document is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// A field holds a value the simulation can't run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "malformed tuning: {e}"),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse a JSON override document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize (all fields) as pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("enemy_size", self.enemy_size)?;
        positive("enemy_speed", self.enemy_speed)?;
        positive("bullet_size", self.bullet_size)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("player_size", self.player_size)?;
        positive("player_speed", self.player_speed)?;
        positive("despawn_distance", self.despawn_distance)?;

        if self.player_life < 1 {
            return Err(TuningError::Invalid {
                field: "player_life",
                reason: "must be at least 1",
            });
        }
        if self.pool_capacity == 0 {
            return Err(TuningError::Invalid {
                field: "pool_capacity",
                reason: "must be at least 1",
            });
        }
        if self.spawn_delay_floor > self.spawn_delay {
            return Err(TuningError::Invalid {
                field: "spawn_delay_floor",
                reason: "must not exceed spawn_delay",
            });
        }
        Ok(())
    }

    /// Contact reach between an enemy and a bullet
    pub fn enemy_bullet_reach(&self) -> f32 {
        self.enemy_size + self.bullet_size
    }

    /// Contact reach between an enemy and the player
    pub fn enemy_player_reach(&self) -> f32 {
        self.enemy_size + self.player_size
    }

    /// Spawn delay after one more spawn, starting from `current`
    pub fn next_spawn_delay(&self, current: u32) -> u32 {
        if current > self.spawn_delay_floor {
            current
                .saturating_sub(self.spawn_delay_step)
                .max(self.spawn_delay_floor)
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let t = Tuning::default();
        assert!(t.validate().is_ok());
        assert_eq!(t.spawn_delay_floor, 20);
        assert_eq!(t.enemy_bullet_reach(), 35.0);
        assert_eq!(t.enemy_player_reach(), 50.0);
    }

    #[test]
    fn test_partial_override() {
        let t = Tuning::from_json(r#"{"enemy_speed": 6.5, "pool_capacity": 64}"#).unwrap();
        assert_eq!(t.enemy_speed, 6.5);
        assert_eq!(t.pool_capacity, 64);
        // Untouched fields keep their defaults
        assert_eq!(t.bullet_speed, BULLET_SPEED);
        assert_eq!(t.heal_delay, HEAL_DELAY);
    }

    #[test]
    fn test_bundled_hard_profile() {
        let t = Tuning::from_json(include_str!("../demos/hard.tuning.json")).unwrap();
        assert_eq!(t.spawn_delay, 60);
        assert_eq!(t.spawn_delay_floor, 12);
        assert_eq!(t.player_life, PLAYER_LIFE);
    }

    #[test]
    fn test_round_trip_through_json() {
        let t = Tuning {
            shoot_delay: 3,
            ..Default::default()
        };
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_rejects_malformed() {
        let err = Tuning::from_json("{not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("malformed tuning"));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{"player_speed": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "player_speed",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{"pool_capacity": 0}"#).unwrap_err();
        assert!(err.to_string().contains("pool_capacity"));

        let err = Tuning::from_json(r#"{"spawn_delay": 10, "spawn_delay_floor": 11}"#).unwrap_err();
        assert!(err.to_string().contains("spawn_delay_floor"));
    }

    #[test]
    fn test_spawn_ramp() {
        let t = Tuning::default();
        assert_eq!(t.next_spawn_delay(100), 95);
        assert_eq!(t.next_spawn_delay(25), 20);
        // Floor holds
        assert_eq!(t.next_spawn_delay(20), 20);
        // Odd values clamp to the floor rather than undershooting it
        assert_eq!(t.next_spawn_delay(22), 20);

        let mut delay = t.spawn_delay;
        for _ in 0..100 {
            delay = t.next_spawn_delay(delay);
        }
        assert_eq!(delay, t.spawn_delay_floor);
    }
}
