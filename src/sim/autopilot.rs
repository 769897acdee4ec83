//! Idle/demo mode - the game plays itself
//!
//! Produces the input a simple player would give: start (or restart) when
//! halted, aim at the nearest enemy with the button held, and sidestep
//! enemies that get too close.

use glam::Vec2;

use super::state::GameState;
use super::tick::{MOVE_KEYS, PLAY_KEY, TickInput};

/// Input for the next tick of `state`
pub fn autopilot_input<R>(state: &GameState<R>) -> TickInput {
    let mut input = TickInput::default();

    if !state.phase.is_running() {
        input.keys_pressed.push(PLAY_KEY);
        return input;
    }

    let player = state.player.position;
    let nearest = state
        .enemies
        .iter_alive()
        .map(|(_, e)| e.position)
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = nearest else {
        return input;
    };

    // Aim: the pointer sits where the enemy is drawn on screen
    let on_screen = target - player + state.screen;
    input.pointer = (on_screen.x as i32, on_screen.y as i32);
    input.primary_down = true;

    // Dodge: step directly away when inside twice the contact reach
    let danger = state.tuning.enemy_player_reach() * 2.0;
    let away = player - target;
    if away.length_squared() < danger * danger {
        input.keys_down = dodge_keys(away);
    }

    input
}

/// Movement keys pointing roughly along `dir`
fn dodge_keys(dir: Vec2) -> Vec<char> {
    let [up, left, down, right] = MOVE_KEYS;
    let mut keys = Vec::with_capacity(2);
    if dir.y < 0.0 {
        keys.push(up);
    } else if dir.y > 0.0 {
        keys.push(down);
    }
    if dir.x < 0.0 {
        keys.push(left);
    } else if dir.x > 0.0 {
        keys.push(right);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::sim::tick;

    #[test]
    fn test_starts_halted_game() {
        let state = GameState::new(3);
        let input = autopilot_input(&state);
        assert_eq!(input.keys_pressed, vec![PLAY_KEY]);
        assert!(!input.primary_down);
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut state = GameState::new(3);
        state.resize(800, 600);
        state.phase = GamePhase::Running;
        state.enemies.allocate(Vec2::new(300.0, 0.0), Vec2::ZERO);
        state.enemies.allocate(Vec2::new(0.0, -200.0), Vec2::ZERO);

        let input = autopilot_input(&state);
        assert!(input.primary_down);
        assert_eq!(input.pointer, (400, 100));
        assert!(input.keys_down.is_empty());
    }

    #[test]
    fn test_dodges_close_enemy() {
        let mut state = GameState::new(3);
        state.resize(800, 600);
        state.phase = GamePhase::Running;
        state.enemies.allocate(Vec2::new(60.0, 0.0), Vec2::ZERO);

        let input = autopilot_input(&state);
        assert_eq!(input.keys_down, vec!['a']);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(42);
        state.resize(800, 600);
        let mut best = 0;
        for _ in 0..3000 {
            let mut input = autopilot_input(&state);
            tick(&mut state, &mut input);
            best = best.max(state.score);
        }
        assert!(best > 0);
        // Always restarts, so the run never stays halted
        assert!(state.phase.is_running() || state.phase == GamePhase::GameOver);
    }
}
