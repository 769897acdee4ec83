//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. There is no delta time:
//! speeds are pixels per frame and cadences are frame counts.

use glam::Vec2;

use super::pool::SpritePool;
use super::rng::RandomSource;
use super::sprite::Sprite;
use super::state::GameState;
use super::vector::limit;
use crate::platform::Input;

/// Start/pause/restart key
pub const PLAY_KEY: char = ' ';
/// Movement keys: up, left, down, right
pub const MOVE_KEYS: [char; 4] = ['w', 'a', 's', 'd'];

/// Owned input snapshot for a single tick
///
/// Hosts that poll events into a struct, the autopilot, and tests all feed
/// the simulation through this.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in screen pixels
    pub pointer: (i32, i32),
    /// Primary button held
    pub primary_down: bool,
    /// Primary button released since the last tick
    pub primary_released: bool,
    /// Keys held
    pub keys_down: Vec<char>,
    /// Keys pressed since the last tick
    pub keys_pressed: Vec<char>,
}

impl TickInput {
    /// Just the play key
    pub fn play() -> Self {
        Self {
            keys_pressed: vec![PLAY_KEY],
            ..Default::default()
        }
    }

    /// Holding the given keys
    pub fn holding(keys: &[char]) -> Self {
        Self {
            keys_down: keys.to_vec(),
            ..Default::default()
        }
    }

    /// Holding the primary button with the pointer at (x, y)
    pub fn firing_at(x: i32, y: i32) -> Self {
        Self {
            pointer: (x, y),
            primary_down: true,
            ..Default::default()
        }
    }
}

impl Input for TickInput {
    fn pointer_x(&self) -> i32 {
        self.pointer.0
    }

    fn pointer_y(&self) -> i32 {
        self.pointer.1
    }

    fn primary_down(&self) -> bool {
        self.primary_down
    }

    fn primary_released(&mut self) -> bool {
        std::mem::take(&mut self.primary_released)
    }

    fn key_down(&self, key: char) -> bool {
        self.keys_down.contains(&key)
    }

    fn key_pressed(&mut self, key: char) -> bool {
        match self.keys_pressed.iter().position(|&k| k == key) {
            Some(i) => {
                self.keys_pressed.swap_remove(i);
                true
            }
            None => false,
        }
    }
}

/// Advance the game by one frame
///
/// Order matters and matches the classic game: play input, player movement,
/// heal, shoot, spawn, bullets, then enemies (with all collisions).
pub fn tick<R, I>(state: &mut GameState<R>, input: &mut I)
where
    R: RandomSource,
    I: Input + ?Sized,
{
    if input.key_pressed(PLAY_KEY) {
        state.on_play();
    }

    if !state.phase.is_running() {
        return;
    }

    steer_player(state, input);
    state.player.advance();

    heal_player(state);
    fire_bullet(state, input);
    spawn_enemy(state);

    update_bullets(state);
    update_enemies(state);

    state.check_game_over();
}

/// WASD to a constant-speed velocity (diagonals are not faster)
fn steer_player<R, I: Input + ?Sized>(state: &mut GameState<R>, input: &I) {
    let [up, left, down, right] = MOVE_KEYS;
    let mut dir = Vec2::ZERO;
    if input.key_down(up) {
        dir.y -= 1.0;
    }
    if input.key_down(left) {
        dir.x -= 1.0;
    }
    if input.key_down(down) {
        dir.y += 1.0;
    }
    if input.key_down(right) {
        dir.x += 1.0;
    }
    state.player.velocity = limit(dir, state.tuning.player_speed);
}

fn heal_player<R>(state: &mut GameState<R>) {
    if state.heal.ready() {
        if state.player.life < state.tuning.player_life {
            state.player.life += 1;
        }
        state.heal.reset();
    }
}

/// Shoot toward the pointer
///
/// The cooldown only rearms when a shot actually goes out, so after an idle
/// stretch the next press fires immediately.
fn fire_bullet<R, I: Input + ?Sized>(state: &mut GameState<R>, input: &mut I) {
    if !state.shoot.ready() {
        return;
    }
    // A quick click can start and end between two frames; count the release
    if !(input.primary_down() || input.primary_released()) {
        return;
    }

    let pointer = Vec2::new(input.pointer_x() as f32, input.pointer_y() as f32);
    let velocity = limit(pointer - state.screen, state.tuning.bullet_speed);
    state.bullets.allocate(state.player.position, velocity);
    state.shoot.reset();
}

/// Drop an enemy on a random screen edge around the player, then speed up
/// the spawn cadence
fn spawn_enemy<R: RandomSource>(state: &mut GameState<R>) {
    if !state.spawn.ready() {
        return;
    }

    let offset = edge_offset(&mut state.rng, state.screen);
    state
        .enemies
        .allocate(state.player.position + offset, Vec2::ZERO);

    let delay = state.tuning.next_spawn_delay(state.spawn.delay);
    if delay != state.spawn.delay {
        log::debug!("Spawn delay {} -> {}", state.spawn.delay, delay);
        state.spawn.set_delay(delay);
    }
    state.spawn.reset();
}

/// Random point on the screen border, relative to the screen center
///
/// Edge first (0 top, 1 left, 2 bottom, 3 right), then a uniform integer
/// offset along it.
pub fn edge_offset<R: RandomSource + ?Sized>(rng: &mut R, half: Vec2) -> Vec2 {
    let (hx, hy) = (half.x as i32, half.y as i32);
    match rng.range(0, 3) {
        0 => Vec2::new(rng.range(-hx, hx) as f32, -half.y),
        1 => Vec2::new(-half.x, rng.range(-hy, hy) as f32),
        2 => Vec2::new(rng.range(-hx, hx) as f32, half.y),
        _ => Vec2::new(half.x, rng.range(-hy, hy) as f32),
    }
}

fn update_bullets<R>(state: &mut GameState<R>) {
    let camera = state.player.position;
    let despawn = state.tuning.despawn_distance;

    for i in 0..state.bullets.len() {
        let bullet = &mut state.bullets[i];
        if !bullet.is_alive() {
            continue;
        }
        bullet.advance();
        if bullet.is_away(camera, despawn) {
            state.bullets.release(i);
        }
    }
}

/// Home in, despawn, then bullet and player contact
fn update_enemies<R>(state: &mut GameState<R>) {
    let despawn = state.tuning.despawn_distance;
    let enemy_speed = state.tuning.enemy_speed;
    let bullet_reach = state.tuning.enemy_bullet_reach();
    let player_reach = state.tuning.enemy_player_reach();

    for i in 0..state.enemies.len() {
        let target = state.player.position;
        let enemy = &mut state.enemies[i];
        if !enemy.is_alive() {
            continue;
        }

        enemy.velocity = limit(target - enemy.position, enemy_speed);
        enemy.advance();
        if enemy.is_away(target, despawn) {
            state.enemies.release(i);
            continue;
        }

        if shot_down(enemy, &mut state.bullets, bullet_reach) {
            state.enemies.release(i);
            state.score += 1;
            continue;
        }

        if enemy.touch(&mut state.player, player_reach) {
            state.enemies.release(i);
        }
    }
}

/// Test `enemy` against every bullet; the first hit releases that bullet
fn shot_down(enemy: &mut Sprite, bullets: &mut SpritePool, reach: f32) -> bool {
    for j in 0..bullets.len() {
        if enemy.touch(&mut bullets[j], reach) {
            bullets.release(j);
            return true;
        }
    }
    false
}
