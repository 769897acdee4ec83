//! Render pass
//!
//! Draws the world through the platform [`Canvas`] trait. Rendering only
//! reads the game state; everything is drawn relative to the player, who
//! stays at the screen center.

mod recorder;

pub use recorder::{DrawCommand, RecordingCanvas};

use crate::palette;
use crate::platform::Canvas;
use crate::sim::GameState;

/// Left/top HUD margin (pixels)
const HUD_MARGIN: i32 = 10;

/// Draw one frame
pub fn render<R, C: Canvas + ?Sized>(state: &GameState<R>, canvas: &mut C) {
    let w = (state.screen.x * 2.0) as i32;
    let h = (state.screen.y * 2.0) as i32;
    let camera = state.camera();
    let tuning = &state.tuning;

    canvas.fill_rect(0, 0, w, h, palette::BACKGROUND);

    for enemy in state.enemies.iter() {
        enemy.draw(canvas, camera, state.screen, tuning.enemy_size, palette::ENEMY);
    }
    for bullet in state.bullets.iter() {
        bullet.draw(canvas, camera, state.screen, tuning.bullet_size, palette::BULLET);
    }
    state
        .player
        .draw(canvas, camera, state.screen, tuning.player_size, palette::PLAYER);

    draw_hud(state, canvas);

    if let Some(banner) = state.phase.banner() {
        canvas.fill_rect(0, 0, w, h, palette::SHADOW);
        canvas.centered_text(w, h, banner);
    }
}

/// Score and life, top-left
fn draw_hud<R, C: Canvas + ?Sized>(state: &GameState<R>, canvas: &mut C) {
    let size = state.tuning.hud_font_size;
    let line = size as i32 + HUD_MARGIN / 2;

    canvas.text(
        HUD_MARGIN,
        HUD_MARGIN,
        size,
        &format!("Score: {}", state.score),
        palette::TEXT,
    );
    canvas.text(
        HUD_MARGIN,
        HUD_MARGIN + line,
        size,
        &format!("Life: {}", state.player.life.max(0)),
        palette::TEXT,
    );
}
