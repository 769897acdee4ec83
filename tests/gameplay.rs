use glam::Vec2;

use shooter::Tuning;
use shooter::renderer::{RecordingCanvas, render};
use shooter::sim::{GamePhase, GameState, Lcg, RandomSource, TickInput, tick};

fn started<R: RandomSource>(mut state: GameState<R>) -> GameState<R> {
    state.resize(800, 600);
    tick(&mut state, &mut TickInput::play());
    assert_eq!(state.phase, GamePhase::Running);
    state
}

#[test]
fn holding_a_key_moves_at_player_speed() {
    let mut state = started(GameState::new(7));
    let start = state.player.position;
    let frames = 20;

    for _ in 0..frames {
        tick(&mut state, &mut TickInput::holding(&['d']));
    }

    let expected = start + Vec2::new(frames as f32 * state.tuning.player_speed, 0.0);
    assert!((state.player.position - expected).length() < 1e-3);
    assert_eq!(state.player.life, state.tuning.player_life);
}

#[test]
fn single_shot_has_bullet_speed() {
    let mut state = started(GameState::new(7));
    assert!(state.bullets.is_empty());

    tick(&mut state, &mut TickInput::firing_at(650, 120));

    assert_eq!(state.bullets.live(), 1);
    let (_, bullet) = state.bullets.iter_alive().next().unwrap();
    assert!((bullet.velocity.length() - state.tuning.bullet_speed).abs() < 1e-4);
    // Headed toward the pointer: right and up from the center
    assert!(bullet.velocity.x > 0.0 && bullet.velocity.y < 0.0);
}

#[test]
fn colocated_enemy_and_bullet_score_once() {
    let mut state = started(GameState::new(7));
    state.enemies.clear();
    state.spawn.left = u32::MAX;

    let player = state.player.position;
    let enemy = state.enemies.allocate(player, Vec2::ZERO).unwrap();
    let bullet = state.bullets.allocate(player, Vec2::ZERO).unwrap();

    tick(&mut state, &mut TickInput::default());

    assert_eq!(state.score, 1);
    assert!(!state.enemies[enemy].is_alive());
    assert!(!state.bullets[bullet].is_alive());
    assert_eq!(state.enemies.freed(), 1);
    assert_eq!(state.bullets.freed(), 1);
    // The bullet took the hit, not the player
    assert_eq!(state.player.life, state.tuning.player_life);
}

#[test]
fn dying_then_play_resets_everything() {
    let mut state = started(GameState::new(7));
    state.spawn.left = u32::MAX;
    state.heal.left = u32::MAX;
    state.score = 4;
    state.player.life = 1;
    state.bullets.allocate(Vec2::new(0.0, -900.0), Vec2::ZERO);
    state
        .enemies
        .allocate(state.player.position + Vec2::new(5.0, 0.0), Vec2::ZERO);

    tick(&mut state, &mut TickInput::default());
    assert_eq!(state.phase, GamePhase::GameOver);

    let mut canvas = RecordingCanvas::default();
    render(&state, &mut canvas);
    assert_eq!(canvas.banner(), Some("Game Over (Space to restart)"));

    tick(&mut state, &mut TickInput::play());
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.player.life, state.tuning.player_life);
    assert_eq!(state.player.position, Vec2::ZERO);
    assert!(state.bullets.is_empty());
    // The restart frame itself already spawned the first enemy of the new run
    assert_eq!(state.enemies.live(), 1);
    assert_eq!(state.score, 0);
}

#[test]
fn pool_exhaustion_drops_shots() {
    let tuning = Tuning {
        pool_capacity: 2,
        shoot_delay: 0,
        ..Default::default()
    };
    let mut state = started(GameState::with_rng(tuning, Lcg::new(0)));
    state.spawn.left = u32::MAX;

    for _ in 0..5 {
        tick(&mut state, &mut TickInput::firing_at(0, 300));
    }
    assert_eq!(state.bullets.len(), 2);
    assert_eq!(state.bullets.live(), 2);
}

#[test]
fn classic_generator_replays_identically() {
    let run = || {
        let mut state = started(GameState::with_rng(Tuning::default(), Lcg::new(0)));
        for _ in 0..400 {
            tick(&mut state, &mut TickInput::firing_at(400, 0));
        }
        state
    };
    let a = run();
    let b = run();

    assert_eq!(a.score, b.score);
    assert_eq!(a.enemies.len(), b.enemies.len());
    for (x, y) in a.enemies.iter().zip(b.enemies.iter()) {
        assert_eq!(x, y);
    }
}

#[test]
fn frame_loop_renders_then_updates() {
    let mut state = GameState::new(11);
    state.resize(1024, 768);
    let mut canvas = RecordingCanvas::default();

    render(&state, &mut canvas);
    assert_eq!(canvas.banner(), Some("Shooter (Space to play)"));
    tick(&mut state, &mut TickInput::play());

    for _ in 0..60 {
        canvas.clear();
        render(&state, &mut canvas);
        tick(&mut state, &mut TickInput::default());
    }
    assert_eq!(canvas.banner(), None);
    // Player plus at least the first enemy
    assert!(canvas.circle_count() >= 2);
}
