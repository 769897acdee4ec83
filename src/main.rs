//! Shooter entry point
//!
//! On wasm32 this hosts the game on an HTML canvas. Natively it runs the
//! simulation headless with the autopilot and reports how the runs went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use shooter::palette;
    use shooter::renderer;
    use shooter::sim::{GameState, autopilot_input, tick};
    use shooter::{Canvas, Color, EventInput, Input};

    const FONT_FAMILY: &str = "Iosevka, monospace";
    const BANNER_SIZE: u32 = 48;
    const IDLE_KEY: char = 'i';

    /// Single-character keys only, lowercased so Shift doesn't matter
    fn key_char(event: &KeyboardEvent) -> Option<char> {
        let key = event.key();
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().next(),
            _ => None,
        }
    }

    /// Canvas 2D context behind the platform draw surface
    struct WebCanvas {
        ctx: CanvasRenderingContext2d,
    }

    impl Canvas for WebCanvas {
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        }

        fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU);
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }

        fn text(&mut self, x: i32, y: i32, size: u32, text: &str, color: Color) {
            self.ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
            self.ctx.set_fill_style_str(&color.to_css());
            // (x, y) is the top-left corner; fillText wants the baseline
            let offset = self
                .ctx
                .measure_text(text)
                .map(|m| m.actual_bounding_box_ascent() + m.actual_bounding_box_descent())
                .unwrap_or(size as f64);
            let _ = self.ctx.fill_text(text, x as f64, y as f64 + offset);
        }

        fn centered_text(&mut self, width: i32, height: i32, text: &str) {
            self.ctx.set_font(&format!("{}px {}", BANNER_SIZE, FONT_FAMILY));
            let text_width = self
                .ctx
                .measure_text(text)
                .map(|m| m.width())
                .unwrap_or(0.0);
            let x = (width as f64 - text_width) / 2.0;
            let y = (height as f64 - BANNER_SIZE as f64) / 2.0;
            self.text(x as i32, y as i32, BANNER_SIZE, text, palette::TEXT);
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        canvas: WebCanvas,
        input: EventInput,
        /// Autopilot plays instead of the keyboard/mouse
        idle_mode: bool,
    }

    impl Game {
        fn frame(&mut self) {
            renderer::render(&self.state, &mut self.canvas);

            if self.input.key_pressed(IDLE_KEY) {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }

            if self.idle_mode {
                let mut input = autopilot_input(&self.state);
                tick(&mut self.state, &mut input);
                // Presses made while the autopilot plays must not leak into manual play
                self.input.discard_edges();
            } else {
                tick(&mut self.state, &mut self.input);
            }
        }

        fn fit_to_window(&mut self, canvas: &HtmlCanvasElement) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0) as u32;
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0) as u32;
            canvas.set_width(w);
            canvas.set_height(h);
            self.state.resize(w, h);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("app")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            canvas: WebCanvas { ctx },
            input: EventInput::default(),
            idle_mode: false,
        }));
        game.borrow_mut().fit_to_window(&canvas);

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_resize_handler(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Shooter running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: held set, plus a one-shot press (ignoring auto-repeat)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_char(&event) {
                    game.borrow_mut().input.on_key_down(key, event.repeat());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_char(&event) {
                    game.borrow_mut().input.on_key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer events cover mouse and touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .input
                    .on_pointer_down(event.offset_x(), event.offset_y());
            });
            let _ = window
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.on_pointer_up();
            });
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .input
                    .on_pointer_move(event.offset_x(), event.offset_y());
            });
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_to_window(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use shooter::Tuning;
    use shooter::renderer::{self, RecordingCanvas};
    use shooter::sim::{GamePhase, GameState, Lcg, RandomSource, autopilot_input, tick};

    /// Run the shooter headless with the autopilot at the controls
    #[derive(Parser, Debug)]
    #[command(name = "shooter", version)]
    pub struct Args {
        /// Frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub frames: u64,
        /// Seed for the PCG spawn generator
        #[arg(long, default_value_t = 0)]
        pub seed: u64,
        /// Use the classic LCG spawn generator (seed 0) instead of PCG
        #[arg(long)]
        pub classic: bool,
        /// JSON file overriding gameplay tuning
        #[arg(long)]
        pub tuning: Option<PathBuf>,
        /// Print the effective tuning as JSON and exit
        #[arg(long)]
        pub dump_tuning: bool,
        #[arg(long, default_value_t = 800)]
        pub width: u32,
        #[arg(long, default_value_t = 600)]
        pub height: u32,
    }

    /// What happened over a headless session
    #[derive(Debug, Default)]
    pub struct Summary {
        pub frames: u64,
        pub game_overs: u32,
        pub best_score: u64,
        pub final_score: u64,
        pub draw_calls: usize,
    }

    fn load_tuning(args: &Args) -> Result<Tuning> {
        let Some(path) = &args.tuning else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        Tuning::from_json(&json).with_context(|| format!("loading tuning from {}", path.display()))
    }

    pub fn run(args: &Args) -> Result<Option<Summary>> {
        let tuning = load_tuning(args)?;
        if args.dump_tuning {
            println!("{}", tuning.to_json()?);
            return Ok(None);
        }

        let rng: Box<dyn RandomSource> = if args.classic {
            Box::new(Lcg::new(0))
        } else {
            Box::new(Pcg32::seed_from_u64(args.seed))
        };
        let mut state = GameState::with_rng(tuning, rng);
        state.resize(args.width, args.height);

        let mut canvas = RecordingCanvas::default();
        let mut summary = Summary::default();

        for frame in 0..args.frames {
            canvas.clear();
            renderer::render(&state, &mut canvas);

            let was_over = state.phase == GamePhase::GameOver;
            let mut input = autopilot_input(&state);
            tick(&mut state, &mut input);

            if !was_over && state.phase == GamePhase::GameOver {
                summary.game_overs += 1;
                log::info!(
                    "Run {} ended at frame {} with score {}",
                    summary.game_overs,
                    frame,
                    state.score
                );
            }
            summary.best_score = summary.best_score.max(state.score);
        }

        summary.frames = args.frames;
        summary.final_score = state.score;
        summary.draw_calls = canvas.commands.len();
        Ok(Some(summary))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Shooter (native) starting headless...");

    let args = headless::Args::parse();
    if let Some(summary) = headless::run(&args)? {
        println!(
            "{} frames, {} game over(s), best score {}, final score {}, {} draw calls in the last frame",
            summary.frames,
            summary.game_overs,
            summary.best_score,
            summary.final_score,
            summary.draw_calls
        );
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
