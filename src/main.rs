//! Nauta Dodge entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use nauta_dodge::Session;
    use nauta_dodge::highscores::LocalStorageStore;
    use nauta_dodge::renderer::CanvasRenderer;
    use nauta_dodge::settings::{Settings, Steer};
    use nauta_dodge::sim::{Playfield, TickInput};
    use nauta_dodge::ui::{DomHud, Hud};

    type WebSession = Session<LocalStorageStore, CanvasRenderer, DomHud>;

    /// Game instance holding the session and input state
    struct Game {
        session: WebSession,
        settings: Settings,
        held_left: bool,
        held_right: bool,
        /// Debug toggle pressed since the last frame
        toggle_debug: bool,
        /// A frame callback is scheduled
        loop_active: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
    }

    impl Game {
        /// Sample input for this frame, consuming one-shot events
        fn take_input(&mut self) -> TickInput {
            let input = TickInput {
                move_left: self.held_left,
                move_right: self.held_right,
                toggle_debug: self.toggle_debug,
            };
            self.toggle_debug = false;
            input
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            if !self.settings.show_fps {
                return;
            }
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    let fps = (60000.0 / elapsed).round() as u32;
                    self.session.hud_mut().show_fps(fps);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Nauta Dodge starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #game-canvas not found");
            return;
        };
        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Failed to create 2D canvas renderer");
            return;
        };

        let playfield = Playfield {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        };
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(
            seed,
            playfield,
            &settings,
            LocalStorageStore,
            renderer,
            DomHud::new(document.clone()),
        );

        let game = Rc::new(RefCell::new(Game {
            session,
            settings,
            held_left: false,
            held_right: false,
            toggle_debug: false,
            loop_active: false,
            frame_times: [0.0; 60],
            frame_index: 0,
        }));

        setup_input_handlers(&document, game.clone());
        setup_play_again_button(&document, game.clone());
        start_loop(game);

        log::info!("Nauta Dodge running!");
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if !g.session.is_running() {
                    return;
                }
                let key = event.key();
                let steer = g.settings.steer_for_key(&key);
                match steer {
                    Some(Steer::Left) => g.held_left = true,
                    Some(Steer::Right) => g.held_right = true,
                    None if Settings::is_debug_key(&key) && !event.repeat() => {
                        g.toggle_debug = true;
                        g.settings.debug_overlay = !g.settings.debug_overlay;
                        g.settings.save();
                    }
                    None => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up (always tracked so keys never stick across a reset)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let steer = g.settings.steer_for_key(&event.key());
                match steer {
                    Some(Steer::Left) => g.held_left = false,
                    Some(Steer::Right) => g.held_right = false,
                    None => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_again_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("play-again-btn") else {
            log::warn!("Missing #play-again-btn");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().session.reset();
            start_loop(game.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Schedule frames unless a loop is already running
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let input = g.take_input();
            let running = g.session.frame(time, &input);
            g.track_fps(time);
            if !running {
                // Stop scheduling until "play again"
                g.loop_active = false;
            }
            running
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nauta_dodge::renderer::{Renderer, Scene};
    use nauta_dodge::sim::Playfield;
    use nauta_dodge::ui::LogHud;
    use nauta_dodge::{MemoryStore, Session, Settings, autopilot};

    /// Counts frames instead of drawing them
    #[derive(Default)]
    struct HeadlessRenderer {
        frames: u64,
        peak_rocks: usize,
    }

    impl Renderer for HeadlessRenderer {
        fn draw(&mut self, scene: &Scene<'_>) {
            self.frames += 1;
            self.peak_rocks = self.peak_rocks.max(scene.rocks.len());
        }
    }

    env_logger::init();
    log::info!("Nauta Dodge (native) starting...");
    log::info!("Native mode runs a headless autopilot session - build for wasm32 to play");

    let seed = std::env::var("NAUTA_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);
    let seconds = std::env::var("NAUTA_SECONDS")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(120.0);

    let settings = Settings::load();
    let mut session = Session::new(
        seed,
        Playfield::default(),
        &settings,
        MemoryStore::new(),
        HeadlessRenderer::default(),
        LogHud::default(),
    );

    // Explicit 60 Hz scheduler
    let frame_ms = 1000.0 / 60.0;
    let max_frames = (seconds * 60.0) as u64;
    for frame in 0..max_frames {
        let input = autopilot::steer(session.state());
        if !session.frame(frame as f64 * frame_ms, &input) {
            break;
        }
    }

    let state = session.state();
    println!(
        "\nSeed {}: score {} after {:.1}s ({} frames, peak {} rocks on screen){}",
        seed,
        state.score,
        state.survival_time,
        session.renderer().frames,
        session.renderer().peak_rocks,
        if state.is_game_over() { "" } else { " - still alive" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
