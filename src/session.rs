//! Session driver
//!
//! Owns the frame clock, the game state and the collaborators. The platform
//! loop calls [`Session::frame`] once per animation frame and keeps scheduling
//! frames only while it returns `true`; "play again" calls [`Session::reset`].

use crate::highscores::HighScoreStore;
use crate::renderer::{Renderer, Scene};
use crate::settings::Settings;
use crate::sim::{FrameClock, GameEvent, GameState, Playfield, TickInput, tick};
use crate::ui::{GameOverSummary, Hud};

pub struct Session<S, R, H>
where
    S: HighScoreStore,
    R: Renderer,
    H: Hud,
{
    state: GameState,
    clock: FrameClock,
    store: S,
    renderer: R,
    hud: H,
}

impl<S, R, H> Session<S, R, H>
where
    S: HighScoreStore,
    R: Renderer,
    H: Hud,
{
    /// Start a running session; the best score is loaded from `store` once here
    pub fn new(
        seed: u64,
        playfield: Playfield,
        settings: &Settings,
        store: S,
        renderer: R,
        mut hud: H,
    ) -> Self {
        let mut state = GameState::new(seed, playfield);
        state.high_score = store.load_high_score();
        state.debug = settings.debug_overlay;

        hud.hide_game_over();
        hud.show_score(state.score, state.high_score);
        log::info!(
            "Session started (seed {}, best {})",
            seed,
            state.high_score
        );

        Self {
            state,
            clock: FrameClock::new(),
            store,
            renderer,
            hud,
        }
    }

    /// Run one frame: tick, handle events, draw, update the HUD.
    ///
    /// Returns whether another frame should be scheduled. Once the game is over
    /// this is a no-op returning `false` until [`Session::reset`].
    pub fn frame(&mut self, timestamp_ms: f64, input: &TickInput) -> bool {
        if self.state.is_game_over() {
            return false;
        }

        let dt = self.clock.elapsed(timestamp_ms);
        tick(&mut self.state, input, dt);

        self.renderer.draw(&Scene::from_state(&self.state));
        self.hud.show_score(self.state.score, self.state.high_score);

        for event in self.state.drain_events() {
            match event {
                GameEvent::StarCollected { score } => {
                    log::debug!("Star collected (score {})", score);
                }
                GameEvent::GameOver {
                    score,
                    high_score,
                    new_high_score,
                } => {
                    if new_high_score {
                        log::info!("New high score: {}", high_score);
                        self.store.save_high_score(high_score);
                    }
                    self.hud.show_game_over(&GameOverSummary {
                        final_score: score,
                        high_score,
                        new_high_score,
                    });
                }
            }
        }

        !self.state.is_game_over()
    }

    /// "Play again": fresh run, clock restarted so the next frame has zero elapsed time
    pub fn reset(&mut self) {
        self.state.reset();
        self.clock.restart();
        self.hud.hide_game_over();
        self.hud.show_score(self.state.score, self.state.high_score);
        log::info!("Session reset (best {})", self.state.high_score);
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_game_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn hud_mut(&mut self) -> &mut H {
        &mut self.hud
    }
}
