//! Session driver tests with recording collaborators

use glam::Vec2;
use nauta_dodge::renderer::{Renderer, Scene};
use nauta_dodge::sim::{GamePhase, Playfield, Rock, Star, TickInput};
use nauta_dodge::ui::{GameOverSummary, Hud};
use nauta_dodge::{HighScoreStore, MemoryStore, Session, Settings};

#[derive(Default)]
struct RecordingRenderer {
    draws: usize,
    last_debug: bool,
    last_rocks: usize,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, scene: &Scene<'_>) {
        self.draws += 1;
        self.last_debug = scene.debug;
        self.last_rocks = scene.rocks.len();
    }
}

#[derive(Default)]
struct RecordingHud {
    scores: Vec<(u64, u64)>,
    summaries: Vec<GameOverSummary>,
    hides: usize,
}

impl Hud for RecordingHud {
    fn show_score(&mut self, score: u64, high_score: u64) {
        self.scores.push((score, high_score));
    }

    fn show_game_over(&mut self, summary: &GameOverSummary) {
        self.summaries.push(*summary);
    }

    fn hide_game_over(&mut self) {
        self.hides += 1;
    }
}

type TestSession = Session<MemoryStore, RecordingRenderer, RecordingHud>;

fn session_with_store(store: MemoryStore) -> TestSession {
    Session::new(
        42,
        Playfield::default(),
        &Settings::default(),
        store,
        RecordingRenderer::default(),
        RecordingHud::default(),
    )
}

/// Put a rock right on top of the player
fn drop_rock_on_player(session: &mut TestSession) {
    let state = session.state_mut();
    let center = state.player.center();
    let mut rock = Rock::new(0.0, 0.0);
    rock.pos = center - rock.size / 2.0 + Vec2::new(5.0, 0.0);
    state.rocks.push(rock);
}

#[test]
fn loads_high_score_at_startup() {
    let session = session_with_store(MemoryStore::with_raw("30"));
    assert_eq!(session.state().high_score, 30);
    assert_eq!(session.hud().scores.last(), Some(&(0, 30)));
    assert_eq!(session.hud().hides, 1);
}

#[test]
fn malformed_high_score_loads_as_zero() {
    let session = session_with_store(MemoryStore::with_raw("garbage"));
    assert_eq!(session.state().high_score, 0);
}

#[test]
fn new_high_score_is_saved_and_shown() {
    let mut session = session_with_store(MemoryStore::with_raw("30"));
    session.state_mut().score = 50;
    drop_rock_on_player(&mut session);

    let keep_going = session.frame(1000.0, &TickInput::default());

    assert!(!keep_going);
    assert_eq!(session.state().phase, GamePhase::GameOver);
    assert_eq!(session.state().high_score, 50);
    assert!(session.state().new_high_score);
    assert_eq!(session.store().saves, vec![50]);
    assert_eq!(session.store().load_high_score(), 50);
    assert_eq!(
        session.hud().summaries,
        vec![GameOverSummary {
            final_score: 50,
            high_score: 50,
            new_high_score: true,
        }]
    );
    // Final frame is still drawn
    assert_eq!(session.renderer().draws, 1);
    assert_eq!(session.renderer().last_rocks, 1);
}

#[test]
fn lower_score_does_not_touch_storage() {
    let mut session = session_with_store(MemoryStore::with_raw("30"));
    session.state_mut().score = 10;
    drop_rock_on_player(&mut session);

    session.frame(0.0, &TickInput::default());

    assert!(session.store().saves.is_empty());
    assert_eq!(session.state().high_score, 30);
    assert!(!session.hud().summaries[0].new_high_score);
}

#[test]
fn frames_after_game_over_are_ignored() {
    let mut session = session_with_store(MemoryStore::new());
    drop_rock_on_player(&mut session);
    session.frame(0.0, &TickInput::default());
    let draws = session.renderer().draws;
    let score = session.state().score;

    for i in 1..30 {
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        let running = session.frame(i as f64 * 16.0, &input);
        assert!(!running);
    }

    assert_eq!(session.renderer().draws, draws);
    assert_eq!(session.state().score, score);
    assert_eq!(session.hud().summaries.len(), 1);
}

#[test]
fn reset_starts_a_fresh_run() {
    let mut session = session_with_store(MemoryStore::with_raw("5"));
    session.frame(0.0, &TickInput::default());
    session.frame(3000.0, &TickInput::default());
    {
        let state = session.state_mut();
        state.rocks.clear();
        state.stars.push(Star::new(100.0));
    }
    drop_rock_on_player(&mut session);
    session.frame(3016.0, &TickInput::default());
    assert!(!session.is_running());

    session.reset();

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.survival_time, 0.0);
    assert!(state.rocks.is_empty());
    assert!(state.stars.is_empty());
    assert!(!state.new_high_score);
    assert_eq!(state.player.pos.x, 380.0);
    assert_eq!(session.hud().hides, 2);

    // Clock restarted: a big timestamp gap produces no elapsed time
    assert!(session.frame(999_999.0, &TickInput::default()));
    assert_eq!(session.state().survival_time, 0.0);
}

#[test]
fn survival_points_accrue_from_timestamps() {
    let mut session = session_with_store(MemoryStore::new());
    // 12 frames of 250ms after the zero-length first frame
    for i in 0..=12 {
        session.frame(i as f64 * 250.0, &TickInput::default());
        session.state_mut().rocks.clear();
    }
    assert!(session.is_running());
    assert_eq!(session.state().score, 3);
    assert_eq!(session.state().survival_time, 3.0);
    assert_eq!(
        session.hud().scores.iter().map(|s| s.0).max(),
        Some(3)
    );
}

#[test]
fn debug_overlay_reaches_renderer() {
    let settings = Settings {
        debug_overlay: true,
        ..Default::default()
    };
    let mut session = Session::new(
        1,
        Playfield::default(),
        &settings,
        MemoryStore::new(),
        RecordingRenderer::default(),
        RecordingHud::default(),
    );
    session.frame(0.0, &TickInput::default());
    assert!(session.renderer().last_debug);

    session.frame(
        16.0,
        &TickInput {
            toggle_debug: true,
            ..Default::default()
        },
    );
    assert!(!session.renderer().last_debug);
}
