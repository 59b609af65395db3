//! Simulation tick
//!
//! One call per animation frame. Order: difficulty, spawns, motion, collisions,
//! then survival points.

use super::collision::resolve_collisions;
use super::difficulty::Difficulty;
use super::motion::{advance_rocks, advance_stars, move_player};
use super::spawner::update_spawns;
use super::state::GameState;
use crate::consts::SECONDS_PER_POINT;

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// "Move left" held
    pub move_left: bool,
    /// "Move right" held
    pub move_right: bool,
    /// Hitbox overlay toggle (edge-triggered)
    pub toggle_debug: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Frozen until reset; input is ignored too
    if state.is_game_over() {
        return;
    }

    if input.toggle_debug {
        state.debug = !state.debug;
        log::info!("Hitbox overlay: {}", state.debug);
    }

    state.survival_time += dt;
    state.difficulty = Difficulty::for_survival_time(state.survival_time);

    update_spawns(state, dt);

    move_player(
        &mut state.player,
        &state.playfield,
        input.move_left,
        input.move_right,
        dt,
    );
    advance_rocks(state, dt);
    advance_stars(state, dt);

    let report = resolve_collisions(state);
    if report.hit_rock {
        state.end_game();
        return;
    }

    // One point per full second survived, catching up on long frames
    state.timers.score += dt;
    while state.timers.score >= SECONDS_PER_POINT {
        state.score += 1;
        state.timers.score -= SECONDS_PER_POINT;
    }
}
