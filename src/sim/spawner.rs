//! Rock and star spawning
//!
//! Rocks arrive on a fixed interval set by the difficulty. Stars wait out a
//! minimum gap, then roll a small chance every tick.

use rand::Rng;

use super::difficulty::Difficulty;
use super::state::{GameState, Rock, Star, Timers};
use crate::consts::*;

/// Advance spawn timers and append any new entities
pub fn update_spawns(state: &mut GameState, dt: f32) {
    let GameState {
        rng,
        playfield,
        difficulty,
        timers,
        rocks,
        stars,
        ..
    } = state;

    if let Some(rock) = maybe_spawn_rock(rng, timers, difficulty, playfield.width, dt) {
        log::debug!("Spawned rock at x={:.1}", rock.pos.x);
        rocks.push(rock);
    }
    if let Some(star) = maybe_spawn_star(rng, timers, playfield.width, dt) {
        log::debug!("Spawned star at x={:.1}", star.pos.x);
        stars.push(star);
    }
}

/// Accumulate `dt` into the rock timer; emit a rock once it passes the spawn interval
pub fn maybe_spawn_rock<R: Rng>(
    rng: &mut R,
    timers: &mut Timers,
    difficulty: &Difficulty,
    width: f32,
    dt: f32,
) -> Option<Rock> {
    timers.rock_spawn += dt;
    if timers.rock_spawn <= difficulty.spawn_interval() {
        return None;
    }
    timers.rock_spawn = 0.0;

    let x = random_x(rng, width - ROCK_WIDTH);
    let spin = rng.random_range(-ROCK_MAX_SPIN..ROCK_MAX_SPIN);
    Some(Rock::new(x, spin))
}

/// Accumulate `dt` into the star timer; past the minimum gap, roll for a star
pub fn maybe_spawn_star<R: Rng>(
    rng: &mut R,
    timers: &mut Timers,
    width: f32,
    dt: f32,
) -> Option<Star> {
    timers.star_spawn += dt;
    if timers.star_spawn <= STAR_MIN_INTERVAL || !rng.random_bool(STAR_SPAWN_CHANCE) {
        return None;
    }
    timers.star_spawn = 0.0;

    Some(Star::new(random_x(rng, width - STAR_WIDTH)))
}

/// Uniform x in [0, max); a playfield narrower than the sprite pins it to 0
fn random_x<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
