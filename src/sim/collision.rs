//! Collision detection between the player and falling entities
//!
//! Every entity uses a circular hitbox centred on its sprite box. Circles are
//! smaller than the sprites, so near misses read as misses.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::STAR_BONUS;

/// A circular hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// True if the two circles overlap. Touching (distance == radius sum) is not a hit.
#[inline]
pub fn circles_overlap(a: Circle, b: Circle) -> bool {
    let radii = a.radius + b.radius;
    a.center.distance_squared(b.center) < radii * radii
}

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub stars_collected: u32,
    pub hit_rock: bool,
}

/// Check the player against every star and rock.
///
/// Overlapping stars are removed and scored. A rock hit is only reported; the
/// caller ends the game. Rocks stay in place so the final frame can be drawn.
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let player = state.player.hitbox();
    let mut report = CollisionReport::default();

    let before = state.stars.len();
    state
        .stars
        .retain(|star| !circles_overlap(player, star.hitbox()));
    report.stars_collected = (before - state.stars.len()) as u32;

    for _ in 0..report.stars_collected {
        state.score += STAR_BONUS;
        state
            .events
            .push(GameEvent::StarCollected { score: state.score });
    }

    report.hit_rock = state
        .rocks
        .iter()
        .any(|rock| circles_overlap(player, rock.hitbox()));

    report
}
