//! Simple dodging autopilot for headless/demo runs
//!
//! Looks at rocks that are about to reach the player's row and steps away from
//! the nearest one. With nothing threatening, drifts toward the lowest star.

use crate::sim::{GameState, TickInput};

/// How far above the player a rock counts as incoming (pixels)
const LOOKAHEAD: f32 = 160.0;
/// Horizontal clearance to keep from an incoming rock (pixels)
const CLEARANCE: f32 = 40.0;
/// Dead zone when chasing a star, avoids jitter
const CHASE_DEAD_ZONE: f32 = 4.0;

/// Pick held-direction flags for the current state
pub fn steer(state: &GameState) -> TickInput {
    let player = state.player.center();

    let threat = state
        .rocks
        .iter()
        .map(|rock| rock.center())
        .filter(|c| c.y < player.y + CLEARANCE && player.y - c.y < LOOKAHEAD)
        .filter(|c| (c.x - player.x).abs() < CLEARANCE)
        .min_by(|a, b| {
            (a.x - player.x)
                .abs()
                .partial_cmp(&(b.x - player.x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(rock) = threat {
        // Step away; against a wall, go the other way
        let max_x = state.playfield.width - state.player.size.x;
        let mut go_right = rock.x <= player.x;
        if go_right && state.player.pos.x >= max_x {
            go_right = false;
        } else if !go_right && state.player.pos.x <= 0.0 {
            go_right = true;
        }
        return TickInput {
            move_left: !go_right,
            move_right: go_right,
            toggle_debug: false,
        };
    }

    let target = state
        .stars
        .iter()
        .map(|star| star.center())
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    match target {
        Some(star) if star.x > player.x + CHASE_DEAD_ZONE => TickInput {
            move_right: true,
            ..Default::default()
        },
        Some(star) if star.x < player.x - CHASE_DEAD_ZONE => TickInput {
            move_left: true,
            ..Default::default()
        },
        _ => TickInput::default(),
    }
}
