//! Rendering seam
//!
//! The simulation hands a read-only [`Scene`] to a [`Renderer`] once per frame,
//! after the tick. The browser build draws it on a 2D canvas.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{Circle, GameState, Player, Playfield, Rock, Star};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub playfield: &'a Playfield,
    pub player: &'a Player,
    pub rocks: &'a [Rock],
    pub stars: &'a [Star],
    /// Draw hitbox circles on top of the sprites
    pub debug: bool,
}

impl<'a> Scene<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            playfield: &state.playfield,
            player: &state.player,
            rocks: &state.rocks,
            stars: &state.stars,
            debug: state.debug,
        }
    }

    /// Hitbox circles for the overlay: (circle, is_pickup)
    pub fn hitboxes(&self) -> impl Iterator<Item = (Circle, bool)> + '_ {
        std::iter::once((self.player.hitbox(), false))
            .chain(self.rocks.iter().map(|r| (r.hitbox(), false)))
            .chain(self.stars.iter().map(|s| (s.hitbox(), true)))
    }
}

/// Something that can draw a scene
pub trait Renderer {
    fn draw(&mut self, scene: &Scene<'_>);
}
