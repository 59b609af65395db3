//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Elapsed time comes in as plain seconds
//! - Seeded RNG only
//! - Entity collections keep spawn order
//! - No rendering, storage or DOM dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod motion;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Circle, CollisionReport, circles_overlap, resolve_collisions};
pub use difficulty::Difficulty;
pub use state::{GameEvent, GamePhase, GameState, Player, Playfield, Rock, Star};
pub use tick::{TickInput, tick};
