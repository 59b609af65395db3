//! Nauta Dodge - a single-screen arcade survival game
//!
//! Core modules:
//! - `sim`: Simulation (clock, difficulty, spawning, motion, collisions, game state)
//! - `session`: Frame scheduler tying the simulation to its collaborators
//! - `renderer`: Scene snapshot and the drawing seam
//! - `ui`: HUD / game-over dialog seam
//! - `highscores`: Best-score persistence
//! - `settings`: Player preferences
//! - `autopilot`: Simple dodging AI for demo/headless runs

pub mod autopilot;
pub mod highscores;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::{HighScoreStore, MemoryStore};
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (canvas size)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player (astronaut) defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Horizontal speed, pixels/s
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Gap between the player and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;

    /// Rock defaults
    pub const ROCK_WIDTH: f32 = 30.0;
    pub const ROCK_HEIGHT: f32 = 30.0;
    /// Fall speed before the difficulty multiplier, pixels/s
    pub const ROCK_BASE_SPEED: f32 = 150.0;
    /// Max spin magnitude, radians/s
    pub const ROCK_MAX_SPIN: f32 = 2.0;

    /// Star defaults
    pub const STAR_WIDTH: f32 = 20.0;
    pub const STAR_HEIGHT: f32 = 20.0;
    pub const STAR_SPEED: f32 = 180.0;
    /// Points awarded per collected star
    pub const STAR_BONUS: u64 = 2;
    /// Minimum seconds between stars before the per-tick roll starts
    pub const STAR_MIN_INTERVAL: f32 = 5.0;
    /// Per-tick spawn chance once the minimum interval has passed
    pub const STAR_SPAWN_CHANCE: f64 = 0.02;

    /// Hitbox radii - tighter than the sprites for a forgiving feel
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const ROCK_RADIUS: f32 = 10.0;
    pub const STAR_RADIUS: f32 = 8.0;

    /// Survival seconds per point
    pub const SECONDS_PER_POINT: f32 = 1.0;
}
