//! Game state and core simulation types
//!
//! Everything a running session mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::difficulty::Difficulty;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// A rock hit the player; frozen until reset
    GameOver,
}

/// Events raised by the simulation for the session driver to act on
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A star was picked up
    StarCollected { score: u64 },
    /// The run ended
    GameOver {
        score: u64,
        high_score: u64,
        new_high_score: bool,
    },
}

/// Play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// The player's astronaut (top-left anchored box)
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Horizontal velocity from the last tick, pixels/s
    pub vel_x: f32,
}

impl Player {
    /// Player centred horizontally, resting just above the bottom edge
    pub fn new(playfield: &Playfield) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            vel_x: 0.0,
        };
        player.recenter(playfield);
        player
    }

    pub fn recenter(&mut self, playfield: &Playfield) {
        self.pos = Vec2::new(
            playfield.width / 2.0 - self.size.x / 2.0,
            playfield.height - self.size.y - PLAYER_BOTTOM_MARGIN,
        );
        self.vel_x = 0.0;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn hitbox(&self) -> Circle {
        Circle::new(self.center(), PLAYER_RADIUS)
    }
}

/// A falling, spinning rock
#[derive(Debug, Clone, PartialEq)]
pub struct Rock {
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed before the difficulty multiplier
    pub base_speed: f32,
    /// Radians, never normalized
    pub rotation: f32,
    /// Radians per second
    pub rotation_speed: f32,
}

impl Rock {
    /// A rock entering just above the top edge at `x`
    pub fn new(x: f32, rotation_speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, -ROCK_HEIGHT),
            size: Vec2::new(ROCK_WIDTH, ROCK_HEIGHT),
            base_speed: ROCK_BASE_SPEED,
            rotation: 0.0,
            rotation_speed,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn hitbox(&self) -> Circle {
        Circle::new(self.center(), ROCK_RADIUS)
    }
}

/// A falling bonus star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Star {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, -STAR_HEIGHT),
            size: Vec2::new(STAR_WIDTH, STAR_HEIGHT),
            speed: STAR_SPEED,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn hitbox(&self) -> Circle {
        Circle::new(self.center(), STAR_RADIUS)
    }
}

/// Time accumulators driving spawns and survival points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timers {
    pub rock_spawn: f32,
    pub star_spawn: f32,
    pub score: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score ever recorded (loaded from storage by the session driver)
    pub high_score: u64,
    /// Set when the last run beat the previous best
    pub new_high_score: bool,
    /// Seconds survived this run
    pub survival_time: f32,
    pub difficulty: Difficulty,
    pub timers: Timers,
    /// Hitbox overlay toggle
    pub debug: bool,
    pub player: Player,
    /// Active rocks, in spawn order
    pub rocks: Vec<Rock>,
    /// Active stars, in spawn order
    pub stars: Vec<Star>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new running session
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            phase: GamePhase::Running,
            score: 0,
            high_score: 0,
            new_high_score: false,
            survival_time: 0.0,
            difficulty: Difficulty::default(),
            timers: Timers::default(),
            debug: false,
            player: Player::new(&playfield),
            rocks: Vec::new(),
            stars: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Transition to `GameOver`, recording a new best score if beaten.
    ///
    /// Idempotent: only the first call per run has any effect.
    pub fn end_game(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.new_high_score = self.score > self.high_score;
        if self.new_high_score {
            self.high_score = self.score;
        }
        log::info!(
            "Game over: score {} (best {}) after {:.1}s",
            self.score,
            self.high_score,
            self.survival_time
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
        });
    }

    /// Start a fresh run. High score, debug flag and RNG stream carry over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.new_high_score = false;
        self.survival_time = 0.0;
        self.difficulty = Difficulty::default();
        self.timers = Timers::default();
        self.player.recenter(&self.playfield);
        self.rocks.clear();
        self.stars.clear();
        self.events.clear();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
