//! HUD and game-over dialog seam

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomHud;

/// Shown in the game-over dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u64,
    pub high_score: u64,
    pub new_high_score: bool,
}

/// Score display and dialog controls
pub trait Hud {
    /// Current score and best score (called every frame while running)
    fn show_score(&mut self, score: u64, high_score: u64);

    /// Run ended: show the summary dialog
    fn show_game_over(&mut self, summary: &GameOverSummary);

    /// New run started: hide the dialog and any "new high score" banner
    fn hide_game_over(&mut self);

    /// Frames per second readout
    fn show_fps(&mut self, _fps: u32) {}
}

/// Logs HUD changes instead of drawing them (native builds)
#[derive(Debug, Default)]
pub struct LogHud {
    last_score: Option<u64>,
}

impl Hud for LogHud {
    fn show_score(&mut self, score: u64, high_score: u64) {
        if self.last_score != Some(score) {
            log::debug!("Score {} (best {})", score, high_score);
            self.last_score = Some(score);
        }
    }

    fn show_game_over(&mut self, summary: &GameOverSummary) {
        if summary.new_high_score {
            log::info!("New high score: {}", summary.final_score);
        }
        log::info!(
            "Final score {} / best {}",
            summary.final_score,
            summary.high_score
        );
    }

    fn hide_game_over(&mut self) {
        self.last_score = None;
    }
}
