//! DOM-backed HUD (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{GameOverSummary, Hud};

/// Writes score text and toggles the game-over modal
pub struct DomHud {
    document: Document,
    last_score: Option<(u64, u64)>,
}

impl DomHud {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            last_score: None,
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::warn!("Missing #{}", id),
        }
    }

    fn set_display(&self, id: &str, display: &str) {
        let el = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        match el {
            Some(el) => {
                let _ = el.style().set_property("display", display);
            }
            None => log::warn!("Missing #{}", id),
        }
    }
}

impl Hud for DomHud {
    fn show_score(&mut self, score: u64, high_score: u64) {
        // Only touch the DOM when something changed
        if self.last_score == Some((score, high_score)) {
            return;
        }
        self.set_text("score", &score.to_string());
        self.set_text("high-score", &high_score.to_string());
        self.last_score = Some((score, high_score));
    }

    fn show_game_over(&mut self, summary: &GameOverSummary) {
        self.set_text("high-score", &summary.high_score.to_string());
        self.set_text("final-score", &summary.final_score.to_string());
        self.set_text("highest-score", &summary.high_score.to_string());
        self.set_display(
            "new-high-score-text",
            if summary.new_high_score { "block" } else { "none" },
        );
        self.set_display("game-over-modal", "flex");
    }

    fn hide_game_over(&mut self) {
        self.set_display("game-over-modal", "none");
        self.set_display("new-high-score-text", "none");
        self.last_score = None;
    }

    fn show_fps(&mut self, fps: u32) {
        self.set_text("fps", &fps.to_string());
    }
}
