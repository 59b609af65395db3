//! Game settings and preferences
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with the hitbox overlay on
    pub debug_overlay: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Only the arrow keys steer (disables the A/D aliases)
    pub arrow_keys_only: bool,
}

/// Steering direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "nauta_dodge_settings";

    /// Parse settings JSON, falling back to defaults when malformed
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings: {}", e);
            Self::default()
        })
    }

    /// Map a `KeyboardEvent.key` value to a steering direction
    pub fn steer_for_key(&self, key: &str) -> Option<Steer> {
        match key {
            "ArrowLeft" => Some(Steer::Left),
            "ArrowRight" => Some(Steer::Right),
            "a" if !self.arrow_keys_only => Some(Steer::Left),
            "d" if !self.arrow_keys_only => Some(Steer::Right),
            _ => None,
        }
    }

    /// True for the hitbox overlay toggle key
    pub fn is_debug_key(key: &str) -> bool {
        matches!(key, "h" | "H")
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native: read `NAUTA_SETTINGS` (JSON) if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("NAUTA_SETTINGS") {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
