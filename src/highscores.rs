//! Best-score persistence
//!
//! Persisted to LocalStorage on the web as a plain decimal string. Missing or
//! unreadable data counts as "no score yet".

/// Storage backend for the best score
pub trait HighScoreStore {
    /// Load the stored best score (0 if absent or unreadable)
    fn load_high_score(&self) -> u64;

    /// Persist a new best score. Failures are logged, never surfaced.
    fn save_high_score(&mut self, score: u64);
}

/// Parse a stored value; anything malformed counts as no score
pub fn parse_high_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Every value passed to `save_high_score`, oldest first
    pub saves: Vec<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw stored value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            saves: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u64 {
        parse_high_score(self.value.as_deref())
    }

    fn save_high_score(&mut self, score: u64) {
        self.value = Some(score.to_string());
        self.saves.push(score);
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "nautaGotchiHighScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> u64 {
        let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let score = parse_high_score(raw.as_deref());
        log::info!("Loaded high score: {}", score);
        score
    }

    fn save_high_score(&mut self, score: u64) {
        match Self::storage() {
            Some(storage) => {
                if storage
                    .set_item(Self::STORAGE_KEY, &score.to_string())
                    .is_err()
                {
                    log::warn!("Failed to save high score {}", score);
                } else {
                    log::info!("High score saved ({})", score);
                }
            }
            None => log::warn!("LocalStorage unavailable, high score not saved"),
        }
    }
}
