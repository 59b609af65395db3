//! Frame clock
//!
//! Turns animation-frame timestamps (milliseconds) into per-tick elapsed seconds.

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed seconds since the previous call.
    ///
    /// The first call after construction or [`FrameClock::restart`] returns 0 so a
    /// (re)start never produces a motion spike. A timestamp earlier than the last
    /// one also yields 0.
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_timestamp {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp (next tick gets zero elapsed time)
    pub fn restart(&mut self) {
        self.last_timestamp = None;
    }
}
