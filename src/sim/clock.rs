//! Frame clock
//!
//! Turns the host's monotonic frame timestamps (milliseconds) into per-tick
//! delta time (seconds). Paused wall-clock time is cut out of the stream.

/// Frame timestamp → dt converter with pause drift correction
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the last simulated frame (None until the first frame)
    last_ms: Option<f64>,
    /// When the current pause began
    pause_started_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a frame timestamp and return dt in seconds.
    ///
    /// The first frame after a (re)start only records the reference and
    /// returns 0. The result is always finite and non-negative.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return 0.0;
        };
        self.last_ms = Some(now_ms);

        let dt = ((now_ms - last) / 1000.0) as f32;
        if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
    }

    /// Start a pause at `now_ms`
    pub fn pause(&mut self, now_ms: f64) {
        if self.pause_started_ms.is_none() {
            self.pause_started_ms = Some(now_ms);
        }
    }

    /// End the pause, shifting the reference forward by the paused duration.
    /// Returns the paused duration in ms.
    pub fn resume(&mut self, now_ms: f64) -> f64 {
        let Some(started) = self.pause_started_ms.take() else {
            return 0.0;
        };
        let paused_for = now_ms - started;
        if !paused_for.is_finite() || paused_for <= 0.0 {
            return 0.0;
        }
        if let Some(last) = self.last_ms.as_mut() {
            *last += paused_for;
        }
        paused_for
    }

    pub fn is_paused(&self) -> bool {
        self.pause_started_ms.is_some()
    }

    /// Forget the reference; the next frame is treated as the first
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.pause_started_ms = None;
    }
}
