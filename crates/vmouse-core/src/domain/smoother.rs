//! Exponential cursor smoothing.
//!
//! # How the smoother works (for beginners)
//!
//! Each frame the smoother closes a fixed fraction `1 / smoothing_factor` of
//! the gap between where the cursor is and where the fingertip says it should
//! be:
//!
//! ```text
//! new = prev + (target - prev) / smoothing_factor
//! ```
//!
//! This is a single-pole low-pass filter.  Small frame-to-frame jitter in the
//! target is averaged away, while a sustained move is followed with a lag of
//! roughly `smoothing_factor` frames.  `smoothing_factor = 1` disables
//! smoothing entirely (the cursor jumps straight to the target).
//!
//! The state is kept as `f64` so that sub-pixel progress accumulates instead
//! of being thrown away by repeated rounding; only the returned value is
//! truncated to whole pixels.

/// Stateful single-pole low-pass filter for cursor positions.
#[derive(Debug, Clone)]
pub struct MotionSmoother {
    smoothing_factor: f64,
    prev_x: f64,
    prev_y: f64,
}

impl MotionSmoother {
    /// Creates a smoother at `(0, 0)`.
    ///
    /// `smoothing_factor` must be at least `1.0`; [`GestureConfig::validate`]
    /// enforces this for the configured value.
    ///
    /// [`GestureConfig::validate`]: crate::domain::config::GestureConfig::validate
    pub fn new(smoothing_factor: f64) -> Self {
        Self {
            smoothing_factor,
            prev_x: 0.0,
            prev_y: 0.0,
        }
    }

    /// Advances one frame toward `(target_x, target_y)` and returns the new
    /// cursor position truncated to whole pixels.
    pub fn smooth(&mut self, target_x: i32, target_y: i32) -> (i32, i32) {
        let new_x = self.prev_x + (f64::from(target_x) - self.prev_x) / self.smoothing_factor;
        let new_y = self.prev_y + (f64::from(target_y) - self.prev_y) / self.smoothing_factor;
        self.prev_x = new_x;
        self.prev_y = new_y;
        (new_x as i32, new_y as i32)
    }

    /// Current un-truncated position.
    pub fn position(&self) -> (f64, f64) {
        (self.prev_x, self.prev_y)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
