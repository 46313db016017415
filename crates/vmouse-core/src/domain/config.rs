//! Fixed tuning constants for the gesture-to-cursor mapping.
//!
//! The virtual mouse has no configuration file and no command-line flags.
//! Every tunable lives here as a constant and is gathered into a
//! [`GestureConfig`] at startup.  The struct exists so the values can be
//! validated once and threaded explicitly into the components that need them,
//! and so tests can build variants without touching globals.

use std::time::Duration;

use thiserror::Error;

/// Requested camera frame width in pixels.  Also the scale reference for
/// pinch distances.
pub const CAM_WIDTH: u32 = 640;
/// Requested camera frame height in pixels.
pub const CAM_HEIGHT: u32 = 480;
/// Divisor of the exponential cursor smoother.
pub const SMOOTHING_FACTOR: f64 = 7.0;
/// Pinch distance, in camera-width pixels, below which a click is considered.
pub const CLICK_THRESHOLD_PX: f64 = 40.0;
/// Minimum interval between two clicks.
pub const CLICK_COOLDOWN: Duration = Duration::from_millis(500);
/// Hand presence score needed to start tracking a hand.
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.7;
/// Hand presence score needed to keep tracking a hand seen last frame.
pub const MIN_TRACKING_CONFIDENCE: f32 = 0.5;
/// Camera device index.
pub const CAMERA_INDEX: i32 = 0;
/// Key that ends the session while the debug window has focus.
pub const QUIT_KEY: char = 'q';
/// Title of the debug window.
pub const WINDOW_TITLE: &str = "Virtual Mouse";

/// Errors raised by [`GestureConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("camera frame size must be non-zero (got {width}x{height})")]
    ZeroCameraSize { width: u32, height: u32 },

    #[error("smoothing factor must be at least 1.0 (got {0})")]
    SmoothingFactorTooSmall(f64),

    #[error("click threshold must be positive (got {0})")]
    NonPositiveThreshold(f64),

    #[error("{name} must be within [0, 1] (got {value})")]
    ConfidenceOutOfRange { name: &'static str, value: f32 },
}

/// Settings handed to the landmark detector at construction.
///
/// The control loop never reinterprets these; they only decide which
/// detections the detector reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorSettings {
    /// Maximum number of hands the detector reports per frame.
    pub max_num_hands: usize,
    /// Presence score needed to accept a hand when none was tracked.
    pub min_detection_confidence: f32,
    /// Presence score needed to keep a hand tracked from the previous frame.
    pub min_tracking_confidence: f32,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            min_detection_confidence: MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: MIN_TRACKING_CONFIDENCE,
        }
    }
}

impl DetectorSettings {
    /// Presence threshold for the next frame, given whether a hand was
    /// tracked in the previous one.
    pub fn presence_threshold(&self, tracking: bool) -> f32 {
        if tracking {
            self.min_tracking_confidence
        } else {
            self.min_detection_confidence
        }
    }
}

/// All tuning values of one virtual-mouse session.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    pub cam_width: u32,
    pub cam_height: u32,
    pub camera_index: i32,
    pub smoothing_factor: f64,
    pub click_threshold_px: f64,
    pub click_cooldown: Duration,
    pub detector: DetectorSettings,
    pub quit_key: char,
    pub window_title: String,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            cam_width: CAM_WIDTH,
            cam_height: CAM_HEIGHT,
            camera_index: CAMERA_INDEX,
            smoothing_factor: SMOOTHING_FACTOR,
            click_threshold_px: CLICK_THRESHOLD_PX,
            click_cooldown: CLICK_COOLDOWN,
            detector: DetectorSettings::default(),
            quit_key: QUIT_KEY,
            window_title: WINDOW_TITLE.to_string(),
        }
    }
}

impl GestureConfig {
    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cam_width == 0 || self.cam_height == 0 {
            return Err(ConfigError::ZeroCameraSize {
                width: self.cam_width,
                height: self.cam_height,
            });
        }
        // Written as a negated comparison so NaN is rejected too.
        if !(self.smoothing_factor >= 1.0) {
            return Err(ConfigError::SmoothingFactorTooSmall(self.smoothing_factor));
        }
        if !(self.click_threshold_px > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.click_threshold_px));
        }
        for (name, value) in [
            ("min_detection_confidence", self.detector.min_detection_confidence),
            ("min_tracking_confidence", self.detector.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ConfidenceOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
