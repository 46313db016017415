//! Hand-landmark detection port.
//!
//! The detector is a pretrained network treated as an opaque capability: a
//! mirrored camera frame in, at most one hand's landmarks out.  Confidence thresholds are
//! given to the implementation at construction time and never seen by the
//! control loop.
//!
//! A detection *error* (inference failed) is handled by the loop exactly like
//! "no hand in frame": the cursor idles for that frame and the next frame is
//! tried as usual.

use thiserror::Error;
use vmouse_core::LandmarkSet;

use super::frame::Frame;

/// Error type for landmark detection.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The model file could not be loaded.
    #[error("failed to load hand landmark model from {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    /// Inference ran but failed or produced unusable output.
    #[error("hand landmark inference failed: {0}")]
    Inference(String),
}

/// Produces the landmarks of at most one hand per frame.
pub trait LandmarkSource {
    /// Runs detection on a mirrored frame.
    ///
    /// The frame keeps the camera's channel order; implementations whose
    /// model expects RGB reorder the channels while building its input.
    ///
    /// Returns `Ok(None)` when no hand is confidently present.  When the model
    /// sees several hands, only the first is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::Inference`] if the model could not be run.
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, DetectionError>;
}
