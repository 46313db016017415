//! Frame acquisition port.
//!
//! The control loop pulls one frame per iteration from a [`FrameSource`].
//! Reading blocks until the device delivers a frame or gives up.  Any failure
//! ends the session: the loop does not distinguish a broken camera from the
//! end of a recorded stream.

use thiserror::Error;

use super::frame::Frame;

/// Error type for frame acquisition.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The camera device could not be opened.
    #[error("camera {index} could not be opened: {reason}")]
    OpenFailed { index: i32, reason: String },

    /// The device returned no frame (unplugged, busy, or end of stream).
    #[error("no frame available from the camera")]
    NoFrame,

    #[error("platform error: {0}")]
    Platform(String),
}

/// A blocking source of video frames.
pub trait FrameSource {
    /// Blocks until the next frame is available.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError`] when no further frame can be produced.
    fn read_frame(&mut self) -> Result<Frame, CaptureError>;

    /// Releases the device.  Called exactly once, on every exit path of the loop.
    fn release(&mut self);
}
