//! Webcam capture through OpenCV's `videoio` module.

use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH},
};
use tracing::{debug, info, warn};

use crate::application::capture_frames::{CaptureError, FrameSource};
use crate::application::frame::{Frame, PixelFormat};

/// A local camera device producing BGR frames backed by the decoded `Mat`.
pub struct OpenCvCamera {
    capture: VideoCapture,
    index: i32,
}

impl OpenCvCamera {
    /// Opens camera `index` and requests a `width`×`height` capture size.
    ///
    /// The device may choose a different size; frames carry their actual
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::OpenFailed`] if the device cannot be opened.
    pub fn open(index: i32, width: u32, height: u32) -> Result<Self, CaptureError> {
        let open_failed = |reason: String| CaptureError::OpenFailed { index, reason };

        info!("Opening camera {}", index);
        let mut capture =
            VideoCapture::new(index, videoio::CAP_ANY).map_err(|e| open_failed(e.to_string()))?;
        if !capture.is_opened().map_err(|e| open_failed(e.to_string()))? {
            return Err(open_failed("device not available".to_string()));
        }

        for (prop, value) in [(CAP_PROP_FRAME_WIDTH, width), (CAP_PROP_FRAME_HEIGHT, height)] {
            if let Err(e) = capture.set(prop, f64::from(value)) {
                warn!("camera {index} rejected capture size: {e}");
            }
        }

        Ok(Self { capture, index })
    }
}

impl FrameSource for OpenCvCamera {
    fn read_frame(&mut self) -> Result<Frame, CaptureError> {
        let mut mat = Mat::default();
        let grabbed = self
            .capture
            .read(&mut mat)
            .map_err(|e| CaptureError::Platform(e.to_string()))?;
        if !grabbed || mat.empty() {
            return Err(CaptureError::NoFrame);
        }
        Frame::from_mat(mat, PixelFormat::Bgr8).map_err(|e| CaptureError::Platform(e.to_string()))
    }

    fn release(&mut self) {
        match self.capture.release() {
            Ok(()) => debug!("camera {} released", self.index),
            Err(e) => warn!("camera {} release failed: {e}", self.index),
        }
    }
}
