//! Scripted vision collaborators for tests.
//!
//! The real camera, model and window need hardware, a model file and a
//! desktop session.  These replacements replay a fixed script and record what
//! the control loop did with them, so a whole session can run in a unit test.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use vmouse_core::LandmarkSet;

use crate::application::capture_frames::{CaptureError, FrameSource};
use crate::application::detect_hand::{DetectionError, LandmarkSource};
use crate::application::frame::{Frame, PixelFormat};
use crate::application::render_overlay::{DebugDisplay, DisplayError, Overlay};

// ── Camera ────────────────────────────────────────────────────────────────────

/// Replays a queue of frames, then reports [`CaptureError::NoFrame`].
#[derive(Debug, Default)]
pub struct ScriptedCamera {
    frames: VecDeque<Frame>,
    pub reads: usize,
    pub releases: usize,
}

impl ScriptedCamera {
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    /// `count` identical black BGR frames of the given size.
    pub fn blank(count: usize, width: u32, height: u32) -> Self {
        Self::new((0..count).map(|_| Frame::filled(width, height, PixelFormat::Bgr8, [0, 0, 0])))
    }
}

impl FrameSource for ScriptedCamera {
    fn read_frame(&mut self) -> Result<Frame, CaptureError> {
        self.reads += 1;
        self.frames.pop_front().ok_or(CaptureError::NoFrame)
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}

// ── Landmark detector ─────────────────────────────────────────────────────────

/// Replays one detection result per call; `Ok(None)` once the script runs out.
///
/// Every frame it receives is copied to a shared list, reachable through
/// [`ScriptedLandmarks::seen_frames`] after the detector has been moved into
/// the controller.
#[derive(Debug, Default)]
pub struct ScriptedLandmarks {
    script: VecDeque<Result<Option<LandmarkSet>, DetectionError>>,
    seen: Arc<Mutex<Vec<Frame>>>,
}

impl ScriptedLandmarks {
    pub fn new(script: impl IntoIterator<Item = Option<LandmarkSet>>) -> Self {
        Self {
            script: script.into_iter().map(Ok).collect(),
            ..Self::default()
        }
    }

    /// A detector that fails every call in `count` calls.
    pub fn failing(count: usize) -> Self {
        Self {
            script: (0..count)
                .map(|_| Err(DetectionError::Inference("scripted failure".into())))
                .collect(),
            ..Self::default()
        }
    }

    pub fn seen_frames(&self) -> Arc<Mutex<Vec<Frame>>> {
        Arc::clone(&self.seen)
    }
}

impl LandmarkSource for ScriptedLandmarks {
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, DetectionError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(frame.clone());
        }
        self.script.pop_front().unwrap_or(Ok(None))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

/// Records every overlay shown; requests quit after `quit_after` frames.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Overlay>,
    pub quit_after: Option<usize>,
    pub polled_keys: Vec<char>,
    pub releases: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quitting_after(frames: usize) -> Self {
        Self {
            quit_after: Some(frames),
            ..Self::default()
        }
    }
}

impl DebugDisplay for RecordingDisplay {
    fn show(&mut self, _frame: &mut Frame, overlay: &Overlay) -> Result<(), DisplayError> {
        self.shown.push(overlay.clone());
        Ok(())
    }

    fn quit_requested(&mut self, quit_key: char) -> bool {
        self.polled_keys.push(quit_key);
        self.quit_after
            .is_some_and(|limit| self.polled_keys.len() >= limit)
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}
