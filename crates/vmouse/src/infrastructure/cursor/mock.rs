//! Recording cursor actuator for tests.
//!
//! The real actuators move the pointer on the test machine, need a desktop
//! session, and leave nothing behind to assert on.  `RecordingCursor` pushes
//! every call into a `Mutex<Vec<...>>` instead, so a test can check exactly
//! which moves and clicks the control loop issued, and in what order.
//!
//! ```ignore
//! let cursor = Arc::new(RecordingCursor::new());
//! let mut controller = GestureController::new(config, screen, landmarks, cursor.clone());
//! controller.act_on_landmarks(Some(hand), now);
//! assert_eq!(cursor.clicks(), 1);
//! ```
//!
//! Set `should_fail` to make every call return `ActuationError::Platform`
//! (the call is still recorded).

use std::sync::Mutex;

use crate::application::move_cursor::{ActuationError, CursorActuator};

/// One call made on the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCall {
    MoveTo(i32, i32),
    Click,
}

/// An actuator that records calls without touching the OS.
#[derive(Debug, Default)]
pub struct RecordingCursor {
    pub calls: Mutex<Vec<CursorCall>>,
    pub should_fail: bool,
}

impl RecordingCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An actuator whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of all calls so far.
    pub fn calls(&self) -> Vec<CursorCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Positions passed to `move_to`, in order.
    pub fn moves(&self) -> Vec<(i32, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                CursorCall::MoveTo(x, y) => Some((x, y)),
                CursorCall::Click => None,
            })
            .collect()
    }

    pub fn clicks(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, CursorCall::Click))
            .count()
    }

    fn record(&self, call: CursorCall) -> Result<(), ActuationError> {
        self.calls
            .lock()
            .map_err(|_| ActuationError::Platform("call log poisoned".into()))?
            .push(call);
        if self.should_fail {
            return Err(ActuationError::Platform("mock failure".into()));
        }
        Ok(())
    }
}

impl CursorActuator for RecordingCursor {
    fn move_to(&self, x: i32, y: i32) -> Result<(), ActuationError> {
        self.record(CursorCall::MoveTo(x, y))
    }

    fn click(&self) -> Result<(), ActuationError> {
        self.record(CursorCall::Click)
    }
}
