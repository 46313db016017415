//! Cursor actuation port.
//!
//! The loop moves the system cursor and clicks through a [`CursorActuator`]
//! trait object.  Each OS provides an implementation in the infrastructure
//! layer; tests substitute a recording mock.
//!
//! Both calls are fire-and-forget from the loop's point of view: an error is
//! logged and the next frame proceeds normally.

use thiserror::Error;

/// Error type for cursor actuation.
#[derive(Debug, Error)]
pub enum ActuationError {
    #[error("platform error: {0}")]
    Platform(String),
}

/// Platform-agnostic cursor control.
#[cfg_attr(test, mockall::automock)]
pub trait CursorActuator: Send + Sync {
    /// Moves the cursor to absolute pixel coordinates on the primary display.
    fn move_to(&self, x: i32, y: i32) -> Result<(), ActuationError>;

    /// Presses and releases the primary button at the current cursor position.
    fn click(&self) -> Result<(), ActuationError>;
}
