//! Linux X11 cursor control via the XTest extension.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X11 protocol extension that lets a process synthesize pointer
//! events as if the user had moved the physical mouse.  Two calls are needed:
//!
//! - `XTestFakeMotionEvent(display, screen, x, y, time)` moves the pointer to
//!   absolute pixel coordinates.
//! - `XTestFakeButtonEvent(display, button, is_press, time)` presses or
//!   releases a button (1 = left).
//!
//! Events are buffered client-side until `XFlush`, so every operation ends
//! with a flush to make the pointer respond on the same frame.
//!
//! # Permissions
//!
//! The process must be able to open the display named by `DISPLAY`.  When it
//! cannot, [`XTestCursor::new`] fails and the binary exits at startup.

use std::ptr::NonNull;
use std::sync::Mutex;

use tracing::debug;
use x11::{xlib, xtest};

use crate::application::move_cursor::{ActuationError, CursorActuator};

/// `CurrentTime`: deliver the event immediately.
const CURRENT_TIME: u64 = 0;
/// `-1` selects the screen that currently holds the pointer.
const SCREEN_DEFAULT: i32 = -1;
const LEFT_BUTTON: u32 = 1;

struct DisplayHandle(NonNull<xlib::Display>);

// SAFETY: the handle is only dereferenced while the surrounding mutex is held,
// so Xlib never sees concurrent calls on this connection.
unsafe impl Send for DisplayHandle {}

/// XTest-backed [`CursorActuator`].
pub struct XTestCursor {
    display: Mutex<DisplayHandle>,
}

impl XTestCursor {
    /// Opens a connection to the X display.
    ///
    /// # Errors
    ///
    /// Returns `ActuationError::Platform` if `XOpenDisplay` fails.
    pub fn new() -> Result<Self, ActuationError> {
        // SAFETY: a null name means "use $DISPLAY"; the result is checked below.
        let raw = unsafe { xlib::XOpenDisplay(std::ptr::null()) };
        let display = NonNull::new(raw).ok_or_else(|| {
            let display_env = std::env::var("DISPLAY").unwrap_or_else(|_| "<unset>".to_string());
            ActuationError::Platform(format!("XOpenDisplay failed; DISPLAY={display_env}"))
        })?;
        debug!("opened X display for XTest");
        Ok(Self {
            display: Mutex::new(DisplayHandle(display)),
        })
    }

    fn with_display<F>(&self, f: F) -> Result<(), ActuationError>
    where
        F: FnOnce(*mut xlib::Display) -> i32,
    {
        let guard = self
            .display
            .lock()
            .map_err(|_| ActuationError::Platform("X display lock poisoned".into()))?;
        let display = guard.0.as_ptr();
        let status = f(display);
        // SAFETY: `display` is a live connection owned by `self`.
        unsafe { xlib::XFlush(display) };
        if status == 0 {
            return Err(ActuationError::Platform("XTest request rejected".into()));
        }
        Ok(())
    }
}

impl CursorActuator for XTestCursor {
    fn move_to(&self, x: i32, y: i32) -> Result<(), ActuationError> {
        self.with_display(|display| {
            // SAFETY: `display` is valid for the duration of the closure.
            unsafe { xtest::XTestFakeMotionEvent(display, SCREEN_DEFAULT, x, y, CURRENT_TIME) }
        })
    }

    fn click(&self) -> Result<(), ActuationError> {
        self.with_display(|display| {
            // SAFETY: `display` is valid for the duration of the closure.
            unsafe {
                let down = xtest::XTestFakeButtonEvent(display, LEFT_BUTTON, xlib::True, CURRENT_TIME);
                let up = xtest::XTestFakeButtonEvent(display, LEFT_BUTTON, xlib::False, CURRENT_TIME);
                down & up
            }
        })
    }
}

impl Drop for XTestCursor {
    fn drop(&mut self) {
        if let Ok(guard) = self.display.lock() {
            // SAFETY: the connection was opened in `new` and is not used after drop.
            unsafe { xlib::XCloseDisplay(guard.0.as_ptr()) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opening the display must succeed exactly when `DISPLAY` is set.
    #[test]
    fn test_xtest_cursor_smoke() {
        let result = XTestCursor::new();

        if std::env::var("DISPLAY").is_err() {
            assert!(result.is_err(), "open must fail when DISPLAY is not set");
        }
    }
}
