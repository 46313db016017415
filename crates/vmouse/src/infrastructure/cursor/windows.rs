//! Windows cursor control via the SendInput API.
//!
//! Absolute mouse input is expressed in normalized coordinates: `[0, 65535]`
//! spans the primary display on each axis, independent of resolution.  Pixel
//! positions from the control loop are scaled by the primary screen size
//! reported by `GetSystemMetrics`.

#![cfg(target_os = "windows")]

use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
    MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MOVE, MOUSEINPUT, MOUSE_EVENT_FLAGS,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use crate::application::move_cursor::{ActuationError, CursorActuator};

/// Windows implementation of [`CursorActuator`] using SendInput.
pub struct WindowsCursor;

impl WindowsCursor {
    pub fn new() -> Result<Self, ActuationError> {
        Ok(Self)
    }
}

impl CursorActuator for WindowsCursor {
    fn move_to(&self, x: i32, y: i32) -> Result<(), ActuationError> {
        let (norm_x, norm_y) = normalize_coords(x, y);
        send(&[mouse_input(norm_x, norm_y, MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_MOVE)])
    }

    fn click(&self) -> Result<(), ActuationError> {
        send(&[
            mouse_input(0, 0, MOUSEEVENTF_LEFTDOWN),
            mouse_input(0, 0, MOUSEEVENTF_LEFTUP),
        ])
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mouse_input(dx: i32, dy: i32, flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn send(inputs: &[INPUT]) -> Result<(), ActuationError> {
    // SAFETY: every element is a fully initialized MOUSEINPUT.
    let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
    if sent as usize != inputs.len() {
        return Err(ActuationError::Platform(format!(
            "SendInput injected {sent} of {} events",
            inputs.len()
        )));
    }
    Ok(())
}

/// Scales pixel coordinates to the `[0, 65535]` absolute range.
fn normalize_coords(x: i32, y: i32) -> (i32, i32) {
    // SAFETY: GetSystemMetrics has no preconditions.
    let screen_w = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let screen_h = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    (scale_axis(x, screen_w), scale_axis(y, screen_h))
}

/// Maps pixel `v` onto the absolute range so that Windows, which converts
/// back with `n * extent / 65536`, lands on the same pixel.
fn scale_axis(v: i32, extent: i32) -> i32 {
    if extent <= 0 {
        return 0;
    }
    let extent = i64::from(extent);
    ((i64::from(v) * 65536 + extent - 1) / extent).clamp(0, 65535) as i32
}
