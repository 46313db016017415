//! Platform-specific cursor actuators.
//!
//! Each OS gets its own [`CursorActuator`] implementation, selected at compile
//! time via `#[cfg(target_os = ...)]` and re-exported as `NativeCursorActuator`:
//!
//! | Module    | OS      | API used                                         |
//! |-----------|---------|--------------------------------------------------|
//! | `windows` | Windows | `SendInput` with absolute normalized coordinates |
//! | `linux`   | Linux   | XTest (`XTestFakeMotionEvent`, `...ButtonEvent`) |
//! | `macos`   | macOS   | `CGEvent` posted at the HID event tap            |
//!
//! [`RecordingCursor`] is always compiled so tests on any platform can use it.
//!
//! [`CursorActuator`]: crate::application::move_cursor::CursorActuator

pub mod mock;

pub use mock::{CursorCall, RecordingCursor};

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsCursor as NativeCursorActuator;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::XTestCursor as NativeCursorActuator;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosCursor as NativeCursorActuator;
