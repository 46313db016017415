//! Infrastructure layer: OS and device adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `vmouse_core`, but MUST NOT be imported by the `application` or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`cursor`** – OS-specific implementations of `CursorActuator`, selected
//!   with `#[cfg(target_os)]`, plus a `RecordingCursor` for tests.
//!
//! - **`screen_info`** – OS-specific monitor enumeration.  On Windows it calls
//!   `EnumDisplayMonitors`; on Linux it queries Xlib; on macOS it uses `CGDisplay`.
//!
//! - **`vision`** – Camera capture, the hand-landmark network and the debug
//!   window (OpenCV, behind the `opencv` feature), plus scripted stand-ins.

pub mod cursor;
pub mod screen_info;
pub mod vision;
