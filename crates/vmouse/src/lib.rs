//! vmouse library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does vmouse do? (for beginners)
//!
//! vmouse turns a webcam into a pointing device.  Every camera frame:
//!
//! 1. is mirrored, so the image behaves like a mirror for the user;
//! 2. goes through a hand-landmark network that finds 21 keypoints on one hand;
//! 3. the index fingertip's position is scaled to the screen and smoothed,
//!    and the OS cursor is moved there;
//! 4. when the thumb tip and index fingertip come closer than a threshold
//!    (a *pinch*), a left click is sent, at most once per cooldown interval;
//! 5. a debug window shows the feed with the hand skeleton drawn on top.
//!
//! The pure math (smoothing, pinch detection, coordinate mapping) lives in
//! `vmouse-core`; this crate wires it to the camera, the model, the window
//! and the OS cursor.

/// Application layer: the control loop and its ports.
pub mod application;

/// Infrastructure layer: OS cursor, screen, and vision adapters.
pub mod infrastructure;
