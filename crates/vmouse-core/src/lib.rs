//! # vmouse-core
//!
//! Shared domain library for the virtual mouse: the coordinate transforms,
//! temporal smoothing, and pinch-click detection that turn per-frame hand
//! landmarks into deliberate pointer actions.
//!
//! This crate has zero dependencies on OS APIs, cameras, windowing toolkits or
//! inference runtimes.  Everything in it is deterministic and can be tested
//! with synthetic landmark sequences.
//!
//! # Architecture overview (for beginners)
//!
//! The virtual mouse watches a webcam, finds one hand, and moves the desktop
//! cursor with the index fingertip.  Bringing the thumb tip close to the index
//! fingertip ("pinching") clicks the primary mouse button.
//!
//! Raw landmark positions jitter from frame to frame, and a pinch held for a
//! second spans thirty frames, so the raw signal cannot drive the cursor
//! directly.  This crate holds the pieces that make it usable:
//!
//! - **`domain::geometry`** – Normalized and screen point types plus the
//!   conversions between them.
//!
//! - **`domain::landmarks`** – The 21-point hand model and the landmark set a
//!   detector produces for one hand.
//!
//! - **`domain::smoother`** – A single-pole low-pass filter that damps cursor
//!   jitter.
//!
//! - **`domain::click`** – A threshold-plus-cooldown detector that converts the
//!   continuous pinch distance into discrete clicks.
//!
//! - **`domain::config`** – The fixed tuning constants and their validation.
//!
//! - **`domain::display`** – Monitor descriptions and the primary screen size.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `vmouse_core::MotionSmoother` instead of `vmouse_core::domain::smoother::MotionSmoother`.
pub use domain::click::{ClickDecision, ClickDetector};
pub use domain::config::{ConfigError, DetectorSettings, GestureConfig};
pub use domain::display::{primary_screen_size, MonitorInfo, ScreenSize};
pub use domain::geometry::{
    distance, to_frame_pixel, to_pixel_distance, to_screen_point, NormalizedPoint, ScreenPoint,
};
pub use domain::landmarks::{HandLandmark, LandmarkSet, HAND_CONNECTIONS};
pub use domain::smoother::MotionSmoother;
