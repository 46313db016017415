//! Domain entities for the virtual mouse.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from OS APIs, camera libraries, inference runtimes or
//!   UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the domain is the gesture-to-cursor mapping itself: how a fingertip in
//! camera space becomes a cursor position on screen, how jitter is damped, and
//! when a pinch counts as a click.  Camera capture, hand detection and cursor
//! injection live in the outer layers of the `vmouse` crate and depend on this
//! module, never the other way round.

/// Pinch-to-click detection with a refractory cooldown.
pub mod click;

/// Fixed tuning constants and detector settings.
pub mod config;

/// Monitor descriptions and the primary screen size.
pub mod display;

/// Normalized/screen point types and their conversions.
pub mod geometry;

/// The 21-point hand landmark model.
pub mod landmarks;

/// Exponential cursor smoothing.
pub mod smoother;
