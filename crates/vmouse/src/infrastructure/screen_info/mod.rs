//! Platform-specific monitor enumeration.
//!
//! The fingertip position is normalized to `[0, 1]` and has to be scaled to a
//! real screen before the cursor can move.  This module asks the OS which
//! monitors are connected and reduces that to the primary display's size.
//!
//! # Platform implementations
//!
//! Each platform implements [`PlatformScreenEnumerator`]; the correct one is
//! selected at compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeScreenEnumerator`:
//!
//! | Module    | OS      | API used                                     |
//! |-----------|---------|----------------------------------------------|
//! | `windows` | Windows | `EnumDisplayMonitors` + `GetMonitorInfoW`    |
//! | `linux`   | Linux   | `XOpenDisplay` + `XScreenCount` (Xlib)       |
//! | `macos`   | macOS   | `CGGetActiveDisplayList` + `CGDisplayBounds` |
//!
//! A [`MockScreenEnumerator`] is always compiled (not guarded by `#[cfg]`) so
//! tests on any platform can use it without a physical display.
//!
//! ```ignore
//! let screen = detect_screen_size(&NativeScreenEnumerator::new())?;
//! ```

use thiserror::Error;
use tracing::debug;
use vmouse_core::{primary_screen_size, MonitorInfo, ScreenSize};

/// Error type for screen enumeration.
#[derive(Debug, Error)]
pub enum ScreenInfoError {
    /// The platform API call to enumerate monitors failed.
    ///
    /// The inner string describes the OS error, e.g.
    /// "XOpenDisplay failed; DISPLAY=<unset>".
    #[error("platform API error while enumerating monitors: {0}")]
    PlatformError(String),

    #[error("no monitors connected")]
    NoMonitors,
}

/// Enumerates the monitors on the current platform.
pub trait PlatformScreenEnumerator: Send + Sync {
    /// Returns the connected monitors, primary first.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenInfoError::PlatformError`] if the OS API call fails.
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, ScreenInfoError>;
}

/// Returns the size of the primary display.
///
/// # Errors
///
/// Propagates enumerator errors, and returns [`ScreenInfoError::NoMonitors`]
/// for an empty monitor list.
pub fn detect_screen_size(
    enumerator: &dyn PlatformScreenEnumerator,
) -> Result<ScreenSize, ScreenInfoError> {
    let monitors = enumerator.enumerate_monitors()?;
    debug!(count = monitors.len(), "enumerated monitors");
    primary_screen_size(&monitors).ok_or(ScreenInfoError::NoMonitors)
}

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsScreenEnumerator as NativeScreenEnumerator;

// ── Linux implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::LinuxScreenEnumerator as NativeScreenEnumerator;

// ── macOS implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosScreenEnumerator as NativeScreenEnumerator;

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A screen enumerator returning a fixed monitor list.
pub struct MockScreenEnumerator {
    pub monitors: Vec<MonitorInfo>,
}

impl MockScreenEnumerator {
    /// A single 1920×1080 primary monitor.
    pub fn single_1080p() -> Self {
        Self {
            monitors: vec![MonitorInfo::new(1920, 1080, true)],
        }
    }

    /// A 1920×1080 secondary listed before the 2560×1440 primary.
    pub fn dual_with_secondary_first() -> Self {
        Self {
            monitors: vec![
                MonitorInfo::new(1920, 1080, false),
                MonitorInfo::new(2560, 1440, true),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { monitors: vec![] }
    }
}

impl PlatformScreenEnumerator for MockScreenEnumerator {
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, ScreenInfoError> {
        Ok(self.monitors.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_screen_size_single_1080p() {
        // Arrange
        let enumerator = MockScreenEnumerator::single_1080p();

        // Act
        let size = detect_screen_size(&enumerator).expect("detect");

        // Assert
        assert_eq!(size, ScreenSize::new(1920, 1080));
    }

    #[test]
    fn test_detect_screen_size_prefers_primary_over_first() {
        // Arrange
        let enumerator = MockScreenEnumerator::dual_with_secondary_first();

        // Act
        let size = detect_screen_size(&enumerator).expect("detect");

        // Assert
        assert_eq!(size, ScreenSize::new(2560, 1440));
    }

    #[test]
    fn test_detect_screen_size_without_monitors_is_an_error() {
        let enumerator = MockScreenEnumerator::empty();

        let result = detect_screen_size(&enumerator);

        assert!(matches!(result, Err(ScreenInfoError::NoMonitors)));
    }
}
