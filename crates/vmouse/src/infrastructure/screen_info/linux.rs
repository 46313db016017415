//! Linux monitor enumeration via Xlib.
//!
//! Plain Xlib reports one entry per X *screen*.  On a typical desktop all
//! physical outputs share a single X screen, so the default screen's size is
//! the full desktop; per-output geometry would need Xrandr.

use std::ptr::NonNull;

use x11::xlib;

use super::{PlatformScreenEnumerator, ScreenInfoError};
use vmouse_core::MonitorInfo;

/// Xlib implementation of [`PlatformScreenEnumerator`].
#[derive(Debug, Default)]
pub struct LinuxScreenEnumerator;

impl LinuxScreenEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformScreenEnumerator for LinuxScreenEnumerator {
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, ScreenInfoError> {
        let display = OpenDisplay::open()?;
        let display = display.as_ptr();

        // SAFETY: `display` is a live connection for the rest of this scope.
        let (screen_count, default_screen) =
            unsafe { (xlib::XScreenCount(display), xlib::XDefaultScreen(display)) };

        let mut monitors: Vec<MonitorInfo> = (0..screen_count)
            .map(|screen| {
                // SAFETY: `screen` is in [0, screen_count).
                let (width, height) = unsafe {
                    (
                        xlib::XDisplayWidth(display, screen),
                        xlib::XDisplayHeight(display, screen),
                    )
                };
                MonitorInfo::new(
                    width.max(0) as u32,
                    height.max(0) as u32,
                    screen == default_screen,
                )
            })
            .collect();

        if monitors.is_empty() {
            return Err(ScreenInfoError::PlatformError(
                "X11 reported zero screens".to_string(),
            ));
        }

        monitors.sort_by_key(|m| !m.is_primary);
        Ok(monitors)
    }
}

/// An Xlib connection closed on drop.
struct OpenDisplay(NonNull<xlib::Display>);

impl OpenDisplay {
    fn open() -> Result<Self, ScreenInfoError> {
        // SAFETY: a null name means "use $DISPLAY"; the result is checked below.
        let raw = unsafe { xlib::XOpenDisplay(std::ptr::null()) };
        NonNull::new(raw).map(Self).ok_or_else(|| {
            let display_env = std::env::var("DISPLAY").unwrap_or_else(|_| "<unset>".to_string());
            ScreenInfoError::PlatformError(format!("XOpenDisplay failed; DISPLAY={display_env}"))
        })
    }

    fn as_ptr(&self) -> *mut xlib::Display {
        self.0.as_ptr()
    }
}

impl Drop for OpenDisplay {
    fn drop(&mut self) {
        // SAFETY: opened in `open` and not used after this point.
        unsafe { xlib::XCloseDisplay(self.0.as_ptr()) };
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// With a display the call must yield a primary monitor first; without
    /// one it must fail rather than invent a size.
    #[test]
    fn test_linux_screen_enumerator_smoke() {
        let result = LinuxScreenEnumerator::new().enumerate_monitors();

        match result {
            Ok(monitors) => {
                assert!(!monitors.is_empty());
                assert!(monitors[0].is_primary, "primary screen must come first");
            }
            Err(_) => assert!(
                std::env::var("DISPLAY").is_err(),
                "enumerate must succeed when DISPLAY is set"
            ),
        }
    }
}
