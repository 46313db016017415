//! macOS monitor enumeration via Core Graphics.
//!
//! `CGDisplayBounds` reports rectangles in the global display space, whose
//! origin is the top-left corner of the main display.  That is the same space
//! mouse events are posted in, so no axis flip is needed.

use core_graphics::display::CGDisplay;

use super::{PlatformScreenEnumerator, ScreenInfoError};
use vmouse_core::MonitorInfo;

/// Core Graphics implementation of [`PlatformScreenEnumerator`].
#[derive(Debug, Default)]
pub struct MacosScreenEnumerator;

impl MacosScreenEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformScreenEnumerator for MacosScreenEnumerator {
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, ScreenInfoError> {
        let ids = CGDisplay::active_displays().map_err(|e| {
            ScreenInfoError::PlatformError(format!("CGGetActiveDisplayList failed: {e}"))
        })?;
        let main_id = CGDisplay::main().id;

        let mut monitors: Vec<MonitorInfo> = ids
            .into_iter()
            .map(|id| {
                let bounds = CGDisplay::new(id).bounds();
                MonitorInfo::new(
                    bounds.size.width as u32,
                    bounds.size.height as u32,
                    id == main_id,
                )
            })
            .collect();

        monitors.sort_by_key(|m| !m.is_primary);
        Ok(monitors)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_screen_enumerator_main_display_is_first() {
        let monitors = MacosScreenEnumerator::new()
            .enumerate_monitors()
            .expect("enumerate");

        assert!(!monitors.is_empty(), "must return at least one display");
        assert!(monitors[0].is_primary);
    }
}
