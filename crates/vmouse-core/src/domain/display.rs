//! Display descriptions and the screen the cursor is mapped onto.
//!
//! The platform screen enumerators in the `vmouse` crate report every
//! connected monitor.  The virtual mouse drives a single display, the primary
//! one, so the only question this module answers is "how large is it?".

/// One connected monitor, as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether this is the primary monitor.
    pub is_primary: bool,
}

/// Size of the display the normalized fingertip position is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl MonitorInfo {
    pub const fn new(width: u32, height: u32, is_primary: bool) -> Self {
        Self {
            width,
            height,
            is_primary,
        }
    }
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<&MonitorInfo> for ScreenSize {
    fn from(m: &MonitorInfo) -> Self {
        Self::new(m.width, m.height)
    }
}

/// Picks the primary monitor's size.
///
/// Falls back to the first monitor when none is flagged primary.  Returns
/// `None` only for an empty list.
pub fn primary_screen_size(monitors: &[MonitorInfo]) -> Option<ScreenSize> {
    monitors
        .iter()
        .find(|m| m.is_primary)
        .or_else(|| monitors.first())
        .map(ScreenSize::from)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_screen_size_picks_primary_monitor() {
        let monitors = vec![
            MonitorInfo::new(2560, 1440, false),
            MonitorInfo::new(1920, 1080, true),
        ];
        assert_eq!(primary_screen_size(&monitors), Some(ScreenSize::new(1920, 1080)));
    }

    #[test]
    fn test_primary_screen_size_falls_back_to_first_monitor() {
        let monitors = vec![
            MonitorInfo::new(1280, 720, false),
            MonitorInfo::new(1920, 1080, false),
        ];
        assert_eq!(primary_screen_size(&monitors), Some(ScreenSize::new(1280, 720)));
    }

    #[test]
    fn test_primary_screen_size_of_empty_list_is_none() {
        assert_eq!(primary_screen_size(&[]), None);
    }
}
