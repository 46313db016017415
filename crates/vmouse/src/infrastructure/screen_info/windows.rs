//! Windows monitor enumeration via `EnumDisplayMonitors` / `GetMonitorInfoW`.

use super::{PlatformScreenEnumerator, ScreenInfoError};
use vmouse_core::MonitorInfo;

use windows::{
    Win32::Foundation::{BOOL, LPARAM, RECT},
    Win32::Graphics::Gdi::{EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO},
};

const MONITORINFOF_PRIMARY: u32 = 1;

/// Win32 implementation of [`PlatformScreenEnumerator`].
#[derive(Debug, Default)]
pub struct WindowsScreenEnumerator;

impl WindowsScreenEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformScreenEnumerator for WindowsScreenEnumerator {
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, ScreenInfoError> {
        let mut monitors: Vec<MonitorInfo> = Vec::new();

        // SAFETY: the callback only runs inside this call, while `monitors`
        // is alive and exclusively borrowed through `lparam`.
        let ok = unsafe {
            EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(collect_monitor),
                LPARAM(&mut monitors as *mut Vec<MonitorInfo> as isize),
            )
        };
        if !ok.as_bool() {
            return Err(ScreenInfoError::PlatformError(
                "EnumDisplayMonitors failed".to_string(),
            ));
        }

        monitors.sort_by_key(|m| !m.is_primary);
        Ok(monitors)
    }
}

/// # Safety
///
/// `lparam` must point to a live `Vec<MonitorInfo>`.
unsafe extern "system" fn collect_monitor(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let monitors = &mut *(lparam.0 as *mut Vec<MonitorInfo>);

    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    if GetMonitorInfoW(hmonitor, &mut info).as_bool() {
        let rc = info.rcMonitor;
        monitors.push(MonitorInfo::new(
            (rc.right - rc.left).max(0) as u32,
            (rc.bottom - rc.top).max(0) as u32,
            info.dwFlags & MONITORINFOF_PRIMARY != 0,
        ));
    }

    BOOL(1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
