//! Coordinate types and the conversions between camera space and screen space.
//!
//! The landmark detector reports positions *normalized* to the camera frame:
//! `(0.0, 0.0)` is the top-left corner of the image and `(1.0, 1.0)` the
//! bottom-right.  The cursor actuator wants absolute screen pixels.  The
//! functions here bridge the two.
//!
//! Values slightly outside `[0, 1]` occur when the detector extrapolates a
//! fingertip past the frame edge.  They are passed through unclamped, so the
//! resulting screen point may lie a few pixels off-screen; the OS clamps the
//! cursor itself.

/// A landmark position normalized to the camera frame, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPoint {
    /// Horizontal position, `0.0` = left edge, `1.0` = right edge.
    pub x: f64,
    /// Vertical position, `0.0` = top edge, `1.0` = bottom edge.
    pub y: f64,
}

impl NormalizedPoint {
    /// Creates a point from its normalized coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An absolute pixel position in the target display's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scales a normalized point to screen pixels, rounding to the nearest pixel.
///
/// # Example
///
/// ```
/// use vmouse_core::{to_screen_point, NormalizedPoint, ScreenPoint};
///
/// let p = to_screen_point(NormalizedPoint::new(0.5, 0.5), 1920, 1080);
/// assert_eq!(p, ScreenPoint::new(960, 540));
/// ```
pub fn to_screen_point(p: NormalizedPoint, screen_w: u32, screen_h: u32) -> ScreenPoint {
    ScreenPoint {
        x: (p.x * f64::from(screen_w)).round() as i32,
        y: (p.y * f64::from(screen_h)).round() as i32,
    }
}

/// Euclidean distance between two normalized points, in normalized units.
pub fn distance(p1: NormalizedPoint, p2: NormalizedPoint) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Converts a normalized distance to an approximate pixel distance.
///
/// The camera *width* is used as the single scale reference for both axes.
/// This is not the true pixel distance on a 4:3 frame, but every click
/// threshold ever tuned for this tool was tuned against this metric, so it
/// must stay as is.
pub fn to_pixel_distance(d: f64, cam_width: u32) -> f64 {
    d * f64::from(cam_width)
}

/// Converts a normalized point to a pixel inside the camera frame, truncating.
///
/// Used only for placing overlay markers on the debug view.
pub fn to_frame_pixel(p: NormalizedPoint, frame_w: u32, frame_h: u32) -> (i32, i32) {
    (
        (p.x * f64::from(frame_w)) as i32,
        (p.y * f64::from(frame_h)) as i32,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
