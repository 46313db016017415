//! Debug overlay model and the debug display port.
//!
//! The overlay is purely observational: it shows what the loop saw (the hand
//! skeleton and the two fingertips that matter) and whether the pinch is
//! currently closed.  Nothing drawn here feeds back into control decisions.
//!
//! The [`Overlay`] is built as plain data so its layout can be tested without
//! a window; a [`DebugDisplay`] implementation turns it into pixels.

use thiserror::Error;
use vmouse_core::{to_frame_pixel, LandmarkSet, NormalizedPoint};

use super::frame::Frame;

/// A colour in blue, green, red order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgr(pub u8, pub u8, pub u8);

pub const GREEN: Bgr = Bgr(0, 255, 0);
pub const BLUE: Bgr = Bgr(255, 0, 0);
pub const RED: Bgr = Bgr(0, 0, 255);
pub const LIGHT_GREY: Bgr = Bgr(224, 224, 224);

/// Radius of the fingertip markers, in frame pixels.
pub const FINGERTIP_RADIUS: i32 = 10;
/// Radius of the skeleton joint dots.
pub const JOINT_RADIUS: i32 = 2;
/// Stroke width of skeleton bones.
pub const BONE_THICKNESS: i32 = 2;
/// Text shown while the pinch is below the click threshold.
pub const CLICKING_LABEL: &str = "CLICKING";

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub center: (i32, i32),
    pub radius: i32,
    pub color: Bgr,
}

/// A line of text anchored at its bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub origin: (i32, i32),
    pub scale: f64,
    pub thickness: i32,
    pub color: Bgr,
}

/// Everything drawn on top of one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overlay {
    /// Skeleton segments, endpoints in frame pixels.
    pub bones: Vec<((i32, i32), (i32, i32))>,
    /// Skeleton joints and fingertip markers, drawn after the bones.
    pub markers: Vec<Marker>,
    pub label: Option<Label>,
}

impl Overlay {
    /// Builds the overlay for one frame.
    ///
    /// `hand` is the detected landmark set, if any; `pinching` is whether the
    /// pinch distance was below the click threshold this frame.
    pub fn build(hand: Option<&LandmarkSet>, pinching: bool, frame_w: u32, frame_h: u32) -> Self {
        let Some(hand) = hand else {
            return Self::default();
        };
        let px = |p: NormalizedPoint| to_frame_pixel(p, frame_w, frame_h);

        let bones = hand.bones().map(|(a, b)| (px(a), px(b))).collect();

        let mut markers: Vec<Marker> = hand
            .points()
            .iter()
            .map(|&p| Marker {
                center: px(p),
                radius: JOINT_RADIUS,
                color: RED,
            })
            .collect();

        let tips = hand.index_tip().zip(hand.thumb_tip());
        if let Some((index_tip, thumb_tip)) = tips {
            markers.push(Marker {
                center: px(index_tip),
                radius: FINGERTIP_RADIUS,
                color: GREEN,
            });
            markers.push(Marker {
                center: px(thumb_tip),
                radius: FINGERTIP_RADIUS,
                color: BLUE,
            });
        }

        let label = (pinching && tips.is_some()).then(|| Label {
            text: CLICKING_LABEL.to_string(),
            origin: (50, 50),
            scale: 1.0,
            thickness: 2,
            color: RED,
        });

        Self {
            bones,
            markers,
            label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty() && self.markers.is_empty() && self.label.is_none()
    }
}

/// Error type for the debug display.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display error: {0}")]
    Platform(String),
}

/// A live window showing the mirrored camera feed with overlays.
pub trait DebugDisplay {
    /// Draws `overlay` on `frame` and presents it.
    ///
    /// Implementations may draw into `frame` directly; the loop has no further
    /// use for it.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError`] if drawing or presenting failed.  The loop
    /// logs the error and carries on.
    fn show(&mut self, frame: &mut Frame, overlay: &Overlay) -> Result<(), DisplayError>;

    /// Non-blocking poll: has the user pressed `quit_key` since the last call?
    fn quit_requested(&mut self, quit_key: char) -> bool;

    /// Closes the window.  Called exactly once, on every exit path of the loop.
    fn release(&mut self);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use vmouse_core::{HandLandmark, HAND_CONNECTIONS};

    fn make_hand() -> LandmarkSet {
        let mut points = vec![NormalizedPoint::new(0.5, 0.5); HandLandmark::COUNT];
        points[HandLandmark::IndexFingerTip.index()] = NormalizedPoint::new(0.25, 0.5);
        points[HandLandmark::ThumbTip.index()] = NormalizedPoint::new(0.75, 0.25);
        LandmarkSet::new(points)
    }

    #[test]
    fn test_build_without_hand_is_empty() {
        let overlay = Overlay::build(None, false, 640, 480);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_build_draws_full_skeleton() {
        let overlay = Overlay::build(Some(&make_hand()), false, 640, 480);
        assert_eq!(overlay.bones.len(), HAND_CONNECTIONS.len());
        // 21 joints + 2 fingertip markers
        assert_eq!(overlay.markers.len(), HandLandmark::COUNT + 2);
    }

    #[test]
    fn test_build_places_fingertip_markers_in_frame_pixels() {
        // Arrange
        let hand = make_hand();

        // Act
        let overlay = Overlay::build(Some(&hand), false, 640, 480);

        // Assert
        let index = overlay.markers.iter().find(|m| m.color == GREEN).unwrap();
        let thumb = overlay.markers.iter().find(|m| m.color == BLUE).unwrap();
        assert_eq!(index.center, (160, 240));
        assert_eq!(index.radius, FINGERTIP_RADIUS);
        assert_eq!(thumb.center, (480, 120));
    }

    #[test]
    fn test_build_shows_clicking_label_only_while_pinching() {
        let hand = make_hand();

        let open = Overlay::build(Some(&hand), false, 640, 480);
        let closed = Overlay::build(Some(&hand), true, 640, 480);

        assert!(open.label.is_none());
        let label = closed.label.expect("label while pinching");
        assert_eq!(label.text, "CLICKING");
        assert_eq!(label.origin, (50, 50));
        assert_eq!(label.color, RED);
    }

    #[test]
    fn test_build_with_partial_hand_skips_fingertip_markers() {
        let hand = LandmarkSet::new(vec![NormalizedPoint::new(0.1, 0.1); 3]);

        let overlay = Overlay::build(Some(&hand), true, 640, 480);

        assert_eq!(overlay.markers.len(), 3);
        assert!(overlay.label.is_none());
    }
}
