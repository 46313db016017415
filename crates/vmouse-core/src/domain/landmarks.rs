//! The 21-point hand landmark model.
//!
//! Hand-tracking networks in the MediaPipe family report 21 keypoints per
//! hand in a fixed order: the wrist, then four joints for each finger from the
//! base outwards.  Only two of them drive the cursor (the index fingertip and
//! the thumb tip); the rest are used for the skeleton overlay.
//!
//! ```text
//!          8   12  16  20
//!          |   |   |   |
//!     4    7   11  15  19
//!      \   |   |   |   |
//!       3  6   10  14  18
//!        \ |   |   |   |
//!         2 5--9---13--17
//!          \          /
//!           1        /
//!            \      /
//!              0 (wrist)
//! ```

use super::geometry::NormalizedPoint;

/// Identifiers of the 21 hand keypoints, in detector output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    /// Number of keypoints in a complete hand.
    pub const COUNT: usize = 21;

    /// Position of this landmark in the detector's output list.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Bone segments of the hand skeleton, as pairs of landmark indices.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    // Palm
    (0, 1),
    (0, 5),
    (9, 13),
    (13, 17),
    (5, 9),
    (0, 17),
    // Thumb
    (1, 2),
    (2, 3),
    (3, 4),
    // Index finger
    (5, 6),
    (6, 7),
    (7, 8),
    // Middle finger
    (9, 10),
    (10, 11),
    (11, 12),
    // Ring finger
    (13, 14),
    (14, 15),
    (15, 16),
    // Pinky
    (17, 18),
    (18, 19),
    (19, 20),
];

/// The landmarks of one detected hand, in detector output order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkSet {
    points: Vec<NormalizedPoint>,
}

impl LandmarkSet {
    /// Wraps an ordered list of landmark positions.
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    /// Returns the position of `landmark`, or `None` if the set is too short.
    pub fn get(&self, landmark: HandLandmark) -> Option<NormalizedPoint> {
        self.points.get(landmark.index()).copied()
    }

    /// Index fingertip, the cursor-driving keypoint.
    pub fn index_tip(&self) -> Option<NormalizedPoint> {
        self.get(HandLandmark::IndexFingerTip)
    }

    /// Thumb tip, the other half of the pinch.
    pub fn thumb_tip(&self) -> Option<NormalizedPoint> {
        self.get(HandLandmark::ThumbTip)
    }

    /// All positions in detector order.
    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Skeleton segments whose endpoints are both present in this set.
    pub fn bones(&self) -> impl Iterator<Item = (NormalizedPoint, NormalizedPoint)> + '_ {
        HAND_CONNECTIONS
            .iter()
            .filter_map(|&(a, b)| Some((*self.points.get(a)?, *self.points.get(b)?)))
    }
}

impl FromIterator<NormalizedPoint> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = NormalizedPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hand() -> LandmarkSet {
        (0..HandLandmark::COUNT)
            .map(|i| NormalizedPoint::new(i as f64 / 100.0, 0.5))
            .collect()
    }

    #[test]
    fn test_fingertip_indices_follow_21_point_convention() {
        assert_eq!(HandLandmark::ThumbTip.index(), 4);
        assert_eq!(HandLandmark::IndexFingerTip.index(), 8);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
    }

    #[test]
    fn test_index_tip_and_thumb_tip_read_positions_8_and_4() {
        let hand = full_hand();
        assert_eq!(hand.index_tip(), Some(NormalizedPoint::new(0.08, 0.5)));
        assert_eq!(hand.thumb_tip(), Some(NormalizedPoint::new(0.04, 0.5)));
    }

    #[test]
    fn test_get_returns_none_when_set_is_too_short() {
        let hand: LandmarkSet = (0..5).map(|_| NormalizedPoint::default()).collect();
        assert!(hand.thumb_tip().is_some());
        assert!(hand.index_tip().is_none());
    }

    #[test]
    fn test_bones_yields_every_connection_for_a_full_hand() {
        assert_eq!(full_hand().bones().count(), HAND_CONNECTIONS.len());
    }

    #[test]
    fn test_bones_skips_connections_with_missing_endpoints() {
        // Landmarks 0..=4: wrist plus the thumb chain.
        let hand: LandmarkSet = (0..5).map(|_| NormalizedPoint::default()).collect();
        // (0,1), (1,2), (2,3), (3,4)
        assert_eq!(hand.bones().count(), 4);
    }

    #[test]
    fn test_hand_connections_reference_valid_landmarks() {
        for (a, b) in HAND_CONNECTIONS {
            assert!(a < HandLandmark::COUNT && b < HandLandmark::COUNT);
            assert_ne!(a, b);
        }
    }
}
