//! Pinch-to-click detection.
//!
//! The pinch distance is a continuous signal: it drifts as the hand moves and
//! stays small for as long as the user holds the pinch.  [`ClickDetector`]
//! turns it into discrete clicks with two rules:
//!
//! 1. The distance must be strictly below the threshold.
//! 2. Strictly more than the cooldown must have passed since the last click.
//!
//! The detector is level-triggered, not edge-triggered: holding a pinch
//! produces one click per cooldown interval.  Releasing the pinch is not
//! required between clicks.
//!
//! The very first qualifying pinch always fires; there is no cooldown at
//! startup.

use std::time::{Duration, Instant};

use tracing::trace;

/// Outcome of evaluating one frame's pinch distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickDecision {
    /// The pinch distance is below the threshold this frame.
    pub pinching: bool,
    /// A click must be issued this frame.
    pub fired: bool,
}

/// Threshold-plus-cooldown click detector.
#[derive(Debug, Clone)]
pub struct ClickDetector {
    threshold_px: f64,
    cooldown: Duration,
    last_click: Option<Instant>,
}

impl ClickDetector {
    pub fn new(threshold_px: f64, cooldown: Duration) -> Self {
        Self {
            threshold_px,
            cooldown,
            last_click: None,
        }
    }

    /// Evaluates the pinch distance observed at `now`.
    ///
    /// When the returned decision has `fired` set, the caller must perform the
    /// click; the detector has already recorded `now` as the last click time.
    pub fn evaluate(&mut self, distance_px: f64, now: Instant) -> ClickDecision {
        let pinching = distance_px < self.threshold_px;
        if !pinching {
            return ClickDecision::default();
        }

        let cooled_down = match self.last_click {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.cooldown,
        };
        if !cooled_down {
            trace!(distance_px, "pinch held during cooldown");
            return ClickDecision {
                pinching,
                fired: false,
            };
        }

        self.last_click = Some(now);
        ClickDecision {
            pinching,
            fired: true,
        }
    }

    /// Time of the most recent click, if any.
    pub fn last_click(&self) -> Option<Instant> {
        self.last_click
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_detector() -> ClickDetector {
        ClickDetector::new(40.0, Duration::from_millis(500))
    }

    #[test]
    fn test_first_pinch_fires_immediately() {
        // Arrange
        let mut detector = make_detector();

        // Act
        let decision = detector.evaluate(10.0, Instant::now());

        // Assert
        assert!(decision.fired);
        assert!(decision.pinching);
    }

    #[test]
    fn test_distance_equal_to_threshold_does_not_fire() {
        let mut detector = make_detector();
        let decision = detector.evaluate(40.0, Instant::now());
        assert_eq!(decision, ClickDecision::default());
        assert!(detector.last_click().is_none());
    }

    #[test]
    fn test_distance_just_below_threshold_fires() {
        let mut detector = make_detector();
        let decision = detector.evaluate(40.0 - 1e-9, Instant::now());
        assert!(decision.fired);
    }

    #[test]
    fn test_held_pinch_fires_once_per_cooldown() {
        // Arrange – 20 samples, 100 ms apart, all pinching
        let mut detector = make_detector();
        let t0 = Instant::now();

        // Act
        let fired_at: Vec<u64> = (0..20u64)
            .filter(|i| {
                detector
                    .evaluate(5.0, t0 + Duration::from_millis(i * 100))
                    .fired
            })
            .map(|i| i * 100)
            .collect();

        // Assert – 0 ms, then strictly more than 500 ms after each click
        assert_eq!(fired_at, vec![0, 600, 1200, 1800]);
    }

    #[test]
    fn test_click_exactly_one_cooldown_later_is_suppressed() {
        let mut detector = make_detector();
        let t0 = Instant::now();
        assert!(detector.evaluate(5.0, t0).fired);

        let decision = detector.evaluate(5.0, t0 + Duration::from_millis(500));

        assert!(decision.pinching);
        assert!(!decision.fired);
    }

    #[test]
    fn test_suppressed_pinch_does_not_update_last_click() {
        let mut detector = make_detector();
        let t0 = Instant::now();
        detector.evaluate(5.0, t0);

        detector.evaluate(5.0, t0 + Duration::from_millis(300));

        assert_eq!(detector.last_click(), Some(t0));
    }

    #[test]
    fn test_open_hand_reports_not_pinching() {
        let mut detector = make_detector();
        let decision = detector.evaluate(120.0, Instant::now());
        assert!(!decision.pinching);
        assert!(!decision.fired);
    }

    #[test]
    fn test_releasing_pinch_does_not_reset_cooldown() {
        // Arrange
        let mut detector = make_detector();
        let t0 = Instant::now();
        detector.evaluate(5.0, t0);

        // Act – release, then pinch again inside the cooldown window
        detector.evaluate(100.0, t0 + Duration::from_millis(100));
        let decision = detector.evaluate(5.0, t0 + Duration::from_millis(200));

        // Assert
        assert!(!decision.fired);
    }
}
