//! GestureController: the per-frame gesture-to-cursor control loop.
//!
//! # One iteration (for beginners)
//!
//! ```text
//! read_frame ──► mirror ──► detect ──┬─ no hand ──────────────┐
//!                                    │                        │
//!                                    └─ hand                  │
//!                                        ├─ index tip → screen│
//!                                        ├─ smooth → move_to  │
//!                                        └─ pinch → click?    │
//!                                                             ▼
//!                                           render overlay, poll quit key
//! ```
//!
//! The detector converts the mirrored BGR frame to RGB itself, and the
//! display draws on that same frame afterwards.
//!
//! Everything runs on the calling thread, one frame at a time.  The only
//! state carried between frames is the smoother's last position and the click
//! detector's last click time, both owned by the controller.
//!
//! The loop ends when the user presses the quit key or when the camera stops
//! delivering frames.  Both paths release the camera and the window.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use vmouse_core::{
    distance, to_pixel_distance, to_screen_point, ClickDecision, ClickDetector, GestureConfig,
    LandmarkSet, MotionSmoother, ScreenPoint, ScreenSize,
};

use super::capture_frames::FrameSource;
use super::detect_hand::LandmarkSource;
use super::frame::Frame;
use super::move_cursor::CursorActuator;
use super::render_overlay::{DebugDisplay, Overlay};

/// What happened during one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameOutcome {
    /// Landmarks of the hand considered this frame.
    pub hand: Option<LandmarkSet>,
    /// Unsmoothed screen position of the index fingertip.
    pub target: Option<ScreenPoint>,
    /// Position the cursor was moved to.
    pub cursor: Option<ScreenPoint>,
    /// Thumb-to-index distance in camera-width pixels.
    pub pinch_distance_px: Option<f64>,
    pub click: ClickDecision,
}

impl FrameOutcome {
    pub fn hand_detected(&self) -> bool {
        self.hand.is_some()
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitReason {
    /// The user pressed the quit key.
    QuitRequested,
    /// The camera stopped delivering frames.
    #[default]
    StreamEnded,
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub frames_with_hand: u64,
    pub clicks: u64,
    pub exit: ExitReason,
}

impl RunSummary {
    fn record(&mut self, outcome: &FrameOutcome) {
        self.frames += 1;
        if outcome.hand_detected() {
            self.frames_with_hand += 1;
        }
        if outcome.click.fired {
            self.clicks += 1;
        }
    }
}

/// Owns the smoothing and click state and drives the collaborators.
pub struct GestureController {
    config: GestureConfig,
    screen: ScreenSize,
    smoother: MotionSmoother,
    clicker: ClickDetector,
    landmarks: Box<dyn LandmarkSource>,
    cursor: Arc<dyn CursorActuator>,
}

impl GestureController {
    /// Creates a controller mapping onto a screen of size `screen`.
    ///
    /// `config` is expected to have passed [`GestureConfig::validate`].
    pub fn new(
        config: GestureConfig,
        screen: ScreenSize,
        landmarks: Box<dyn LandmarkSource>,
        cursor: Arc<dyn CursorActuator>,
    ) -> Self {
        let smoother = MotionSmoother::new(config.smoothing_factor);
        let clicker = ClickDetector::new(config.click_threshold_px, config.click_cooldown);
        Self {
            config,
            screen,
            smoother,
            clicker,
            landmarks,
            cursor,
        }
    }

    /// Runs the loop until the quit key is pressed or the camera fails.
    ///
    /// Never returns an error: per-frame failures are logged and skipped, and
    /// acquisition failure is a normal way to end the session.
    pub fn run(&mut self, camera: &mut dyn FrameSource, display: &mut dyn DebugDisplay) -> RunSummary {
        info!("Virtual Mouse started");
        info!("- move your index finger to control the cursor");
        info!("- bring thumb and index finger together to click");
        info!("- press '{}' to quit", self.config.quit_key);

        let mut summary = RunSummary::default();
        summary.exit = loop {
            let mut frame = match camera.read_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    info!("camera stream ended: {e}");
                    break ExitReason::StreamEnded;
                }
            };

            // Clicks are timed after inference, which dominates the frame time.
            let hand = self.detect_hand(&mut frame);
            let outcome = self.act_on_landmarks(hand, Instant::now());
            summary.record(&outcome);

            let overlay = Overlay::build(
                outcome.hand.as_ref(),
                outcome.click.pinching,
                frame.width(),
                frame.height(),
            );
            if let Err(e) = display.show(&mut frame, &overlay) {
                warn!("debug display error: {e}");
            }

            if display.quit_requested(self.config.quit_key) {
                info!("quit requested");
                break ExitReason::QuitRequested;
            }
        };

        camera.release();
        display.release();
        info!(
            frames = summary.frames,
            frames_with_hand = summary.frames_with_hand,
            clicks = summary.clicks,
            "Virtual Mouse stopped ({:?})",
            summary.exit
        );
        summary
    }

    /// Preprocesses, detects and acts on one captured frame at time `now`.
    ///
    /// `frame` is mirrored in place so the caller can display exactly what
    /// the detector saw.
    pub fn process_frame(&mut self, frame: &mut Frame, now: Instant) -> FrameOutcome {
        let hand = self.detect_hand(frame);
        self.act_on_landmarks(hand, now)
    }

    /// Mirrors `frame` in place and runs the detector on it.
    ///
    /// A frame that cannot be mirrored, or that the detector fails on, counts
    /// as a frame without a hand.
    fn detect_hand(&mut self, frame: &mut Frame) -> Option<LandmarkSet> {
        if let Err(e) = frame.mirror_horizontal() {
            warn!("frame preprocessing failed: {e}");
            return None;
        }
        match self.landmarks.detect(frame) {
            Ok(hand) => hand,
            Err(e) => {
                warn!("hand detection failed: {e}");
                None
            }
        }
    }

    /// Moves the cursor and evaluates the pinch for the detected hand.
    ///
    /// With no hand (or a landmark set missing either fingertip) this is a
    /// no-op: the smoother and click detector keep their state and the
    /// actuator is not called.
    pub fn act_on_landmarks(&mut self, hand: Option<LandmarkSet>, now: Instant) -> FrameOutcome {
        let Some(hand) = hand else {
            return FrameOutcome::default();
        };
        let Some((index_tip, thumb_tip)) = hand.index_tip().zip(hand.thumb_tip()) else {
            debug!(landmarks = hand.len(), "landmark set lacks fingertips");
            return FrameOutcome {
                hand: Some(hand),
                ..Default::default()
            };
        };

        let target = to_screen_point(index_tip, self.screen.width, self.screen.height);
        let (x, y) = self.smoother.smooth(target.x, target.y);
        if let Err(e) = self.cursor.move_to(x, y) {
            warn!("cursor move failed: {e}");
        }

        let pinch = to_pixel_distance(distance(thumb_tip, index_tip), self.config.cam_width);
        let click = self.clicker.evaluate(pinch, now);
        if click.fired {
            info!("click detected");
            if let Err(e) = self.cursor.click() {
                warn!("click failed: {e}");
            }
        }
        debug!(
            target_x = target.x,
            target_y = target.y,
            cursor_x = x,
            cursor_y = y,
            pinch_px = pinch,
            "hand frame"
        );

        FrameOutcome {
            hand: Some(hand),
            target: Some(target),
            cursor: Some(ScreenPoint::new(x, y)),
            pinch_distance_px: Some(pinch),
            click,
        }
    }

    /// Current un-truncated smoother position.
    pub fn smoother_position(&self) -> (f64, f64) {
        self.smoother.position()
    }

    /// Time of the most recent click.
    pub fn last_click(&self) -> Option<Instant> {
        self.clicker.last_click()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::detect_hand::DetectionError;
    use crate::application::move_cursor::{ActuationError, MockCursorActuator};
    use crate::application::frame::PixelFormat;
    use std::collections::VecDeque;
    use std::time::Duration;
    use vmouse_core::{HandLandmark, NormalizedPoint};

    // ── Scripted detector ─────────────────────────────────────────────────────

    struct ScriptedDetector {
        script: VecDeque<Result<Option<LandmarkSet>, DetectionError>>,
    }

    impl LandmarkSource for ScriptedDetector {
        fn detect(&mut self, _frame: &Frame) -> Result<Option<LandmarkSet>, DetectionError> {
            self.script.pop_front().unwrap_or(Ok(None))
        }
    }

    fn hand(index_tip: (f64, f64), thumb_tip: (f64, f64)) -> LandmarkSet {
        let mut points = vec![NormalizedPoint::new(0.5, 0.8); HandLandmark::COUNT];
        points[HandLandmark::IndexFingerTip.index()] = NormalizedPoint::new(index_tip.0, index_tip.1);
        points[HandLandmark::ThumbTip.index()] = NormalizedPoint::new(thumb_tip.0, thumb_tip.1);
        LandmarkSet::new(points)
    }

    fn make_controller(
        script: Vec<Result<Option<LandmarkSet>, DetectionError>>,
        cursor: MockCursorActuator,
    ) -> GestureController {
        GestureController::new(
            GestureConfig::default(),
            ScreenSize::new(1920, 1080),
            Box::new(ScriptedDetector {
                script: script.into(),
            }),
            Arc::new(cursor),
        )
    }

    fn blank_frame() -> Frame {
        Frame::filled(4, 4, PixelFormat::Bgr8, [0, 0, 0])
    }

    // ── act_on_landmarks ──────────────────────────────────────────────────────

    #[test]
    fn test_centred_pinch_moves_cursor_and_clicks() {
        // Arrange – first smoothing step from (0,0): 960/7, 540/7
        let mut cursor = MockCursorActuator::new();
        cursor
            .expect_move_to()
            .withf(|&x, &y| x == 137 && y == 77)
            .times(1)
            .returning(|_, _| Ok(()));
        cursor.expect_click().times(1).returning(|| Ok(()));
        let mut controller = make_controller(vec![], cursor);

        // Act
        let outcome = controller.act_on_landmarks(Some(hand((0.5, 0.5), (0.51, 0.5))), Instant::now());

        // Assert
        assert_eq!(outcome.target, Some(ScreenPoint::new(960, 540)));
        assert_eq!(outcome.cursor, Some(ScreenPoint::new(137, 77)));
        assert!((outcome.pinch_distance_px.unwrap() - 6.4).abs() < 1e-9);
        assert!(outcome.click.fired);
    }

    #[test]
    fn test_no_hand_is_a_no_op() {
        // Arrange
        let mut cursor = MockCursorActuator::new();
        cursor.expect_move_to().times(0);
        cursor.expect_click().times(0);
        let mut controller = make_controller(vec![], cursor);

        // Act
        let outcome = controller.act_on_landmarks(None, Instant::now());

        // Assert
        assert_eq!(outcome, FrameOutcome::default());
        assert_eq!(controller.smoother_position(), (0.0, 0.0));
        assert!(controller.last_click().is_none());
    }

    #[test]
    fn test_no_hand_after_tracking_keeps_state() {
        // Arrange
        let mut cursor = MockCursorActuator::new();
        cursor.expect_move_to().times(1).returning(|_, _| Ok(()));
        cursor.expect_click().times(1).returning(|| Ok(()));
        let mut controller = make_controller(vec![], cursor);
        let t0 = Instant::now();
        controller.act_on_landmarks(Some(hand((0.5, 0.5), (0.5, 0.5))), t0);
        let position = controller.smoother_position();

        // Act
        controller.act_on_landmarks(None, t0 + Duration::from_millis(33));

        // Assert
        assert_eq!(controller.smoother_position(), position);
        assert_eq!(controller.last_click(), Some(t0));
    }

    #[test]
    fn test_open_hand_moves_without_clicking() {
        let mut cursor = MockCursorActuator::new();
        cursor.expect_move_to().times(1).returning(|_, _| Ok(()));
        cursor.expect_click().times(0);
        let mut controller = make_controller(vec![], cursor);

        let outcome = controller.act_on_landmarks(Some(hand((0.5, 0.5), (0.3, 0.7))), Instant::now());

        assert!(!outcome.click.pinching);
        assert!(!outcome.click.fired);
    }

    #[test]
    fn test_landmark_set_without_fingertips_does_not_act() {
        let mut cursor = MockCursorActuator::new();
        cursor.expect_move_to().times(0);
        cursor.expect_click().times(0);
        let mut controller = make_controller(vec![], cursor);
        let partial = LandmarkSet::new(vec![NormalizedPoint::new(0.5, 0.5); 3]);

        let outcome = controller.act_on_landmarks(Some(partial), Instant::now());

        assert!(outcome.hand_detected());
        assert!(outcome.cursor.is_none());
    }

    #[test]
    fn test_actuator_errors_do_not_stop_click_detection() {
        // Arrange
        let mut cursor = MockCursorActuator::new();
        cursor
            .expect_move_to()
            .returning(|_, _| Err(ActuationError::Platform("denied".into())));
        cursor
            .expect_click()
            .times(1)
            .returning(|| Err(ActuationError::Platform("denied".into())));
        let mut controller = make_controller(vec![], cursor);

        // Act
        let outcome = controller.act_on_landmarks(Some(hand((0.5, 0.5), (0.5, 0.5))), Instant::now());

        // Assert – the click still counts as fired
        assert!(outcome.click.fired);
    }

    // ── process_frame ─────────────────────────────────────────────────────────

    #[test]
    fn test_process_frame_treats_detection_error_as_no_hand() {
        let mut cursor = MockCursorActuator::new();
        cursor.expect_move_to().times(0);
        let mut controller = make_controller(
            vec![Err(DetectionError::Inference("bad tensor".into()))],
            cursor,
        );

        let outcome = controller.process_frame(&mut blank_frame(), Instant::now());

        assert!(!outcome.hand_detected());
    }

    #[test]
    fn test_process_frame_mirrors_frame_in_place() {
        // Arrange – left column white, rest black
        let mut data = vec![0u8; 6];
        data[..3].copy_from_slice(&[255, 255, 255]);
        let mut frame = Frame::new(2, 1, PixelFormat::Bgr8, data).unwrap();
        let mut controller = make_controller(vec![], MockCursorActuator::new());

        // Act
        controller.process_frame(&mut frame, Instant::now());

        // Assert
        assert_eq!(frame.pixel(1, 0), Some([255, 255, 255]));
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0]));
    }
}
