//! Decoding of the hand-landmark network's raw output tensors.
//!
//! The network takes a square RGB image (`INPUT_SIZE`×`INPUT_SIZE`).  Of its
//! outputs, two are used:
//!
//! - a landmark tensor of 21 × (x, y, z) values in input-pixel units,
//! - a single hand-presence score, either a probability or a raw logit
//!   depending on how the model was exported.
//!
//! Full exports also carry a handedness score (one value, like the presence
//! score) and world landmarks in metres (63 values, like the landmark
//! tensor), and OpenCV does not promise any output order.  [`OutputLayout`]
//! therefore picks the two outputs by name when the model is loaded.
//!
//! The input is a plain resize of the whole frame (no crop, no letterbox), so
//! dividing by the input size gives coordinates normalized to the original
//! frame.  Kept free of OpenCV so it builds and tests everywhere.

use vmouse_core::{HandLandmark, LandmarkSet, NormalizedPoint};

use crate::application::detect_hand::DetectionError;

/// Side length of the network's square input, in pixels.
pub const INPUT_SIZE: i32 = 224;

/// Values per landmark in the landmark tensor.
pub const VALUES_PER_LANDMARK: usize = 3;

/// Length of one hand's landmark tensor.
pub const LANDMARK_TENSOR_LEN: usize = HandLandmark::COUNT * VALUES_PER_LANDMARK;

/// Output names accepted for the landmark tensor.
pub const LANDMARK_OUTPUT_NAMES: &[&str] = &["Identity", "landmarks", "xyz_x21"];

/// Output names accepted for the hand-presence score.
pub const PRESENCE_OUTPUT_NAMES: &[&str] = &["Identity_1", "hand_flag", "handflag", "hand_score"];

/// Positions of the landmark and presence outputs among a model's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    pub landmarks: usize,
    pub presence: usize,
}

impl OutputLayout {
    /// Finds both outputs in `names`, the model's output names in forward order.
    ///
    /// # Errors
    ///
    /// Returns a description of the missing output, naming what the model
    /// does provide.
    pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let find = |accepted: &[&str], what: &str| {
            names
                .iter()
                .position(|n| accepted.contains(&n.as_ref()))
                .ok_or_else(|| {
                    let found: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
                    format!("no {what} output (expected one of {accepted:?}, model has {found:?})")
                })
        };
        Ok(Self {
            landmarks: find(LANDMARK_OUTPUT_NAMES, "landmark")?,
            presence: find(PRESENCE_OUTPUT_NAMES, "hand presence")?,
        })
    }

    /// Decodes one forward pass whose outputs follow the resolved names.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::Inference`] when an output is missing or has
    /// the wrong length.
    pub fn decode(
        &self,
        outputs: &[Vec<f32>],
        threshold: f32,
        input_size: f32,
    ) -> Result<Option<LandmarkSet>, DetectionError> {
        let output = |i: usize| {
            outputs.get(i).ok_or_else(|| {
                DetectionError::Inference(format!("model returned {} outputs", outputs.len()))
            })
        };
        let presence = match output(self.presence)?.as_slice() {
            [score] => *score,
            other => {
                return Err(DetectionError::Inference(format!(
                    "presence output has {} values, expected 1",
                    other.len()
                )))
            }
        };
        decode_hand(output(self.landmarks)?, presence, threshold, input_size)
    }
}

/// Maps the raw presence output to a probability.
///
/// Scores already inside `[0, 1]` are taken as probabilities; anything else is
/// treated as a logit.
pub fn presence_probability(raw: f32) -> f32 {
    if (0.0..=1.0).contains(&raw) {
        raw
    } else {
        1.0 / (1.0 + (-raw).exp())
    }
}

/// Converts one hand's landmark tensor into normalized points.
///
/// A tensor holding several hands back to back yields the first.
///
/// # Errors
///
/// Returns [`DetectionError::Inference`] when the tensor is shorter than one
/// hand.
pub fn decode_landmarks(values: &[f32], input_size: f32) -> Result<LandmarkSet, DetectionError> {
    if values.len() < LANDMARK_TENSOR_LEN {
        return Err(DetectionError::Inference(format!(
            "landmark tensor has {} values, expected at least {LANDMARK_TENSOR_LEN}",
            values.len()
        )));
    }
    Ok(values[..LANDMARK_TENSOR_LEN]
        .chunks_exact(VALUES_PER_LANDMARK)
        .map(|xyz| {
            NormalizedPoint::new(
                f64::from(xyz[0] / input_size),
                f64::from(xyz[1] / input_size),
            )
        })
        .collect())
}

/// Decodes both outputs, returning `None` when the presence score is below
/// `threshold`.
pub fn decode_hand(
    landmarks: &[f32],
    raw_presence: f32,
    threshold: f32,
    input_size: f32,
) -> Result<Option<LandmarkSet>, DetectionError> {
    if presence_probability(raw_presence) < threshold {
        return Ok(None);
    }
    decode_landmarks(landmarks, input_size).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tensor_with_index_tip(x: f32, y: f32) -> Vec<f32> {
        let mut values = vec![112.0; LANDMARK_TENSOR_LEN];
        let i = HandLandmark::IndexFingerTip.index() * VALUES_PER_LANDMARK;
        values[i] = x;
        values[i + 1] = y;
        values
    }

    #[test]
    fn test_presence_probability_passes_probabilities_through() {
        assert_eq!(presence_probability(0.0), 0.0);
        assert_eq!(presence_probability(0.42), 0.42);
        assert_eq!(presence_probability(1.0), 1.0);
    }

    #[test]
    fn test_presence_probability_squashes_logits() {
        assert!(presence_probability(8.0) > 0.99);
        assert!(presence_probability(-8.0) < 0.01);
    }

    #[test]
    fn test_decode_landmarks_normalizes_by_input_size() {
        // Arrange
        let values = tensor_with_index_tip(56.0, 168.0);

        // Act
        let set = decode_landmarks(&values, INPUT_SIZE as f32).expect("decode");

        // Assert
        assert_eq!(set.len(), HandLandmark::COUNT);
        let tip = set.index_tip().unwrap();
        assert!((tip.x - 0.25).abs() < 1e-6);
        assert!((tip.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_decode_landmarks_takes_first_hand_of_several() {
        let mut values = tensor_with_index_tip(0.0, 0.0);
        values.extend(tensor_with_index_tip(224.0, 224.0));

        let set = decode_landmarks(&values, 224.0).expect("decode");

        assert_eq!(set.len(), HandLandmark::COUNT);
        assert_eq!(set.index_tip(), Some(NormalizedPoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_decode_landmarks_rejects_short_tensor() {
        let result = decode_landmarks(&[0.0; 10], 224.0);

        assert!(matches!(result, Err(DetectionError::Inference(_))));
    }

    #[test]
    fn test_decode_hand_applies_presence_threshold() {
        // Arrange
        let values = tensor_with_index_tip(112.0, 112.0);

        // Act
        let weak = decode_hand(&values, 0.6, 0.7, 224.0).expect("decode");
        let tracked = decode_hand(&values, 0.6, 0.5, 224.0).expect("decode");

        // Assert
        assert!(weak.is_none());
        assert!(tracked.is_some());
    }

    // ── OutputLayout ──────────────────────────────────────────────────────────

    /// Outputs of a full export in a shuffled order: handedness, world
    /// landmarks, hand flag, screen landmarks.
    fn full_export() -> (Vec<&'static str>, Vec<Vec<f32>>) {
        let names = vec!["Identity_2", "Identity_3", "Identity_1", "Identity"];
        let outputs = vec![
            vec![0.02],
            vec![0.05; LANDMARK_TENSOR_LEN],
            vec![0.98],
            tensor_with_index_tip(56.0, 168.0),
        ];
        (names, outputs)
    }

    #[test]
    fn test_output_layout_picks_outputs_by_name() {
        // Arrange
        let (names, _) = full_export();

        // Act
        let layout = OutputLayout::resolve(&names).expect("resolve");

        // Assert
        assert_eq!(
            layout,
            OutputLayout {
                landmarks: 3,
                presence: 2
            }
        );
    }

    #[test]
    fn test_output_layout_decodes_screen_landmarks_of_full_export() {
        // Arrange
        let (names, outputs) = full_export();
        let layout = OutputLayout::resolve(&names).expect("resolve");

        // Act
        let hand = layout.decode(&outputs, 0.7, INPUT_SIZE as f32).expect("decode");

        // Assert – handedness 0.02 and metre-scale world landmarks are ignored
        let tip = hand.expect("hand present").index_tip().unwrap();
        assert!((tip.x - 0.25).abs() < 1e-6);
        assert!((tip.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_output_layout_reports_missing_presence_output() {
        let result = OutputLayout::resolve(&["Identity", "Identity_2", "Identity_3"]);

        let message = result.unwrap_err();
        assert!(message.contains("hand presence"), "{message}");
        assert!(message.contains("Identity_2"), "{message}");
    }

    #[test]
    fn test_output_layout_rejects_multi_value_presence_output() {
        let layout = OutputLayout {
            landmarks: 0,
            presence: 1,
        };
        let outputs = vec![tensor_with_index_tip(0.0, 0.0), vec![0.9; 2]];

        let result = layout.decode(&outputs, 0.5, 224.0);

        assert!(matches!(result, Err(DetectionError::Inference(_))));
    }
}
