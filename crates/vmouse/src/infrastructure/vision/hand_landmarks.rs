//! Hand-landmark inference through OpenCV's `dnn` module.

use std::path::{Path, PathBuf};

use opencv::{
    core::{Mat, Scalar, Size, Vector, CV_32F},
    dnn::{self, Net},
    prelude::*,
};
use tracing::{debug, info};
use vmouse_core::{DetectorSettings, LandmarkSet};

use super::hand_model::{OutputLayout, INPUT_SIZE};
use crate::application::detect_hand::{DetectionError, LandmarkSource};
use crate::application::frame::{Frame, PixelFormat};

/// Model location used when `VMOUSE_HAND_MODEL` is unset.
pub const DEFAULT_MODEL_PATH: &str = "models/hand_landmark.onnx";

/// Environment variable overriding the model location.
pub const MODEL_PATH_ENV: &str = "VMOUSE_HAND_MODEL";

/// Resolves the model path from the environment.
pub fn model_path_from_env() -> PathBuf {
    std::env::var_os(MODEL_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
}

/// ONNX hand-landmark network run on every frame.
///
/// Uses the detection threshold until a hand is found, then the (lower)
/// tracking threshold while the hand stays in view.
pub struct OnnxHandLandmarker {
    net: Net,
    output_names: Vector<String>,
    layout: OutputLayout,
    settings: DetectorSettings,
    tracking: bool,
}

impl OnnxHandLandmarker {
    /// Loads the network from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::ModelLoad`] if the file is missing, is not
    /// a readable ONNX model, or lacks the landmark or presence output.
    pub fn load(path: &Path, settings: DetectorSettings) -> Result<Self, DetectionError> {
        let load_failed = |reason: String| DetectionError::ModelLoad {
            path: path.display().to_string(),
            reason,
        };
        if !path.is_file() {
            return Err(load_failed("file not found".to_string()));
        }

        let net = dnn::read_net_from_onnx(&path.to_string_lossy())
            .map_err(|e| load_failed(e.to_string()))?;
        let output_names = net
            .get_unconnected_out_layers_names()
            .map_err(|e| load_failed(e.to_string()))?;
        let layout = OutputLayout::resolve(&output_names.to_vec()).map_err(load_failed)?;
        info!(
            outputs = output_names.len(),
            landmark_output = layout.landmarks,
            presence_output = layout.presence,
            max_num_hands = settings.max_num_hands,
            "Loaded hand landmark model from {}",
            path.display()
        );

        Ok(Self {
            net,
            output_names,
            layout,
            settings,
            tracking: false,
        })
    }

    fn infer(&mut self, frame: &Frame) -> Result<Vec<Vec<f32>>, DetectionError> {
        let packed;
        let image = match frame.as_mat() {
            Some(mat) => mat,
            None => {
                packed = frame
                    .to_mat()
                    .map_err(|e| DetectionError::Inference(e.to_string()))?;
                &packed
            }
        };
        self.forward(image, frame.format() == PixelFormat::Bgr8)
            .map_err(|e| DetectionError::Inference(e.to_string()))
    }

    /// Resizes and scales `image` into the input blob, swapping red and blue
    /// when `swap_rb` is set, and returns every output tensor.
    fn forward(&mut self, image: &Mat, swap_rb: bool) -> opencv::Result<Vec<Vec<f32>>> {
        let blob = dnn::blob_from_image(
            image,
            1.0 / 255.0,
            Size::new(INPUT_SIZE, INPUT_SIZE),
            Scalar::default(),
            swap_rb,
            false,
            CV_32F,
        )?;
        self.net.set_input(&blob, "", 1.0, Scalar::default())?;

        let mut outputs: Vector<Mat> = Vector::new();
        self.net.forward(&mut outputs, &self.output_names)?;
        outputs
            .iter()
            .map(|out| out.data_typed::<f32>().map(<[f32]>::to_vec))
            .collect()
    }
}

impl LandmarkSource for OnnxHandLandmarker {
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, DetectionError> {
        let outputs = self.infer(frame)?;

        let threshold = self.settings.presence_threshold(self.tracking);
        let hand = self.layout.decode(&outputs, threshold, INPUT_SIZE as f32)?;
        if hand.is_some() != self.tracking {
            debug!(tracking = hand.is_some(), "hand tracking state changed");
        }
        self.tracking = hand.is_some();
        Ok(hand)
    }
}
