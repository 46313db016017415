//! Camera, hand-landmark model and debug window adapters.
//!
//! The OpenCV-backed adapters are only compiled with the `opencv` cargo
//! feature, since building them needs the native OpenCV libraries:
//!
//! | Module           | Port             | OpenCV module      |
//! |------------------|------------------|--------------------|
//! | `camera`         | `FrameSource`    | `videoio`          |
//! | `hand_landmarks` | `LandmarkSource` | `dnn`              |
//! | `debug_window`   | `DebugDisplay`   | `imgproc`, `highgui` |
//!
//! `hand_model` (tensor decoding) and `mock` (scripted collaborators) are
//! always compiled.

pub mod hand_model;
pub mod mock;

pub use mock::{RecordingDisplay, ScriptedCamera, ScriptedLandmarks};

#[cfg(feature = "opencv")]
pub mod camera;

#[cfg(feature = "opencv")]
pub mod debug_window;

#[cfg(feature = "opencv")]
pub mod hand_landmarks;

#[cfg(feature = "opencv")]
pub use camera::OpenCvCamera;

#[cfg(feature = "opencv")]
pub use debug_window::HighGuiWindow;

#[cfg(feature = "opencv")]
pub use hand_landmarks::{model_path_from_env, OnnxHandLandmarker};
