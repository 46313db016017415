//! Virtual Mouse entry point.
//!
//! Builds the configuration, opens every device, and hands control to the
//! gesture loop until the user quits or the camera stops.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ GestureConfig::default().validate()
//!  └─ detect_screen_size(NativeScreenEnumerator)
//!  └─ NativeCursorActuator::new()
//!  └─ OpenCvCamera / OnnxHandLandmarker / HighGuiWindow   (feature "opencv")
//!  └─ GestureController::run()   -- blocks until quit or camera failure
//! ```
//!
//! Any failure before the loop starts is fatal and reported through
//! `anyhow`.  Once the loop is running, errors are logged per frame and never
//! end the process.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vmouse::application::move_cursor::CursorActuator;
use vmouse::infrastructure::cursor::NativeCursorActuator;
use vmouse::infrastructure::screen_info::{detect_screen_size, NativeScreenEnumerator};
use vmouse_core::GestureConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GestureConfig::default();
    config.validate().context("invalid gesture configuration")?;

    let screen = detect_screen_size(&NativeScreenEnumerator::new())
        .context("could not determine the primary screen size")?;
    info!("screen size {}x{}", screen.width, screen.height);

    let cursor: Arc<dyn CursorActuator> =
        Arc::new(NativeCursorActuator::new().context("could not initialise cursor control")?);

    run_session(config, screen, cursor)
}

#[cfg(feature = "opencv")]
fn run_session(
    config: GestureConfig,
    screen: vmouse_core::ScreenSize,
    cursor: Arc<dyn CursorActuator>,
) -> anyhow::Result<()> {
    use vmouse::application::control_loop::GestureController;
    use vmouse::infrastructure::vision::{
        model_path_from_env, HighGuiWindow, OnnxHandLandmarker, OpenCvCamera,
    };

    let model_path = model_path_from_env();
    let landmarks = OnnxHandLandmarker::load(&model_path, config.detector)
        .context("could not load the hand landmark model")?;
    let mut camera = OpenCvCamera::open(config.camera_index, config.cam_width, config.cam_height)
        .context("could not open the camera")?;
    let mut window =
        HighGuiWindow::open(&config.window_title).context("could not open the debug window")?;

    let mut controller = GestureController::new(config, screen, Box::new(landmarks), cursor);
    let summary = controller.run(&mut camera, &mut window);
    info!(
        "session ended after {} frames ({} with a hand, {} clicks)",
        summary.frames, summary.frames_with_hand, summary.clicks
    );
    Ok(())
}

#[cfg(not(feature = "opencv"))]
fn run_session(
    _config: GestureConfig,
    _screen: vmouse_core::ScreenSize,
    _cursor: Arc<dyn CursorActuator>,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "this build has no camera support; rebuild with `cargo build --release --features opencv`"
    )
}
