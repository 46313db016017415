//! Debug window drawn with `imgproc` and shown through `highgui`.

use opencv::{
    core::{Mat, Point, Scalar},
    highgui::{self, WINDOW_AUTOSIZE},
    imgproc::{self, FILLED, FONT_HERSHEY_SIMPLEX, LINE_8},
};
use tracing::{debug, warn};

use crate::application::frame::{Frame, PixelFormat};
use crate::application::render_overlay::{
    Bgr, DebugDisplay, DisplayError, Overlay, BONE_THICKNESS, LIGHT_GREY,
};

/// A named HighGUI window.
pub struct HighGuiWindow {
    title: String,
}

impl HighGuiWindow {
    /// Creates the window.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Platform`] when no GUI backend is available.
    pub fn open(title: &str) -> Result<Self, DisplayError> {
        highgui::named_window(title, WINDOW_AUTOSIZE).map_err(platform)?;
        Ok(Self {
            title: title.to_string(),
        })
    }

    fn draw(&self, canvas: &mut Mat, overlay: &Overlay) -> opencv::Result<()> {
        for &(a, b) in &overlay.bones {
            imgproc::line(
                canvas,
                point(a),
                point(b),
                scalar(LIGHT_GREY),
                BONE_THICKNESS,
                LINE_8,
                0,
            )?;
        }
        for marker in &overlay.markers {
            imgproc::circle(
                canvas,
                point(marker.center),
                marker.radius,
                scalar(marker.color),
                FILLED,
                LINE_8,
                0,
            )?;
        }
        if let Some(label) = &overlay.label {
            imgproc::put_text(
                canvas,
                &label.text,
                point(label.origin),
                FONT_HERSHEY_SIMPLEX,
                label.scale,
                scalar(label.color),
                label.thickness,
                LINE_8,
                false,
            )?;
        }
        Ok(())
    }
}

impl DebugDisplay for HighGuiWindow {
    fn show(&mut self, frame: &mut Frame, overlay: &Overlay) -> Result<(), DisplayError> {
        let format = frame.format();
        let mat = frame
            .mat_mut()
            .map_err(|e| DisplayError::Platform(e.to_string()))?;

        let mut converted;
        let canvas = match format {
            PixelFormat::Bgr8 => mat,
            PixelFormat::Rgb8 => {
                converted = Mat::default();
                imgproc::cvt_color(&*mat, &mut converted, imgproc::COLOR_RGB2BGR, 0)
                    .map_err(platform)?;
                &mut converted
            }
        };
        self.draw(canvas, overlay).map_err(platform)?;
        highgui::imshow(&self.title, &*canvas).map_err(platform)
    }

    fn quit_requested(&mut self, quit_key: char) -> bool {
        match highgui::wait_key(1) {
            Ok(key) => key >= 0 && char::from_u32(key as u32 & 0xFF) == Some(quit_key),
            Err(e) => {
                warn!("key poll failed: {e}");
                false
            }
        }
    }

    fn release(&mut self) {
        match highgui::destroy_window(&self.title) {
            Ok(()) => debug!("window '{}' closed", self.title),
            Err(e) => warn!("closing window '{}' failed: {e}", self.title),
        }
    }
}

fn point((x, y): (i32, i32)) -> Point {
    Point::new(x, y)
}

fn scalar(Bgr(b, g, r): Bgr) -> Scalar {
    Scalar::new(f64::from(b), f64::from(g), f64::from(r), 0.0)
}

fn platform(e: opencv::Error) -> DisplayError {
    DisplayError::Platform(e.to_string())
}
