//! The in-memory video frame and its per-frame preprocessing.
//!
//! A [`Frame`] holds 8-bit, three-channel pixels in one of two backings:
//!
//! - a tightly packed, row-major `Vec<u8>`, used by scripted cameras and
//!   tests so the loop runs without an OpenCV installation;
//! - with the `opencv` feature, the `Mat` the camera decoded into.  Mirroring
//!   goes through `core::flip` and adapters draw on and feed the same `Mat`,
//!   so a captured image is never copied into Rust memory.
//!
//! Channel reordering is left to the consumers: the hand-landmark adapter
//! swaps BGR to RGB while it builds its input tensor.

use thiserror::Error;

#[cfg(feature = "opencv")]
use opencv::{
    core::{Mat, Scalar, CV_8UC3},
    prelude::*,
};

/// Channel order of a [`Frame`]'s pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Blue, green, red.  What webcams deliver through OpenCV.
    Bgr8,
    /// Red, green, blue.  What the hand-landmark model expects.
    Rgb8,
}

/// Number of bytes per pixel for every supported format.
pub const BYTES_PER_PIXEL: usize = 3;

/// Error type for frame construction and preprocessing.
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("frame buffer has {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The OpenCV backing rejected an operation.
    #[error("image backend error: {0}")]
    Backend(String),
}

#[derive(Clone)]
enum Pixels {
    Packed(Vec<u8>),
    #[cfg(feature = "opencv")]
    Mat(Mat),
}

/// One captured video frame.
#[derive(Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Pixels,
}

impl Frame {
    /// Wraps a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::BufferSize`] if `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels: Pixels::Packed(data),
        })
    }

    /// Creates a frame filled with a single colour, in the frame's own channel order.
    pub fn filled(width: u32, height: u32, format: PixelFormat, pixel: [u8; 3]) -> Self {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * BYTES_PER_PIXEL)
            .collect();
        Self {
            width,
            height,
            format,
            pixels: Pixels::Packed(data),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel bytes, row-major and tightly packed.
    pub fn data(&self) -> &[u8] {
        match &self.pixels {
            Pixels::Packed(data) => data,
            // `from_mat` and `flip` only ever store continuous matrices.
            #[cfg(feature = "opencv")]
            Pixels::Mat(mat) => mat.data_bytes().unwrap_or(&[]),
        }
    }

    /// Pixel at `(x, y)` in the frame's channel order.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = self.data().get(i..i + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2]])
    }

    /// Flips the frame around its vertical axis.
    ///
    /// After mirroring, moving a hand to the user's right moves it to the
    /// right of the image too, which is what makes the cursor follow the hand
    /// naturally.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Backend`] if OpenCV fails to flip a `Mat`.
    pub fn mirror_horizontal(&mut self) -> Result<(), FrameError> {
        match &mut self.pixels {
            Pixels::Packed(data) => {
                mirror_rows(data, self.width as usize);
                Ok(())
            }
            #[cfg(feature = "opencv")]
            Pixels::Mat(mat) => {
                let mut flipped = Mat::default();
                opencv::core::flip(&*mat, &mut flipped, 1).map_err(backend)?;
                *mat = flipped;
                Ok(())
            }
        }
    }
}

#[cfg(feature = "opencv")]
impl Frame {
    /// Takes ownership of a decoded 8-bit, 3-channel `Mat`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Backend`] for any other element type.
    pub fn from_mat(mat: Mat, format: PixelFormat) -> Result<Self, FrameError> {
        if mat.typ() != CV_8UC3 {
            return Err(FrameError::Backend(format!(
                "expected an 8-bit 3-channel image, got type {}",
                mat.typ()
            )));
        }
        let mat = if mat.is_continuous() {
            mat
        } else {
            mat.try_clone().map_err(backend)?
        };
        Ok(Self {
            width: u32::try_from(mat.cols()).unwrap_or(0),
            height: u32::try_from(mat.rows()).unwrap_or(0),
            format,
            pixels: Pixels::Mat(mat),
        })
    }

    /// The backing `Mat`, when the frame came from OpenCV.
    pub fn as_mat(&self) -> Option<&Mat> {
        match &self.pixels {
            Pixels::Mat(mat) => Some(mat),
            Pixels::Packed(_) => None,
        }
    }

    /// Copies the pixels into a new `Mat` with the same channel order.
    pub fn to_mat(&self) -> Result<Mat, FrameError> {
        if let Some(mat) = self.as_mat() {
            return mat.try_clone().map_err(backend);
        }
        let rows = i32::try_from(self.height).map_err(|e| FrameError::Backend(e.to_string()))?;
        let cols = i32::try_from(self.width).map_err(|e| FrameError::Backend(e.to_string()))?;
        let mut mat =
            Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(0.0)).map_err(backend)?;
        mat.data_bytes_mut().map_err(backend)?.copy_from_slice(self.data());
        Ok(mat)
    }

    /// The backing `Mat` for in-place drawing.
    ///
    /// A packed frame is moved into a `Mat` once; later calls reuse it.
    pub fn mat_mut(&mut self) -> Result<&mut Mat, FrameError> {
        if matches!(self.pixels, Pixels::Packed(_)) {
            self.pixels = Pixels::Mat(self.to_mat()?);
        }
        match &mut self.pixels {
            Pixels::Mat(mat) => Ok(mat),
            Pixels::Packed(_) => Err(FrameError::Backend("frame has no Mat backing".into())),
        }
    }
}

#[cfg(feature = "opencv")]
fn backend(e: opencv::Error) -> FrameError {
    FrameError::Backend(e.to_string())
}

fn mirror_rows(data: &mut [u8], width: usize) {
    let row_len = width * BYTES_PER_PIXEL;
    if row_len == 0 {
        return;
    }
    for row in data.chunks_exact_mut(row_len) {
        for x in 0..width / 2 {
            let left = x * BYTES_PER_PIXEL;
            let right = (width - 1 - x) * BYTES_PER_PIXEL;
            for c in 0..BYTES_PER_PIXEL {
                row.swap(left + c, right + c);
            }
        }
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.format == other.format
            && self.data() == other.data()
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backing = match &self.pixels {
            Pixels::Packed(_) => "packed",
            #[cfg(feature = "opencv")]
            Pixels::Mat(_) => "mat",
        };
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("backing", &backing)
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
