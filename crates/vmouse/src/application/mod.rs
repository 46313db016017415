//! Application layer: the control loop and the ports it drives.
//!
//! # What lives here?
//!
//! - **`frame`** – The image passed from capture through detection to the
//!   display, packed in memory or backed by an OpenCV `Mat`, plus the mirror
//!   step.
//!
//! - **`capture_frames`**, **`detect_hand`**, **`move_cursor`**,
//!   **`render_overlay`** – One port (trait) per external collaborator: the
//!   camera, the hand-landmark model, the OS cursor, and the debug window.
//!   Implementations live in `infrastructure` and are injected at
//!   construction time.
//!
//! - **`control_loop`** – `GestureController`, which owns the smoothing and
//!   click state and runs one capture→detect→act→render iteration per frame.

pub mod capture_frames;
pub mod control_loop;
pub mod detect_hand;
pub mod frame;
pub mod move_cursor;
pub mod render_overlay;
