//! macOS cursor control via CoreGraphics events.
//!
//! # How does event injection work? (for beginners)
//!
//! CoreGraphics can synthesize mouse events and post them into the HID event
//! stream, the same level physical input enters at:
//!
//! 1. `CGEventSource::new(HIDSystemState)` gives an event source that mimics
//!    hardware state.
//! 2. `CGEvent::new_mouse_event(source, type, point, button)` builds the event.
//! 3. `event.post(CGEventTapLocation::HID)` injects it.
//!
//! Mouse event positions use the global display space with the origin at the
//! top-left of the main display, so control-loop coordinates pass through
//! unchanged.
//!
//! # Accessibility permission
//!
//! Posting at the HID tap requires the Accessibility permission (System
//! Settings → Privacy & Security → Accessibility).  Without it the events are
//! silently dropped; the calls themselves still succeed.

#![cfg(target_os = "macos")]

use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;

use crate::application::move_cursor::{ActuationError, CursorActuator};

/// macOS implementation of [`CursorActuator`].
pub struct MacosCursor;

impl MacosCursor {
    pub fn new() -> Result<Self, ActuationError> {
        // Probe once so a broken session fails at startup rather than per frame.
        source()?;
        Ok(Self)
    }
}

impl CursorActuator for MacosCursor {
    fn move_to(&self, x: i32, y: i32) -> Result<(), ActuationError> {
        post_mouse(CGEventType::MouseMoved, CGPoint::new(f64::from(x), f64::from(y)))
    }

    fn click(&self) -> Result<(), ActuationError> {
        let here = current_location()?;
        post_mouse(CGEventType::LeftMouseDown, here)?;
        post_mouse(CGEventType::LeftMouseUp, here)
    }
}

fn source() -> Result<CGEventSource, ActuationError> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|_| ActuationError::Platform("CGEventSourceCreate failed".into()))
}

fn current_location() -> Result<CGPoint, ActuationError> {
    let event = CGEvent::new(source()?)
        .map_err(|_| ActuationError::Platform("CGEventCreate failed".into()))?;
    Ok(event.location())
}

fn post_mouse(kind: CGEventType, at: CGPoint) -> Result<(), ActuationError> {
    let event = CGEvent::new_mouse_event(source()?, kind, at, CGMouseButton::Left)
        .map_err(|_| ActuationError::Platform("CGEventCreateMouseEvent failed".into()))?;
    event.post(CGEventTapLocation::HID);
    Ok(())
}
