//! Pointer hit testing.
//!
//! Only a release inside the settings button does anything. The button area
//! comes from the renderer's last paint, so nothing is tappable before the
//! first frame.

use embedded_graphics::{geometry::Point, primitives::Rectangle};

/// Pointer event in panel coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerEvent {
    Pressed(Point),
    Released(Point),
}

/// What a pointer event asks the host to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Open the settings screen.
    OpenSettings,
}

/// Map a pointer event to an action.
///
/// Fires on release so a press that slides off the button does nothing.
/// Presses are ignored.
pub fn hit_test(event: PointerEvent, settings_button: Option<Rectangle>) -> Option<Action> {
    match (event, settings_button) {
        (PointerEvent::Released(p), Some(button)) if button.contains(p) => Some(Action::OpenSettings),
        _ => None,
    }
}
