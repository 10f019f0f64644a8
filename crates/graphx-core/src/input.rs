//! Pointer input as seen by the canvas controller.

use crate::shapes::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code. Unknown codes count as auxiliary.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => MouseButton::Primary,
            2 => MouseButton::Secondary,
            _ => MouseButton::Auxiliary,
        }
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl held alone.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// A button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Absolute (page) position; the canvas converts it to local space.
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    /// Shape under the pointer as reported by the host, if it knows.
    pub target: Option<ShapeId>,
}

impl PointerInput {
    /// A primary-button event at `position` with no modifiers.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Primary,
            modifiers: Modifiers::default(),
            target: None,
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_target(mut self, target: ShapeId) -> Self {
        self.target = Some(target);
        self
    }
}

/// Pointer event type for unified mouse handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(PointerInput),
    Up(PointerInput),
    Move { position: Point },
}
