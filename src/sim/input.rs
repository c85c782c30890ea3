//! Per-tick input
//!
//! Events are captured by the frontend before the tick starts and handed
//! over as one batch. The simulation never polls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Direction keys that move the gun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// The button that charges and fires the gun
    pub const FIRE: MouseButton = MouseButton::Left;
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Events in the order they arrived
    pub events: Vec<InputEvent>,
    /// Current pointer position (screen pixels)
    pub pointer: Vec2,
}

impl TickInput {
    /// No events, pointer at `pointer`
    pub fn idle(pointer: Vec2) -> Self {
        Self {
            events: Vec::new(),
            pointer,
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }
}
