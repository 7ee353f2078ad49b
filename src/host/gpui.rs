//! gpui host adapter.
//!
//! Converts gpui window events and geometry into engine types so a gpui view
//! can forward its mouse/key/scroll listeners straight to
//! `Editor::handle_event`.

use super::HostEvent;
use crate::input::MouseButton;
use crate::input::coords::{ScreenPos, Viewport};
use gpui::{
    Bounds, KeyDownEvent, KeyUpEvent, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point,
    ScrollDelta, ScrollWheelEvent,
};

impl From<Point<Pixels>> for ScreenPos {
    fn from(pos: Point<Pixels>) -> Self {
        ScreenPos::new(f64::from(f32::from(pos.x)), f64::from(f32::from(pos.y)))
    }
}

impl From<Bounds<Pixels>> for Viewport {
    fn from(bounds: Bounds<Pixels>) -> Self {
        Viewport::new(
            f64::from(f32::from(bounds.origin.x)),
            f64::from(f32::from(bounds.origin.y)),
            f64::from(f32::from(bounds.size.width)),
            f64::from(f32::from(bounds.size.height)),
        )
    }
}

/// Engine button for a gpui button; navigation buttons are ignored
pub fn mouse_button(button: gpui::MouseButton) -> Option<MouseButton> {
    match button {
        gpui::MouseButton::Left => Some(MouseButton::Primary),
        gpui::MouseButton::Right => Some(MouseButton::Secondary),
        gpui::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// gpui names a few keys differently from the default bindings
pub fn key_name(key: &str) -> String {
    match key {
        "space" => " ".to_string(),
        "escape" => "Escape".to_string(),
        other => other.to_string(),
    }
}

pub fn mouse_down(event: &MouseDownEvent) -> Option<HostEvent> {
    Some(HostEvent::PointerDown {
        position: event.position.into(),
        button: mouse_button(event.button)?,
    })
}

pub fn mouse_up(event: &MouseUpEvent) -> Option<HostEvent> {
    Some(HostEvent::PointerUp {
        position: event.position.into(),
        button: mouse_button(event.button)?,
    })
}

pub fn mouse_move(event: &MouseMoveEvent) -> HostEvent {
    HostEvent::PointerMove {
        position: event.position.into(),
    }
}

pub fn scroll_wheel(event: &ScrollWheelEvent) -> HostEvent {
    let delta_y = match event.delta {
        ScrollDelta::Pixels(delta) => f64::from(f32::from(delta.y)),
        ScrollDelta::Lines(delta) => f64::from(delta.y),
    };
    HostEvent::Wheel { delta_y }
}

pub fn key_down(event: &KeyDownEvent) -> HostEvent {
    HostEvent::KeyDown {
        key: key_name(&event.keystroke.key),
    }
}

pub fn key_up(event: &KeyUpEvent) -> HostEvent {
    HostEvent::KeyUp {
        key: key_name(&event.keystroke.key),
    }
}
