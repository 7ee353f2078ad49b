//! Host-facing event types.
//!
//! A host (browser shim, native window, test) translates its own callbacks
//! into `HostEvent`s and feeds them to `Editor::handle_event`. Handling only
//! records intent; nothing visible changes until the next frame runs.

#[cfg(feature = "gpui")]
pub mod gpui;

use crate::input::MouseButton;
use crate::input::coords::ScreenPos;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    PointerMove {
        position: ScreenPos,
    },
    PointerDown {
        position: ScreenPos,
        button: MouseButton,
    },
    PointerUp {
        position: ScreenPos,
        button: MouseButton,
    },
    /// Wheel notch; only the sign of `delta_y` matters
    Wheel {
        delta_y: f64,
    },
    KeyDown {
        key: String,
    },
    KeyUp {
        key: String,
    },
    /// Mounting point resized
    Resize,
    /// Page scrolled; the mounting point moved on screen
    Scroll,
    /// Host window lost focus
    Blur,
}

/// One-shot notifications consumed by the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameEvent {
    /// First frame after mounting
    Init,
    Resize,
    PointerMove,
    Blur,
}

impl HostEvent {
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove {
            position: ScreenPos::new(x, y),
        }
    }

    pub fn pointer_down(x: f64, y: f64, button: MouseButton) -> Self {
        Self::PointerDown {
            position: ScreenPos::new(x, y),
            button,
        }
    }

    pub fn pointer_up(x: f64, y: f64, button: MouseButton) -> Self {
        Self::PointerUp {
            position: ScreenPos::new(x, y),
            button,
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::KeyUp { key: key.into() }
    }
}
