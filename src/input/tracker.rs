//! Held-input bookkeeping.
//!
//! Host callbacks only `press` and `release`. The frame reads the tracker and
//! then calls `end_frame`, the single place where records are purged. A name
//! released during a window is therefore visible as released in exactly one
//! frame, and one that was pressed is visible as just-pressed in exactly one.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Pointer buttons that produce synthetic click inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

impl MouseButton {
    /// Synthetic click name (`leftclick`, `rightclick`, `middleclick`)
    pub fn click_name(self) -> &'static str {
        match self {
            Self::Primary => "leftclick",
            Self::Secondary => "rightclick",
            Self::Middle => "middleclick",
        }
    }
}

/// A logical input that can be held
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputName {
    /// Keyboard key by host key name
    Key(String),
    /// Pointer button
    Click(MouseButton),
}

impl InputName {
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    pub const PRIMARY: Self = Self::Click(MouseButton::Primary);
    pub const SECONDARY: Self = Self::Click(MouseButton::Secondary);
}

impl fmt::Display for InputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "key {key:?}"),
            Self::Click(button) => f.write_str(button.click_name()),
        }
    }
}

#[derive(Debug, Default)]
pub struct InputTracker {
    /// Held inputs and the time they went down
    down: HashMap<InputName, u64>,
    /// Pressed since the previous frame boundary
    just_pressed: HashSet<InputName>,
    /// Released since the previous frame boundary, purged by `end_frame`
    released: HashSet<InputName>,
    /// Timestamp of the last frame boundary
    frame_time: u64,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns false if the input was already held.
    pub fn press(&mut self, name: InputName, now: u64) -> bool {
        if self.down.contains_key(&name) {
            return false;
        }
        tracing::trace!(input = %name, now, "Input pressed");
        self.down.insert(name.clone(), now);
        self.just_pressed.insert(name);
        true
    }

    /// Mark a held input for release. Unknown names are ignored.
    pub fn release(&mut self, name: &InputName) -> bool {
        if !self.down.contains_key(name) {
            return false;
        }
        tracing::trace!(input = %name, "Input released");
        self.released.insert(name.clone())
    }

    /// Force-release everything held (focus loss: matching key-ups may never arrive)
    pub fn release_all(&mut self) {
        let held: Vec<InputName> = self.down.keys().cloned().collect();
        if !held.is_empty() {
            tracing::debug!(count = held.len(), "Releasing all held inputs");
        }
        self.released.extend(held);
    }

    /// Down record exists (includes inputs released during this frame)
    pub fn is_held(&self, name: &InputName) -> bool {
        self.down.contains_key(name)
    }

    /// Held and not released during this frame
    pub fn is_active(&self, name: &InputName) -> bool {
        self.is_held(name) && !self.released.contains(name)
    }

    pub fn is_just_pressed(&self, name: &InputName) -> bool {
        self.just_pressed.contains(name)
    }

    pub fn is_released(&self, name: &InputName) -> bool {
        self.released.contains(name)
    }

    /// Milliseconds since `name` went down, 0 if it is not held
    pub fn held_duration(&self, name: &InputName, now: u64) -> u64 {
        self.down
            .get(name)
            .map(|&since| now.saturating_sub(since))
            .unwrap_or(0)
    }

    pub fn any_held(&self) -> bool {
        !self.down.is_empty()
    }

    pub fn frame_time(&self) -> u64 {
        self.frame_time
    }

    /// Purge released inputs and clear per-frame markers
    pub fn end_frame(&mut self, now: u64) {
        for name in self.released.drain() {
            self.down.remove(&name);
        }
        self.just_pressed.clear();
        self.frame_time = now;
    }
}
