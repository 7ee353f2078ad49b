//! Construction-time configuration.
//!
//! `EditorConfig` is plain serde data so it can come from code, from a JSON
//! string, or from a settings file. Missing fields fall back to defaults, so a
//! file overriding a single key binding is valid:
//!
//! ```json
//! { "size": 15, "keys": { "unselect": "q" } }
//! ```

use crate::constants::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
use crate::error::{EditorError, EditorResult};
use crate::input::InputName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logical keyboard actions the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Grab,
    ZoomIn,
    ZoomInPrecise,
    ZoomOut,
    ZoomOutPrecise,
    Unselect,
}

/// Key names bound to each `KeyAction`.
///
/// Names match host key identifiers (`" "` for space, `"Escape"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyBindings {
    pub grab: String,
    pub zoom_in: String,
    pub zoom_in_precise: String,
    pub zoom_out: String,
    pub zoom_out_precise: String,
    pub unselect: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            grab: " ".to_string(),
            zoom_in: "=".to_string(),
            zoom_in_precise: "+".to_string(),
            zoom_out: "-".to_string(),
            zoom_out_precise: "_".to_string(),
            unselect: "Escape".to_string(),
        }
    }
}

impl KeyBindings {
    /// Key name bound to `action`
    pub fn key(&self, action: KeyAction) -> &str {
        match action {
            KeyAction::Grab => &self.grab,
            KeyAction::ZoomIn => &self.zoom_in,
            KeyAction::ZoomInPrecise => &self.zoom_in_precise,
            KeyAction::ZoomOut => &self.zoom_out,
            KeyAction::ZoomOutPrecise => &self.zoom_out_precise,
            KeyAction::Unselect => &self.unselect,
        }
    }

    /// Tracked input name for `action`
    pub fn input(&self, action: KeyAction) -> InputName {
        InputName::key(self.key(action))
    }
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of cells per grid edge
    pub size: u32,
    /// Key binding overrides
    pub keys: KeyBindings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            keys: KeyBindings::default(),
        }
    }
}

impl EditorConfig {
    /// Config with a custom grid size and default keys
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Check invariants the engine relies on.
    pub fn validate(&self) -> EditorResult<()> {
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(EditorError::InvalidGridSize {
                size: self.size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON settings file.
    pub fn load(path: &Path) -> EditorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), size = config.size, "Loaded editor config");
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> EditorResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Conventional settings location: `<config_dir>/gridlink/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridlink").join("settings.json"))
}
