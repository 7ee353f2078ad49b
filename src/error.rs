//! Error types for editor operations
//!
//! Most user gestures that cannot apply are silent no-ops (self links,
//! clicks on occupied cells, releasing keys that were never pressed). The
//! errors below cover broken preconditions that a caller can act on.

use crate::graph::LinkId;
use thiserror::Error;

/// Errors that can occur while building or driving an editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// Grid edge length is zero or too large
    #[error("Invalid grid size {size} (expected 1..={max})")]
    InvalidGridSize { size: u32, max: u32 },

    /// Cell coordinates fall outside the grid
    #[error("Cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i64, y: i64, size: u32 },

    /// The scene cannot report a positive viewport
    #[error("Mount target has no usable viewport")]
    UnusableMount,

    /// No point is stored under the given key
    #[error("Unknown point key {0}")]
    UnknownPoint(u32),

    /// No link with the given id exists
    #[error("Unknown link {0}")]
    UnknownLink(LinkId),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
