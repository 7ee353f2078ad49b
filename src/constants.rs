//! Editor-wide constants.
//!
//! Centralizes magic numbers for grid geometry, gesture timing, zoom steps
//! and the fixed look of scene primitives.

// ============================================================================
// Grid
// ============================================================================

/// Default number of cells per grid edge
pub const DEFAULT_GRID_SIZE: u32 = 21;

/// Largest accepted grid edge; one dot primitive is created per cell
pub const MAX_GRID_SIZE: u32 = 1024;

// ============================================================================
// Gestures
// ============================================================================

/// Press duration (ms) after which a primary release over a point links to it
pub const HOLD_THRESHOLD_MS: u64 = 300;

/// Distance from an integer within which a fractional grid coordinate snaps
pub const NEAR_TOLERANCE: f64 = 0.3;

/// Slack applied to `NEAR_TOLERANCE` so that `x.3` and `x.7` stay excluded
/// despite binary floating point representation
pub const SNAP_EPSILON: f64 = 1e-9;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Default zoom level
pub const DEFAULT_SCALE: f64 = 1.0;

/// Multiplier for the precise zoom-in key
pub const PRECISE_ZOOM_IN: f64 = 1.2;

/// Multiplier for the precise zoom-out key
pub const PRECISE_ZOOM_OUT: f64 = 0.8;

/// Each wheel notch changes the scale by `scale / WHEEL_ZOOM_DIVISOR`
pub const WHEEL_ZOOM_DIVISOR: f64 = 20.0;

// ============================================================================
// Scene primitives
// ============================================================================

pub const GRID_DOT_RADIUS: f64 = 0.02;
pub const GRID_DOT_FILL: &str = "#999";

pub const POINT_RADIUS: f64 = 0.15;
pub const POINT_FILL: &str = "#ddd";

pub const HOVER_MARKER_RADIUS: f64 = 0.2;
pub const HOVER_MARKER_STROKE: &str = "hsla(0,0%,100%,0.2)";
pub const HOVER_MARKER_STROKE_WIDTH: f64 = 0.05;

pub const LINK_STROKE: &str = "rgba(255,255,255,0.3)";
pub const LINK_PREVIEW_STROKE: &str = "rgba(255,255,255,0.15)";
pub const LINK_STROKE_WIDTH: f64 = 0.1;
