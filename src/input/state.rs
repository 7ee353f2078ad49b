//! Interaction mode - the explicit state of the per-frame state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle          -> PointSelected  (primary down on a hovered point)
//! PointSelected -> Idle           (primary down on another point: link created,
//!                                  long press released over a point: link created,
//!                                  secondary down, unselect key)
//! Idle/PointSelected -> Dragging     (primary down on empty space,
//!                                     selection carried)
//! Idle/PointSelected -> GrabPanning  (primary down with the grab key held,
//!                                     selection carried)
//! Dragging/GrabPanning -> Idle or PointSelected (primary up, pan folded)
//! ```
//!
//! A selection made before a pan drag survives the drag; it is carried in the
//! drag variants and restored when the drag ends.

use crate::input::coords::{GridCell, ScreenPos};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    /// Nothing selected, no drag
    #[default]
    Idle,

    /// A point is selected and a link preview follows the pointer
    PointSelected {
        /// Key of the selected point
        point: u32,
    },

    /// Pan drag started on empty space
    Dragging {
        /// Pointer position when the drag started
        origin: ScreenPos,
        /// Selection to restore when the drag ends
        selected: Option<u32>,
    },

    /// Pan drag started while the grab key was held
    GrabPanning {
        origin: ScreenPos,
        selected: Option<u32>,
    },
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if either kind of pan drag is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. } | Self::GrabPanning { .. })
    }

    /// Key of the selected point, if any
    pub fn selected(&self) -> Option<u32> {
        match *self {
            Self::Idle => None,
            Self::PointSelected { point } => Some(point),
            Self::Dragging { selected, .. } | Self::GrabPanning { selected, .. } => selected,
        }
    }

    /// Pointer position where the active drag started
    pub fn drag_origin(&self) -> Option<ScreenPos> {
        match *self {
            Self::Dragging { origin, .. } | Self::GrabPanning { origin, .. } => Some(origin),
            _ => None,
        }
    }

    pub fn select(&mut self, point: u32) {
        match self {
            Self::Dragging { selected, .. } | Self::GrabPanning { selected, .. } => {
                *selected = Some(point);
            }
            _ => *self = Self::PointSelected { point },
        }
    }

    /// Drop the selection, keeping any active drag
    pub fn clear_selection(&mut self) {
        match self {
            Self::Dragging { selected, .. } | Self::GrabPanning { selected, .. } => *selected = None,
            _ => *self = Self::Idle,
        }
    }

    /// Start a pan drag, carrying over the current selection
    pub fn start_drag(&mut self, origin: ScreenPos, grab: bool) {
        let selected = self.selected();
        *self = if grab {
            Self::GrabPanning { origin, selected }
        } else {
            Self::Dragging { origin, selected }
        };
    }

    /// End the active drag, returning its origin
    pub fn end_drag(&mut self) -> Option<ScreenPos> {
        let origin = self.drag_origin()?;
        *self = match self.selected() {
            Some(point) => Self::PointSelected { point },
            None => Self::Idle,
        };
        Some(origin)
    }
}

/// What the pointer is over, as of the last processed pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    /// Pointer in view units; also the zoom anchor
    pub view: (f64, f64),
    /// Pointer in fractional grid coordinates
    pub grid: (f64, f64),
    /// Nearest cell to `grid`, once the pointer has moved
    pub cell: Option<GridCell>,
    /// Key of the point under the pointer, when `grid` snaps onto an occupied cell
    pub point: Option<u32>,
}

impl HoverState {
    /// Pointer parked at the center of a `grid_size` grid
    pub fn centered(grid_size: u32) -> Self {
        let center = f64::from(grid_size) / 2.0 - 0.5;
        Self {
            view: (center, center),
            grid: (-1.0, -1.0),
            cell: None,
            point: None,
        }
    }

    /// Snapped cell, only while a point is hovered
    pub fn hovered_cell(&self) -> Option<GridCell> {
        self.point.and(self.cell)
    }
}
