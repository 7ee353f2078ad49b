//! Coordinate conversion utilities for grid interactions.
//!
//! Three spaces are involved:
//! - **screen**: host pixels, as delivered with pointer events
//! - **view**: the viewport mapped onto `size` grid units, shifted by half a
//!   cell so that the pixel cursor lines up with cell centers
//! - **grid**: view units with the pan/zoom transform removed; integer
//!   values are cell centers

use crate::constants::{NEAR_TOLERANCE, SNAP_EPSILON};
use crate::input::transform::ViewTransform;
use serde::{Deserialize, Serialize};

/// Pointer position in host pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

impl ScreenPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space bounding box of the mounting point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A viewport can only map pointers when both extents are positive
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Integer cell coordinates; may lie outside the grid when the pointer does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Nearest cell to a fractional grid position
    pub fn nearest(grid: (f64, f64)) -> Self {
        Self {
            x: grid.0.round() as i64,
            y: grid.1.round() as i64,
        }
    }
}

/// True when `n` lies within the snap tolerance of an integer.
///
/// `x.25` and `x.75` snap; `x.3`, `x.5` and `x.7` do not.
#[inline]
pub fn is_near(n: f64) -> bool {
    (n - n.round()).abs() < NEAR_TOLERANCE - SNAP_EPSILON
}

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    pub view: &'a ViewTransform,
    pub viewport: &'a Viewport,
    pub grid_size: u32,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(view: &'a ViewTransform, viewport: &'a Viewport, grid_size: u32) -> Self {
        Self {
            view,
            viewport,
            grid_size,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to view units
    #[inline]
    pub fn screen_to_view(pos: ScreenPos, ctx: &CoordinateContext<'_>) -> (f64, f64) {
        let size = f64::from(ctx.grid_size);
        (
            (pos.x - ctx.viewport.x) / ctx.viewport.width * size - 0.5,
            (pos.y - ctx.viewport.y) / ctx.viewport.height * size - 0.5,
        )
    }

    /// Convert view units back to a screen position
    #[inline]
    pub fn view_to_screen(view: (f64, f64), ctx: &CoordinateContext<'_>) -> ScreenPos {
        let size = f64::from(ctx.grid_size);
        ScreenPos::new(
            (view.0 + 0.5) / size * ctx.viewport.width + ctx.viewport.x,
            (view.1 + 0.5) / size * ctx.viewport.height + ctx.viewport.y,
        )
    }

    /// Convert screen position to fractional grid coordinates
    #[inline]
    pub fn screen_to_grid(pos: ScreenPos, ctx: &CoordinateContext<'_>) -> (f64, f64) {
        ctx.view.view_to_grid(Self::screen_to_view(pos, ctx))
    }

    /// Convert grid coordinates to a screen position
    #[inline]
    pub fn grid_to_screen(grid: (f64, f64), ctx: &CoordinateContext<'_>) -> ScreenPos {
        Self::view_to_screen(ctx.view.grid_to_view(grid), ctx)
    }

    /// Convert a screen drag (origin to current) into a view-unit pan delta
    #[inline]
    pub fn delta_screen_to_view(
        origin: ScreenPos,
        current: ScreenPos,
        viewport: &Viewport,
        grid_size: u32,
    ) -> (f64, f64) {
        let size = f64::from(grid_size);
        (
            (current.x - origin.x) / viewport.width * size,
            (current.y - origin.y) / viewport.height * size,
        )
    }
}
