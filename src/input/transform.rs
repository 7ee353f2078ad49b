//! Pan/zoom transform.
//!
//! Every zoom goes through the same anchor-preserving step: after the scale
//! changes, pan is re-solved as `pan' = ratio * (pan - anchor) + anchor` so the
//! grid point under the anchor (given in view units) stays put on screen.

use crate::constants::{DEFAULT_SCALE, PRECISE_ZOOM_IN, PRECISE_ZOOM_OUT, WHEEL_ZOOM_DIVISOR};
use serde::Serialize;

/// Current scale and pan offset of the grid inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewTransform {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// Remove pan and scale from a view-unit position
    #[inline]
    pub fn view_to_grid(&self, view: (f64, f64)) -> (f64, f64) {
        (
            (view.0 - self.pan_x) / self.scale,
            (view.1 - self.pan_y) / self.scale,
        )
    }

    /// Apply pan and scale to a grid position
    #[inline]
    pub fn grid_to_view(&self, grid: (f64, f64)) -> (f64, f64) {
        (
            grid.0 * self.scale + self.pan_x,
            grid.1 * self.scale + self.pan_y,
        )
    }

    /// Fold a finished drag delta (view units) into the pan offset
    pub fn fold_drag(&mut self, delta: (f64, f64)) {
        self.pan_x += delta.0;
        self.pan_y += delta.1;
    }

    /// Group matrix, with an in-progress drag delta added to the pan
    pub fn matrix(&self, drag: (f64, f64)) -> [f64; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.pan_x + drag.0,
            self.pan_y + drag.1,
        ]
    }

    /// Multiply the scale by `factor` around `anchor`.
    ///
    /// Returns false (and leaves the transform untouched) when the factor or
    /// the resulting scale is not a positive finite number.
    pub fn zoom_at(&mut self, factor: f64, anchor: (f64, f64)) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::warn!(factor, "Rejected zoom factor");
            return false;
        }
        self.zoom_to(self.scale * factor, anchor)
    }

    /// Set the scale to `new_scale` around `anchor`.
    pub fn zoom_to(&mut self, new_scale: f64, anchor: (f64, f64)) -> bool {
        if !new_scale.is_finite() || new_scale <= 0.0 {
            tracing::warn!(scale = self.scale, new_scale, "Rejected zoom result");
            return false;
        }
        let ratio = new_scale / self.scale;
        self.pan_x = ratio * (self.pan_x - anchor.0) + anchor.0;
        self.pan_y = ratio * (self.pan_y - anchor.1) + anchor.1;
        self.scale = new_scale;
        tracing::trace!(scale = self.scale, pan_x = self.pan_x, pan_y = self.pan_y, "Zoomed");
        true
    }

    /// Jump to the next power of two above the current scale
    pub fn zoom_in_coarse(&mut self, anchor: (f64, f64)) -> bool {
        self.zoom_to(prev_power_of_two(self.scale * 2.0), anchor)
    }

    pub fn zoom_in_precise(&mut self, anchor: (f64, f64)) -> bool {
        self.zoom_at(PRECISE_ZOOM_IN, anchor)
    }

    /// Jump to the previous power of two below the current scale
    pub fn zoom_out_coarse(&mut self, anchor: (f64, f64)) -> bool {
        self.zoom_to(next_power_of_two(self.scale / 2.0), anchor)
    }

    pub fn zoom_out_precise(&mut self, anchor: (f64, f64)) -> bool {
        self.zoom_at(PRECISE_ZOOM_OUT, anchor)
    }

    /// One wheel notch: `scale += sign(delta) * scale / 20`
    pub fn zoom_wheel(&mut self, delta: f64, anchor: (f64, f64)) -> bool {
        if delta == 0.0 || delta.is_nan() {
            return false;
        }
        self.zoom_at(1.0 + delta.signum() / WHEEL_ZOOM_DIVISOR, anchor)
    }
}

/// Smallest power of two `>= x`
fn next_power_of_two(x: f64) -> f64 {
    x.log2().ceil().exp2()
}

/// Largest power of two `<= x`
fn prev_power_of_two(x: f64) -> f64 {
    x.log2().floor().exp2()
}
