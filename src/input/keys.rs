//! Keyboard and wheel stages - zoom, grab cursor, unselect.
//!
//! Zoom is anchored on the last known pointer position in view units, so the
//! grid point under the pointer stays put.

use crate::config::KeyAction;
use crate::editor::Editor;
use crate::input::transform::ViewTransform;

type ZoomStep = fn(&mut ViewTransform, (f64, f64)) -> bool;

/// Zoom keys in the order they are applied within a frame
const ZOOM_KEYS: [(KeyAction, ZoomStep); 4] = [
    (KeyAction::ZoomIn, ViewTransform::zoom_in_coarse),
    (KeyAction::ZoomInPrecise, ViewTransform::zoom_in_precise),
    (KeyAction::ZoomOut, ViewTransform::zoom_out_coarse),
    (KeyAction::ZoomOutPrecise, ViewTransform::zoom_out_precise),
];

impl Editor {
    pub(crate) fn handle_zoom(&mut self) {
        let anchor = self.hover.view;

        for (action, step) in ZOOM_KEYS {
            if self.tracker.is_just_pressed(&self.keys.input(action)) && step(&mut self.view, anchor) {
                tracing::debug!(?action, scale = self.view.scale(), "Zoom key");
                self.apply_transform();
            }
        }

        for delta in std::mem::take(&mut self.wheel_steps) {
            if self.view.zoom_wheel(delta, anchor) {
                self.apply_transform();
            }
        }
    }

    pub(crate) fn handle_grab_style(&mut self) {
        let grab = self.keys.input(KeyAction::Grab);
        if self.tracker.is_just_pressed(&grab) || self.tracker.is_released(&grab) {
            self.refresh_cursor();
        }
    }

    pub(crate) fn handle_unselect(&mut self) {
        if self.tracker.is_just_pressed(&self.keys.input(KeyAction::Unselect))
            && self.mode.selected().is_some()
        {
            tracing::debug!("Selection cleared by key");
            self.mode.clear_selection();
            self.draw_selection();
        }
    }
}
