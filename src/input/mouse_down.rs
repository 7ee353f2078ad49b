//! Press stages - selection, linking, pan start, point creation.

use crate::config::KeyAction;
use crate::editor::Editor;
use crate::input::InputName;
use crate::input::coords::is_near;
use tracing::{debug, warn};

impl Editor {
    /// Primary press.
    ///
    /// With the grab key held, or over empty space, a pan drag starts. Over a
    /// point, the selected point is linked to it; with nothing selected the
    /// point becomes the selection.
    pub(crate) fn handle_primary_down(&mut self) {
        if !self.tracker.is_just_pressed(&InputName::PRIMARY) {
            return;
        }

        let grab = self.tracker.is_held(&self.keys.input(KeyAction::Grab));
        match (grab, self.hover.point) {
            (false, Some(hovered)) => match self.mode.selected() {
                Some(selected) => {
                    if let Err(err) = self.add_link(selected, hovered) {
                        warn!(%err, selected, hovered, "Link skipped");
                    }
                    self.mode.clear_selection();
                    self.draw_selection();
                }
                None => {
                    debug!(point = hovered, "Point selected");
                    self.mode.select(hovered);
                    self.draw_selection();
                }
            },
            _ => {
                debug!(grab, x = self.pointer.x, y = self.pointer.y, "Pan drag started");
                self.mode.start_drag(self.pointer, grab);
                self.refresh_cursor();
            }
        }
    }

    /// Secondary press: drop the selection, or create a point on the empty
    /// cell the pointer is snapped onto. Presses outside the snap band or on
    /// an occupied cell do nothing.
    pub(crate) fn handle_secondary_down(&mut self) {
        if !self.tracker.is_just_pressed(&InputName::SECONDARY) {
            return;
        }

        if self.mode.selected().is_some() {
            debug!("Selection cleared by secondary press");
            self.mode.clear_selection();
            self.draw_selection();
            return;
        }
        if self.hover.point.is_some() {
            return;
        }
        let Some(cell) = self.hover.cell else {
            return;
        };
        let (gx, gy) = self.hover.grid;
        if !(is_near(gx) && is_near(gy)) {
            return;
        }
        if self.graph.key_for(cell.x, cell.y).is_err() || self.graph.point_at(cell.x, cell.y).is_some() {
            return;
        }
        if let Err(err) = self.add_point(cell.x, cell.y) {
            warn!(%err, "Point creation skipped");
        }
    }
}
