//! Primary release stage - finish pans, complete long-press links.

use crate::constants::HOLD_THRESHOLD_MS;
use crate::editor::Editor;
use crate::input::InputName;
use crate::input::coords::CoordinateConverter;
use tracing::{debug, warn};

impl Editor {
    pub(crate) fn handle_primary_up(&mut self, now: u64) {
        if !self.tracker.is_released(&InputName::PRIMARY) {
            return;
        }

        if let Some(origin) = self.mode.end_drag() {
            let delta = CoordinateConverter::delta_screen_to_view(
                origin,
                self.pointer,
                &self.viewport,
                self.grid_size,
            );
            self.view.fold_drag(delta);
            debug!(dx = delta.0, dy = delta.1, pan = ?self.view.pan(), "Pan drag finished");
            self.apply_transform();
            self.refresh_cursor();
            return;
        }

        // Press-drag-release from a selected point onto another one
        let Some(selected) = self.mode.selected() else {
            return;
        };
        let held = self.tracker.held_duration(&InputName::PRIMARY, now);
        if held <= HOLD_THRESHOLD_MS {
            return;
        }
        if let Some(hovered) = self.hover.point
            && let Err(err) = self.add_link(selected, hovered)
        {
            warn!(%err, selected, hovered, "Link skipped");
        }
        debug!(held, "Long press released");
        self.mode.clear_selection();
        self.draw_selection();
    }
}
