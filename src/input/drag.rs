//! Pointer move stage - drag preview and hover snapping.
//!
//! ## Performance Notes
//!
//! Pointer moves arrive far more often than anything else. Coalescing keeps it
//! to one stage run per frame, and during a drag only the group transform is
//! touched.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::editor::Editor;
use crate::input::coords::{CoordinateContext, CoordinateConverter, GridCell, is_near};
use crate::profile_scope;

impl Editor {
    pub(crate) fn handle_pointer_move(&mut self) {
        profile_scope!("handle_pointer_move");

        if self.mode.is_dragging() {
            self.apply_transform();
            return;
        }

        self.update_hover();
        self.draw_selection();
    }

    /// Recompute pointer position, snapped cell and hovered point
    fn update_hover(&mut self) {
        let ctx = CoordinateContext::new(&self.view, &self.viewport, self.grid_size);
        let view = CoordinateConverter::screen_to_view(self.pointer, &ctx);
        let grid = self.view.view_to_grid(view);
        let cell = GridCell::nearest(grid);

        let point = if is_near(grid.0) && is_near(grid.1) {
            self.graph.point_at(cell.x, cell.y).map(|point| point.key)
        } else {
            None
        };
        if point != self.hover.point {
            tracing::trace!(?point, x = cell.x, y = cell.y, "Hover changed");
        }

        self.hover.view = view;
        self.hover.grid = grid;
        self.hover.cell = Some(cell);
        self.hover.point = point;
    }
}
