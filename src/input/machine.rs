//! Per-frame driver.
//!
//! A frame runs every `FrameStage` in `FrameStage::ORDER`. Stages read the
//! tracked inputs and the one-shot events pending since the previous frame;
//! the final stage purges released inputs so each release is seen by exactly
//! one frame.

use crate::editor::Editor;
use crate::host::FrameEvent;
use crate::perf::measure;
use crate::profile_scope;
use std::collections::HashSet;
use tracing::{trace, warn};

/// Stages of a frame, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameStage {
    /// Focus lost: force-release every held input
    FocusLoss,
    /// Mounted or resized: re-read the viewport
    Viewport,
    /// Zoom keys, then queued wheel steps
    Zoom,
    /// Cursor follows the grab key
    GrabStyle,
    /// Unselect key clears the selection
    Unselect,
    /// Primary press: select, link or start a pan
    PrimaryDown,
    /// Primary release: finish a pan or complete a long-press link
    PrimaryUp,
    /// Secondary press: deselect or create a point
    SecondaryDown,
    /// Pointer moved: drag preview or hover update
    PointerMove,
    /// Purge released inputs
    Purge,
}

impl FrameStage {
    pub const ORDER: [FrameStage; 10] = [
        FrameStage::FocusLoss,
        FrameStage::Viewport,
        FrameStage::Zoom,
        FrameStage::GrabStyle,
        FrameStage::Unselect,
        FrameStage::PrimaryDown,
        FrameStage::PrimaryUp,
        FrameStage::SecondaryDown,
        FrameStage::PointerMove,
        FrameStage::Purge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FrameStage::FocusLoss => "focus_loss",
            FrameStage::Viewport => "viewport",
            FrameStage::Zoom => "zoom",
            FrameStage::GrabStyle => "grab_style",
            FrameStage::Unselect => "unselect",
            FrameStage::PrimaryDown => "primary_down",
            FrameStage::PrimaryUp => "primary_up",
            FrameStage::SecondaryDown => "secondary_down",
            FrameStage::PointerMove => "pointer_move",
            FrameStage::Purge => "purge",
        }
    }
}

impl Editor {
    /// Run one frame. Called by the host when a requested frame fires.
    ///
    /// Ignored after `dispose`. Requests another frame while any input is
    /// still held.
    pub fn run_frame(&mut self) {
        if !self.scheduler.begin_frame() {
            return;
        }
        profile_scope!("run_frame");

        self.monitor.begin_frame();
        let now = self.clock.now_ms();
        let events = std::mem::take(&mut self.pending);
        trace!(?events, now, mode = ?self.mode, "Frame");

        for stage in FrameStage::ORDER {
            let ((), ms) = measure(|| self.run_stage(stage, &events, now));
            self.monitor.record_stage(stage.name(), ms);
        }

        self.monitor.end_frame();
        self.scheduler.finish_frame(self.tracker.any_held());
    }

    fn run_stage(&mut self, stage: FrameStage, events: &HashSet<FrameEvent>, now: u64) {
        match stage {
            FrameStage::FocusLoss => {
                if events.contains(&FrameEvent::Blur) {
                    self.handle_focus_loss();
                }
            }
            FrameStage::Viewport => {
                if events.contains(&FrameEvent::Init) || events.contains(&FrameEvent::Resize) {
                    self.handle_viewport_change();
                }
            }
            FrameStage::Zoom => self.handle_zoom(),
            FrameStage::GrabStyle => self.handle_grab_style(),
            FrameStage::Unselect => self.handle_unselect(),
            FrameStage::PrimaryDown => self.handle_primary_down(),
            FrameStage::PrimaryUp => self.handle_primary_up(now),
            FrameStage::SecondaryDown => self.handle_secondary_down(),
            FrameStage::PointerMove => {
                if events.contains(&FrameEvent::PointerMove) {
                    self.handle_pointer_move();
                }
            }
            FrameStage::Purge => self.tracker.end_frame(now),
        }
    }

    fn handle_focus_loss(&mut self) {
        tracing::debug!("Focus lost");
        self.tracker.release_all();
    }

    fn handle_viewport_change(&mut self) {
        match self.scene.viewport() {
            Some(viewport) if viewport.is_usable() => self.viewport = viewport,
            other => warn!(viewport = ?other, "Unusable viewport, keeping previous bounds"),
        }
        self.apply_transform();
        self.draw_selection();
    }
}
