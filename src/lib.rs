//! Interaction engine for a point-and-link graph editor on a grid.
//!
//! The host owns the window, the renderer and the frame clock. It hands the
//! editor a `Scene` to draw into, forwards its input callbacks as
//! `HostEvent`s, and calls `Editor::run_frame` when a requested frame fires.
//! Graph changes are reported to a listener as `Action`s.

pub mod clock;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod graph;
pub mod host;
pub mod input;
pub mod perf;
pub mod routing;
pub mod scene;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EditorConfig, KeyAction, KeyBindings};
pub use editor::{Editor, EditorBuilder};
pub use error::{EditorError, EditorResult};
pub use graph::{Action, GraphModel, Link, LinkId, Listener, Point, PointId};
pub use host::{FrameEvent, HostEvent};
pub use input::coords::{GridCell, ScreenPos, Viewport, is_near};
pub use input::transform::ViewTransform;
pub use input::{FrameStage, InputName, InputTracker, InteractionMode, MouseButton};
pub use perf::FrameMonitor;
pub use routing::{Leg, LinkPath, route};
pub use scene::{CursorStyle, Primitive, RecordingScene, Scene};
pub use scheduler::{FrameHost, ManualFrameHost, UpdateScheduler};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `gridlink=info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridlink=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
