//! Pointer, keyboard and wheel input handling for the grid.
//!
//! ## Architecture
//!
//! Host events only update the `InputTracker` and request a frame. Each frame
//! then runs a fixed sequence of stages (`FrameStage`) against the tracked
//! inputs, using an explicit state machine (`InteractionMode`) for selection
//! and panning instead of scattered flags.
//!
//! ## Modules
//!
//! - `tracker` - Held inputs, press timestamps, per-frame press/release sets
//! - `state` - Interaction mode enum and hover state
//! - `machine` - Frame stage order and the frame driver
//! - `keys` - Zoom keys, wheel, grab cursor and unselect stages
//! - `mouse_down` - Primary and secondary press stages (select, link, pan, create)
//! - `mouse_up` - Primary release stage (finish pan, long-press link)
//! - `drag` - Pointer move stage (drag preview, hover snapping)
//! - `transform` - Pan/zoom transform
//! - `coords` - Screen, view and grid coordinate conversion

pub mod coords;
mod drag;
mod keys;
pub mod machine;
mod mouse_down;
mod mouse_up;
pub mod state;
pub mod tracker;
pub mod transform;

pub use machine::FrameStage;
pub use state::{HoverState, InteractionMode};
pub use tracker::{InputName, InputTracker, MouseButton};
