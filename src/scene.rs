//! Renderable scene abstraction.
//!
//! The editor never draws directly. It asks a `Scene` (the mounting point) for
//! primitives and mutates their attributes; the host maps those onto SVG
//! elements, canvas draw calls, or anything else. All primitives live inside
//! one group that carries the pan/zoom transform.
//!
//! `RecordingScene` is the headless implementation used by tests and the demo
//! binary. Its state sits behind a shared `parking_lot::Mutex` so a clone kept
//! by the caller observes everything the editor does.

use crate::input::coords::Viewport;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Kind of primitive a scene can create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Circle,
    Path,
}

/// Stacking position of a new primitive inside the transformed group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Prepended, drawn below everything created so far
    Back,
    /// Appended, drawn above everything created so far
    Front,
}

/// Positional and style attributes of a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attr {
    Cx,
    Cy,
    R,
    Fill,
    Stroke,
    StrokeWidth,
    StrokeLinecap,
    /// Path data
    D,
    Display,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Cursor shown over the mounting point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Grab key held, ready to pan
    Grab,
    /// Pan drag in progress
    Grabbing,
}

/// A mutable renderable owned by the editor.
pub trait Primitive {
    fn set_attr(&mut self, attr: Attr, value: AttrValue);

    fn remove_attr(&mut self, attr: Attr);

    /// Detach from the scene. The handle must not be used afterwards.
    fn remove(&mut self);

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.remove_attr(Attr::Display);
        } else {
            self.set_attr(Attr::Display, AttrValue::from("none"));
        }
    }
}

/// The mounting point: primitive factory plus root-level state.
pub trait Scene {
    /// Screen-space bounding box, `None` while the target is not laid out
    fn viewport(&self) -> Option<Viewport>;

    fn create(&mut self, kind: PrimitiveKind, layer: Layer) -> Box<dyn Primitive>;

    /// Visible window in grid units (`min_x, min_y, width, height`)
    fn set_view_box(&mut self, view_box: [f64; 4]);

    /// Affine matrix `[a, b, c, d, e, f]` applied to the primitive group
    fn set_transform(&mut self, matrix: [f64; 6]);

    fn set_cursor(&mut self, cursor: CursorStyle);
}

// ============================================================================
// RecordingScene
// ============================================================================

/// A primitive as seen by `RecordingScene`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedNode {
    pub kind: PrimitiveKind,
    pub layer: Layer,
    pub attrs: BTreeMap<Attr, AttrValue>,
    pub removed: bool,
}

impl RecordedNode {
    pub fn attr(&self, attr: Attr) -> Option<&AttrValue> {
        self.attrs.get(&attr)
    }

    pub fn is_visible(&self) -> bool {
        !self.removed && self.attr(Attr::Display).and_then(AttrValue::as_text) != Some("none")
    }
}

#[derive(Debug, Default)]
struct SceneState {
    viewport: Option<Viewport>,
    view_box: Option<[f64; 4]>,
    transform: Option<[f64; 6]>,
    cursor: CursorStyle,
    nodes: Vec<RecordedNode>,
}

/// In-memory scene that records every mutation.
#[derive(Debug, Clone, Default)]
pub struct RecordingScene {
    state: Arc<Mutex<SceneState>>,
}

impl RecordingScene {
    /// Scene with no viewport (unusable until `set_viewport`)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        let scene = Self::new();
        scene.set_viewport(Some(viewport));
        scene
    }

    /// Simulate the host resizing the mounting point
    pub fn set_viewport(&self, viewport: Option<Viewport>) {
        self.state.lock().viewport = viewport;
    }

    pub fn view_box(&self) -> Option<[f64; 4]> {
        self.state.lock().view_box
    }

    pub fn transform(&self) -> Option<[f64; 6]> {
        self.state.lock().transform
    }

    pub fn cursor(&self) -> CursorStyle {
        self.state.lock().cursor
    }

    /// Copy of every node ever created, removed ones included
    pub fn nodes(&self) -> Vec<RecordedNode> {
        self.state.lock().nodes.clone()
    }

    /// Nodes still attached to the scene
    pub fn live_nodes(&self) -> Vec<RecordedNode> {
        self.state
            .lock()
            .nodes
            .iter()
            .filter(|node| !node.removed)
            .cloned()
            .collect()
    }

    /// Attached circles with the given radius
    pub fn circles_with_radius(&self, radius: f64) -> Vec<RecordedNode> {
        self.live_nodes()
            .into_iter()
            .filter(|node| {
                node.kind == PrimitiveKind::Circle
                    && node.attr(Attr::R).and_then(AttrValue::as_number) == Some(radius)
            })
            .collect()
    }

    /// Attached paths drawn with the given stroke
    pub fn paths_with_stroke(&self, stroke: &str) -> Vec<RecordedNode> {
        self.live_nodes()
            .into_iter()
            .filter(|node| {
                node.kind == PrimitiveKind::Path
                    && node.attr(Attr::Stroke).and_then(AttrValue::as_text) == Some(stroke)
            })
            .collect()
    }
}

impl Scene for RecordingScene {
    fn viewport(&self) -> Option<Viewport> {
        self.state.lock().viewport
    }

    fn create(&mut self, kind: PrimitiveKind, layer: Layer) -> Box<dyn Primitive> {
        let mut state = self.state.lock();
        let index = state.nodes.len();
        state.nodes.push(RecordedNode {
            kind,
            layer,
            attrs: BTreeMap::new(),
            removed: false,
        });
        Box::new(RecordedPrimitive {
            index,
            state: Arc::clone(&self.state),
        })
    }

    fn set_view_box(&mut self, view_box: [f64; 4]) {
        self.state.lock().view_box = Some(view_box);
    }

    fn set_transform(&mut self, matrix: [f64; 6]) {
        self.state.lock().transform = Some(matrix);
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.state.lock().cursor = cursor;
    }
}

struct RecordedPrimitive {
    index: usize,
    state: Arc<Mutex<SceneState>>,
}

impl RecordedPrimitive {
    fn with_node(&self, f: impl FnOnce(&mut RecordedNode)) {
        if let Some(node) = self.state.lock().nodes.get_mut(self.index) {
            f(node);
        }
    }
}

impl Primitive for RecordedPrimitive {
    fn set_attr(&mut self, attr: Attr, value: AttrValue) {
        self.with_node(|node| {
            node.attrs.insert(attr, value);
        });
    }

    fn remove_attr(&mut self, attr: Attr) {
        self.with_node(|node| {
            node.attrs.remove(&attr);
        });
    }

    fn remove(&mut self) {
        self.with_node(|node| node.removed = true);
    }
}
