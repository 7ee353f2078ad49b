//! The editor session.
//!
//! `Editor` owns the graph, the view transform, input tracking and the scene
//! handles for one mounted grid. The host feeds it `HostEvent`s through
//! `handle_event` and calls `run_frame` whenever a requested frame fires; the
//! per-frame stages live in the `input` module.
//!
//! ```ignore
//! let scene = RecordingScene::with_viewport(Viewport::new(0.0, 0.0, 210.0, 210.0));
//! let mut editor = EditorBuilder::new(scene)
//!     .listener(|action| println!("{action:?}"))
//!     .build()?;
//! editor.handle_event(HostEvent::pointer_move(55.0, 55.0));
//! editor.run_frame();
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::{EditorConfig, KeyAction, KeyBindings};
use crate::constants::{
    GRID_DOT_FILL, GRID_DOT_RADIUS, HOVER_MARKER_RADIUS, HOVER_MARKER_STROKE,
    HOVER_MARKER_STROKE_WIDTH, LINK_PREVIEW_STROKE, LINK_STROKE_WIDTH,
};
use crate::error::{EditorError, EditorResult};
use crate::graph::{Action, GraphModel, Link, LinkId, Listener, Point};
use crate::host::{FrameEvent, HostEvent};
use crate::input::coords::{CoordinateContext, CoordinateConverter, GridCell, ScreenPos, Viewport};
use crate::input::state::HoverState;
use crate::input::transform::ViewTransform;
use crate::input::{InputName, InputTracker, InteractionMode};
use crate::perf::FrameMonitor;
use crate::routing::route;
use crate::scene::{Attr, AttrValue, CursorStyle, Layer, Primitive, PrimitiveKind, Scene};
use crate::scheduler::{FrameHost, ManualFrameHost, UpdateScheduler};
use std::collections::HashSet;
use tracing::{debug, info};

/// Primitives drawn on top of the graph
pub(crate) struct Overlay {
    /// Ring around the hovered point
    pub hover_marker: Box<dyn Primitive>,
    /// Path from the selected point to the pointer
    pub link_preview: Box<dyn Primitive>,
}

pub struct Editor {
    pub(crate) grid_size: u32,
    pub(crate) keys: KeyBindings,
    pub(crate) graph: GraphModel,
    pub(crate) view: ViewTransform,
    pub(crate) tracker: InputTracker,
    pub(crate) mode: InteractionMode,
    pub(crate) hover: HoverState,
    /// Last pointer position reported by the host
    pub(crate) pointer: ScreenPos,
    pub(crate) viewport: Viewport,
    /// One-shot events waiting for the next frame
    pub(crate) pending: HashSet<FrameEvent>,
    /// Wheel deltas waiting for the next frame
    pub(crate) wheel_steps: Vec<f64>,
    pub(crate) scheduler: UpdateScheduler,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) scene: Box<dyn Scene>,
    pub(crate) overlay: Overlay,
    pub(crate) monitor: FrameMonitor,
    /// Grid dots, kept alive for the lifetime of the session
    _grid_dots: Vec<Box<dyn Primitive>>,
    cursor: CursorStyle,
    listener: Option<Listener>,
}

/// Builder for `Editor`.
///
/// Without a frame host the editor uses a `ManualFrameHost` it keeps to
/// itself; the caller then drives frames by calling `run_frame` directly.
pub struct EditorBuilder {
    scene: Box<dyn Scene>,
    config: EditorConfig,
    listener: Option<Listener>,
    frame_host: Option<Box<dyn FrameHost>>,
    clock: Option<Box<dyn Clock>>,
}

impl EditorBuilder {
    pub fn new(scene: impl Scene + 'static) -> Self {
        Self {
            scene: Box::new(scene),
            config: EditorConfig::default(),
            listener: None,
            frame_host: None,
            clock: None,
        }
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn listener(mut self, listener: impl FnMut(&Action) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn frame_host(mut self, host: impl FrameHost + 'static) -> Self {
        self.frame_host = Some(Box::new(host));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Mount the editor: draw the grid, create the overlays and request the
    /// first frame.
    pub fn build(self) -> EditorResult<Editor> {
        self.config.validate()?;
        let Self {
            mut scene,
            config,
            listener,
            frame_host,
            clock,
        } = self;

        let viewport = scene
            .viewport()
            .filter(Viewport::is_usable)
            .ok_or(EditorError::UnusableMount)?;

        let size = config.size;
        let extent = f64::from(size);
        scene.set_view_box([-0.5, -0.5, extent, extent]);

        let grid_dots = (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .map(|(x, y)| {
                let mut dot = scene.create(PrimitiveKind::Circle, Layer::Front);
                dot.set_attr(Attr::Cx, AttrValue::from(f64::from(x)));
                dot.set_attr(Attr::Cy, AttrValue::from(f64::from(y)));
                dot.set_attr(Attr::R, AttrValue::from(GRID_DOT_RADIUS));
                dot.set_attr(Attr::Fill, AttrValue::from(GRID_DOT_FILL));
                dot
            })
            .collect();

        let center = f64::from(size / 2);
        let mut hover_marker = scene.create(PrimitiveKind::Circle, Layer::Front);
        hover_marker.set_attr(Attr::Cx, AttrValue::from(center));
        hover_marker.set_attr(Attr::Cy, AttrValue::from(center));
        hover_marker.set_attr(Attr::R, AttrValue::from(HOVER_MARKER_RADIUS));
        hover_marker.set_attr(Attr::Fill, AttrValue::from("transparent"));
        hover_marker.set_attr(Attr::Stroke, AttrValue::from(HOVER_MARKER_STROKE));
        hover_marker.set_attr(Attr::StrokeWidth, AttrValue::from(HOVER_MARKER_STROKE_WIDTH));
        hover_marker.set_visible(false);

        let mut link_preview = scene.create(PrimitiveKind::Path, Layer::Front);
        link_preview.set_attr(Attr::Fill, AttrValue::from("none"));
        link_preview.set_attr(Attr::Stroke, AttrValue::from(LINK_PREVIEW_STROKE));
        link_preview.set_attr(Attr::StrokeLinecap, AttrValue::from("round"));
        link_preview.set_attr(Attr::StrokeWidth, AttrValue::from(LINK_STROKE_WIDTH));
        link_preview.set_visible(false);

        let host = frame_host.unwrap_or_else(|| Box::new(ManualFrameHost::new()));
        let mut editor = Editor {
            grid_size: size,
            keys: config.keys,
            graph: GraphModel::new(size),
            view: ViewTransform::default(),
            tracker: InputTracker::new(),
            mode: InteractionMode::default(),
            hover: HoverState::centered(size),
            pointer: ScreenPos::default(),
            viewport,
            pending: HashSet::new(),
            wheel_steps: Vec::new(),
            scheduler: UpdateScheduler::new(host),
            clock: clock.unwrap_or_else(|| Box::new(SystemClock::default())),
            scene,
            overlay: Overlay {
                hover_marker,
                link_preview,
            },
            monitor: FrameMonitor::new(),
            _grid_dots: grid_dots,
            cursor: CursorStyle::Default,
            listener,
        };

        info!(size, width = viewport.width, height = viewport.height, "Editor mounted");
        editor.schedule(Some(FrameEvent::Init));
        Ok(editor)
    }
}

impl Editor {
    /// Record a host event and request a frame.
    ///
    /// Nothing visible changes here; the next `run_frame` acts on it.
    pub fn handle_event(&mut self, event: HostEvent) {
        if self.scheduler.is_disposed() {
            return;
        }
        let now = self.clock.now_ms();

        match event {
            HostEvent::PointerMove { position } => {
                self.pointer = position;
                self.schedule(Some(FrameEvent::PointerMove));
            }
            HostEvent::PointerDown { position, button } => {
                self.pointer = position;
                self.tracker.press(InputName::Click(button), now);
                self.schedule(Some(FrameEvent::PointerMove));
            }
            HostEvent::PointerUp { position, button } => {
                self.pointer = position;
                self.tracker.release(&InputName::Click(button));
                self.schedule(Some(FrameEvent::PointerMove));
            }
            HostEvent::Wheel { delta_y } => {
                if delta_y != 0.0 && delta_y.is_finite() {
                    self.wheel_steps.push(delta_y);
                    self.schedule(None);
                }
            }
            HostEvent::KeyDown { key } => {
                if self.tracker.press(InputName::Key(key), now) {
                    self.schedule(None);
                }
            }
            HostEvent::KeyUp { key } => {
                if self.tracker.release(&InputName::Key(key)) {
                    self.schedule(None);
                }
            }
            HostEvent::Resize | HostEvent::Scroll => self.schedule(Some(FrameEvent::Resize)),
            HostEvent::Blur => self.schedule(Some(FrameEvent::Blur)),
        }
    }

    fn schedule(&mut self, event: Option<FrameEvent>) {
        if let Some(event) = event {
            self.pending.insert(event);
        }
        self.scheduler.request();
    }

    /// Detach from the host: cancel the pending frame and ignore everything
    /// that arrives afterwards. Idempotent.
    pub fn dispose(&mut self) {
        if self.scheduler.is_disposed() {
            return;
        }
        self.scheduler.dispose();
        self.pending.clear();
        self.wheel_steps.clear();
        info!(
            points = self.graph.point_count(),
            links = self.graph.links().len(),
            frames = self.monitor.total_frames(),
            "Editor disposed"
        );
    }

    /// Place a point at cell `(x, y)` and notify the listener.
    pub fn add_point(&mut self, x: i64, y: i64) -> EditorResult<Point> {
        let point = self.graph.add_point(x, y, &mut *self.scene)?.clone();
        self.dispatch(Action::AddPoint(point.clone()));
        Ok(point)
    }

    /// Link the points stored under two cell keys and notify the listener.
    ///
    /// Returns `Ok(None)` when both keys name the same point.
    pub fn add_link(&mut self, start: u32, end: u32) -> EditorResult<Option<Link>> {
        let Some(link) = self.graph.add_link(start, end, &mut *self.scene)?.cloned() else {
            return Ok(None);
        };
        let endpoints = self
            .graph
            .point(start)
            .cloned()
            .zip(self.graph.point(end).cloned());
        if let Some((start, end)) = endpoints {
            self.dispatch(Action::AddLink { start, end });
        }
        Ok(Some(link))
    }

    /// Delete a link and notify the listener.
    pub fn remove_link(&mut self, id: LinkId) -> EditorResult<Link> {
        let link = self.graph.remove_link(id)?;
        self.dispatch(Action::RemoveLink(link.clone()));
        Ok(link)
    }

    fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatching action");
        if let Some(listener) = self.listener.as_mut() {
            listener(&action);
        }
    }

    // ========================================================================
    // Rendering helpers used by the frame stages
    // ========================================================================

    /// Push the group transform, including an in-progress drag
    pub(crate) fn apply_transform(&mut self) {
        let drag = self
            .mode
            .drag_origin()
            .map(|origin| {
                CoordinateConverter::delta_screen_to_view(
                    origin,
                    self.pointer,
                    &self.viewport,
                    self.grid_size,
                )
            })
            .unwrap_or((0.0, 0.0));
        self.scene.set_transform(self.view.matrix(drag));
    }

    /// Update the link preview and hover marker
    pub(crate) fn draw_selection(&mut self) {
        let hovered = self.hover.hovered_cell();

        let selected = self
            .mode
            .selected()
            .and_then(|key| self.graph.point(key))
            .map(|point| (f64::from(point.x), f64::from(point.y)));
        match selected {
            Some((sx, sy)) => {
                let (tx, ty) = match hovered {
                    Some(cell) => (cell.x as f64, cell.y as f64),
                    None => self.hover.grid,
                };
                let preview = &mut self.overlay.link_preview;
                preview.set_attr(Attr::D, AttrValue::from(route(sx, sy, tx, ty).to_svg()));
                preview.set_visible(true);
            }
            None => self.overlay.link_preview.set_visible(false),
        }

        let marker = &mut self.overlay.hover_marker;
        match hovered {
            Some(cell) => {
                marker.set_attr(Attr::Cx, AttrValue::from(cell.x as f64));
                marker.set_attr(Attr::Cy, AttrValue::from(cell.y as f64));
                marker.set_visible(true);
            }
            None => marker.set_visible(false),
        }
    }

    /// Set the cursor from the drag state and the grab key
    pub(crate) fn refresh_cursor(&mut self) {
        let cursor = if self.mode.is_dragging() {
            CursorStyle::Grabbing
        } else if self.tracker.is_active(&self.keys.input(KeyAction::Grab)) {
            CursorStyle::Grab
        } else {
            CursorStyle::Default
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            self.scene.set_cursor(cursor);
        }
    }

    /// Fractional grid position under a screen position
    pub fn screen_to_grid(&self, pos: ScreenPos) -> (f64, f64) {
        let ctx = CoordinateContext::new(&self.view, &self.viewport, self.grid_size);
        CoordinateConverter::screen_to_grid(pos, &ctx)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Key of the selected point
    pub fn selected(&self) -> Option<u32> {
        self.mode.selected()
    }

    /// The point under the pointer, as of the last frame
    pub fn hovered_point(&self) -> Option<&Point> {
        self.hover.point.and_then(|key| self.graph.point(key))
    }

    /// Nearest cell to the pointer, as of the last frame
    pub fn pointer_cell(&self) -> Option<GridCell> {
        self.hover.cell
    }

    /// Fractional grid position of the pointer, as of the last frame
    pub fn pointer_grid(&self) -> (f64, f64) {
        self.hover.grid
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn monitor(&self) -> &FrameMonitor {
        &self.monitor
    }

    pub fn frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn is_disposed(&self) -> bool {
        self.scheduler.is_disposed()
    }
}
