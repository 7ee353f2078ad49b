//! Point/link data and their scene primitives.
//!
//! Points are indexed by their cell key (`x * size + y`). Links refer to
//! points by `PointId`, which is fresh for every point created, so a link made
//! before its endpoint cell was overwritten keeps pointing at the old point.
//! `dangling_links` reports those.

use crate::constants::{LINK_STROKE, LINK_STROKE_WIDTH, POINT_FILL, POINT_RADIUS};
use crate::error::{EditorError, EditorResult};
use crate::routing::route;
use crate::scene::{Attr, AttrValue, Layer, Primitive, PrimitiveKind, Scene};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LinkId(pub u64);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub id: PointId,
    pub x: u32,
    pub y: u32,
    pub key: u32,
    /// Links touching this point
    pub links: Vec<LinkId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub id: LinkId,
    pub start: PointId,
    pub end: PointId,
}

/// Notification dispatched to the editor's listener.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddPoint(Point),
    AddLink { start: Point, end: Point },
    RemoveLink(Link),
}

/// Listener receiving every dispatched `Action`
pub type Listener = Box<dyn FnMut(&Action)>;

pub struct GraphModel {
    size: u32,
    points: HashMap<u32, Point>,
    /// Live point ids to their cell key
    point_keys: HashMap<PointId, u32>,
    links: Vec<Link>,
    point_handles: HashMap<u32, Box<dyn Primitive>>,
    link_handles: HashMap<LinkId, Box<dyn Primitive>>,
    next_point_id: u64,
    next_link_id: u64,
}

impl fmt::Debug for GraphModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphModel")
            .field("size", &self.size)
            .field("points", &self.points.len())
            .field("links", &self.links.len())
            .finish()
    }
}

impl GraphModel {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            points: HashMap::new(),
            point_keys: HashMap::new(),
            links: Vec::new(),
            point_handles: HashMap::new(),
            link_handles: HashMap::new(),
            next_point_id: 0,
            next_link_id: 0,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Key of cell `(x, y)`, rejecting cells outside the grid
    pub fn key_for(&self, x: i64, y: i64) -> EditorResult<u32> {
        let size = i64::from(self.size);
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return Err(EditorError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok((x * size + y) as u32)
    }

    pub fn point(&self, key: u32) -> Option<&Point> {
        self.points.get(&key)
    }

    pub fn point_at(&self, x: i64, y: i64) -> Option<&Point> {
        self.key_for(x, y).ok().and_then(|key| self.point(key))
    }

    pub fn point_by_id(&self, id: PointId) -> Option<&Point> {
        self.point_keys.get(&id).and_then(|key| self.points.get(key))
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }

    /// Links with an endpoint that no longer exists (its cell was overwritten)
    pub fn dangling_links(&self) -> Vec<&Link> {
        self.links
            .iter()
            .filter(|link| {
                !self.point_keys.contains_key(&link.start) || !self.point_keys.contains_key(&link.end)
            })
            .collect()
    }

    /// Create a point at `(x, y)`.
    ///
    /// An existing point in that cell is replaced by a new one with an empty
    /// link list; links to the old point are left dangling.
    pub fn add_point(&mut self, x: i64, y: i64, scene: &mut dyn Scene) -> EditorResult<&Point> {
        let key = self.key_for(x, y)?;

        if let Some(old) = self.points.remove(&key) {
            tracing::warn!(key, old_id = old.id.0, links = old.links.len(), "Overwriting occupied cell");
            self.point_keys.remove(&old.id);
            if let Some(mut handle) = self.point_handles.remove(&key) {
                handle.remove();
            }
        }

        let mut handle = scene.create(PrimitiveKind::Circle, Layer::Back);
        handle.set_attr(Attr::Cx, AttrValue::from(x as f64));
        handle.set_attr(Attr::Cy, AttrValue::from(y as f64));
        handle.set_attr(Attr::R, AttrValue::from(POINT_RADIUS));
        handle.set_attr(Attr::Fill, AttrValue::from(POINT_FILL));
        self.point_handles.insert(key, handle);

        let id = PointId(self.next_point_id);
        self.next_point_id += 1;
        self.point_keys.insert(id, key);
        tracing::debug!(x, y, key, id = id.0, "Point added");

        Ok(self.points.entry(key).or_insert(Point {
            id,
            x: x as u32,
            y: y as u32,
            key,
            links: Vec::new(),
        }))
    }

    /// Link the points stored under `start` and `end`.
    ///
    /// Returns `Ok(None)` for a self link. Duplicate links are allowed.
    pub fn add_link(&mut self, start: u32, end: u32, scene: &mut dyn Scene) -> EditorResult<Option<&Link>> {
        if start == end {
            tracing::trace!(key = start, "Ignoring self link");
            return Ok(None);
        }
        let (start_id, sx, sy) = self
            .point(start)
            .map(|p| (p.id, p.x, p.y))
            .ok_or(EditorError::UnknownPoint(start))?;
        let (end_id, ex, ey) = self
            .point(end)
            .map(|p| (p.id, p.x, p.y))
            .ok_or(EditorError::UnknownPoint(end))?;

        let id = LinkId(self.next_link_id);
        self.next_link_id += 1;

        let mut handle = scene.create(PrimitiveKind::Path, Layer::Front);
        handle.set_attr(Attr::Fill, AttrValue::from("none"));
        handle.set_attr(Attr::Stroke, AttrValue::from(LINK_STROKE));
        handle.set_attr(Attr::StrokeLinecap, AttrValue::from("round"));
        handle.set_attr(Attr::StrokeWidth, AttrValue::from(LINK_STROKE_WIDTH));
        handle.set_attr(
            Attr::D,
            AttrValue::from(route(f64::from(sx), f64::from(sy), f64::from(ex), f64::from(ey)).to_svg()),
        );
        self.link_handles.insert(id, handle);

        for key in [start, end] {
            if let Some(point) = self.points.get_mut(&key) {
                point.links.push(id);
            }
        }
        tracing::debug!(link = %id, start, end, "Link added");

        self.links.push(Link {
            id,
            start: start_id,
            end: end_id,
        });
        Ok(self.links.last())
    }

    /// Delete a link and its primitive.
    pub fn remove_link(&mut self, id: LinkId) -> EditorResult<Link> {
        let index = self
            .links
            .iter()
            .position(|link| link.id == id)
            .ok_or(EditorError::UnknownLink(id))?;
        let link = self.links.remove(index);

        if let Some(mut handle) = self.link_handles.remove(&id) {
            handle.remove();
        }
        for point_id in [link.start, link.end] {
            if let Some(key) = self.point_keys.get(&point_id)
                && let Some(point) = self.points.get_mut(key)
            {
                point.links.retain(|&l| l != id);
            }
        }
        tracing::debug!(link = %id, "Link removed");
        Ok(link)
    }
}
