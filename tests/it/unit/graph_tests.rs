//! Unit tests for the graph model and its scene primitives.

use gridlink::constants::{LINK_STROKE, POINT_RADIUS};
use gridlink::scene::{Attr, AttrValue};
use gridlink::{GraphModel, PointId, RecordingScene, route};

#[test]
fn test_point_creates_circle() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let point = graph.add_point(5, 5, &mut scene).unwrap().clone();

    assert_eq!((point.x, point.y, point.key), (5, 5, 110));
    let circles = scene.circles_with_radius(POINT_RADIUS);
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].attr(Attr::Cx), Some(&AttrValue::Number(5.0)));
}

#[test]
fn test_overwrite_replaces_point_and_primitive() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let first = graph.add_point(2, 3, &mut scene).unwrap().id;
    let second = graph.add_point(2, 3, &mut scene).unwrap().id;

    assert_ne!(first, second);
    assert_eq!(graph.point_count(), 1);
    assert!(graph.point_by_id(first).is_none());
    assert_eq!(graph.point_by_id(second).map(|p| p.key), Some(2 * 21 + 3));
    assert_eq!(scene.circles_with_radius(POINT_RADIUS).len(), 1);
}

#[test]
fn test_overwrite_leaves_links_dangling() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let a = graph.add_point(1, 1, &mut scene).unwrap().key;
    let b = graph.add_point(6, 2, &mut scene).unwrap().key;
    let link = graph.add_link(a, b, &mut scene).unwrap().unwrap().clone();
    assert!(graph.dangling_links().is_empty());

    let replaced = graph.add_point(6, 2, &mut scene).unwrap().clone();
    assert!(replaced.links.is_empty());
    assert_eq!(graph.dangling_links(), vec![&link]);
    assert_eq!(graph.point(a).unwrap().links, vec![link.id]);
}

#[test]
fn test_duplicate_links_are_kept() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let a = graph.add_point(0, 0, &mut scene).unwrap().key;
    let b = graph.add_point(3, 7, &mut scene).unwrap().key;

    let first = graph.add_link(a, b, &mut scene).unwrap().unwrap().id;
    let second = graph.add_link(b, a, &mut scene).unwrap().unwrap().id;

    assert_ne!(first, second);
    assert_eq!(graph.links().len(), 2);
    assert_eq!(graph.point(a).unwrap().links, vec![first, second]);
    assert_eq!(scene.paths_with_stroke(LINK_STROKE).len(), 2);
}

#[test]
fn test_link_path_is_routed_once() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let a = graph.add_point(0, 0, &mut scene).unwrap().key;
    let b = graph.add_point(5, 2, &mut scene).unwrap().key;
    let link = graph.add_link(a, b, &mut scene).unwrap().unwrap().clone();

    assert_eq!(link.start, PointId(0));
    assert_eq!(link.end, PointId(1));
    let paths = scene.paths_with_stroke(LINK_STROKE);
    assert_eq!(
        paths[0].attr(Attr::D).and_then(AttrValue::as_text),
        Some(route(0.0, 0.0, 5.0, 2.0).to_svg().as_str())
    );
}

#[test]
fn test_remove_link_detaches_primitive() {
    let mut scene = RecordingScene::new();
    let mut graph = GraphModel::new(21);
    let a = graph.add_point(0, 0, &mut scene).unwrap().key;
    let b = graph.add_point(0, 4, &mut scene).unwrap().key;
    let id = graph.add_link(a, b, &mut scene).unwrap().unwrap().id;

    let removed = graph.remove_link(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(graph.link(id).is_none());
    assert!(scene.paths_with_stroke(LINK_STROKE).is_empty());
}
