//! Point creation and hover workflow tests.

use crate::helpers::{TestEditorBuilder, action_kind, cell_center};
use gridlink::constants::{HOVER_MARKER_RADIUS, POINT_RADIUS};
use gridlink::scene::{Attr, AttrValue};
use gridlink::{Action, GridCell, MouseButton};

#[test]
fn test_secondary_click_creates_point() {
    let mut t = TestEditorBuilder::new().build();
    t.click_cell(5, 5, MouseButton::Secondary);

    let actions = t.take_actions();
    assert_eq!(actions.len(), 1);
    let Action::AddPoint(point) = &actions[0] else {
        panic!("expected ADD_POINT, got {actions:?}");
    };
    assert_eq!((point.x, point.y, point.key), (5, 5, 110));
    assert!(point.links.is_empty());
    assert_eq!(t.scene.circles_with_radius(POINT_RADIUS).len(), 1);
}

#[test]
fn test_secondary_click_on_hovered_point_is_ignored() {
    let mut t = TestEditorBuilder::new().with_point(5, 5).build();
    t.click_cell(5, 5, MouseButton::Secondary);

    assert!(t.actions().is_empty());
    assert_eq!(t.editor.graph().point_count(), 1);
}

#[test]
fn test_secondary_click_off_band_keeps_occupied_cell() {
    let mut t = TestEditorBuilder::new().with_point(5, 5).build();
    let original = t.editor.graph().point(110).unwrap().id;

    // 0.4 cells off center: nearest cell is (5, 5) but outside the hover band
    t.move_to(cell_center(5) + 4.0, cell_center(5));
    assert!(t.editor.hovered_point().is_none());
    assert_eq!(t.editor.pointer_cell(), Some(GridCell::new(5, 5)));
    t.click(MouseButton::Secondary);

    assert!(t.actions().is_empty());
    assert_eq!(t.editor.graph().point(110).unwrap().id, original);
    assert_eq!(t.scene.circles_with_radius(POINT_RADIUS).len(), 1);
}

#[test]
fn test_secondary_click_off_band_on_empty_cell_is_ignored() {
    let mut t = TestEditorBuilder::new().build();

    t.move_to(cell_center(5) + 4.0, cell_center(5));
    t.click(MouseButton::Secondary);
    assert!(t.actions().is_empty());
    assert_eq!(t.editor.graph().point_count(), 0);

    // Back inside the band the same cell accepts a point
    t.move_to(cell_center(5) + 2.0, cell_center(5));
    t.click(MouseButton::Secondary);
    assert_eq!(t.take_actions().iter().map(action_kind).collect::<Vec<_>>(), ["ADD_POINT"]);
}

#[test]
fn test_secondary_click_outside_grid_is_ignored() {
    let mut t = TestEditorBuilder::new().with_size(5).build();
    t.move_to(-15.0, 25.0);
    assert_eq!(t.editor.pointer_cell(), Some(GridCell::new(-2, 2)));

    t.click(MouseButton::Secondary);
    assert!(t.actions().is_empty());
}

#[test]
fn test_secondary_click_before_any_move_is_ignored() {
    let mut t = TestEditorBuilder::new().build();
    t.click(MouseButton::Secondary);
    assert!(t.actions().is_empty());
}

#[test]
fn test_hover_band_edges() {
    let mut t = TestEditorBuilder::new().with_point(4, 4).build();

    // 0.25 cells off: hovered
    t.move_to(cell_center(4) + 2.5, cell_center(4) - 2.5);
    assert_eq!(t.editor.hovered_point().map(|p| p.key), Some(4 * 21 + 4));

    // 0.3 cells off: not hovered
    t.move_to(cell_center(4) + 3.0, cell_center(4));
    assert!(t.editor.hovered_point().is_none());
    assert_eq!(t.editor.pointer_cell(), Some(GridCell::new(4, 4)));
}

#[test]
fn test_hover_marker_follows_hovered_point() {
    let mut t = TestEditorBuilder::new().with_point(3, 8).build();
    let scene = t.scene.clone();
    let marker = || scene.circles_with_radius(HOVER_MARKER_RADIUS).remove(0);
    assert!(!marker().is_visible());

    t.move_to_cell(3, 8);
    let shown = marker();
    assert!(shown.is_visible());
    assert_eq!(shown.attr(Attr::Cx), Some(&AttrValue::Number(3.0)));
    assert_eq!(shown.attr(Attr::Cy), Some(&AttrValue::Number(8.0)));

    t.move_to_cell(9, 9);
    assert!(!marker().is_visible());
}
