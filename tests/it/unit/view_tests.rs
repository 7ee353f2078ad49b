//! Unit tests for the pan/zoom transform and coordinate conversion.

use crate::helpers::assert_close;
use gridlink::input::coords::{CoordinateContext, CoordinateConverter};
use gridlink::{GridCell, ScreenPos, ViewTransform, Viewport, is_near};

fn viewport() -> Viewport {
    Viewport::new(100.0, 50.0, 420.0, 210.0)
}

#[test]
fn test_snap_band() {
    for n in [3.0, 3.25, 3.75, 0.1, -0.2] {
        assert!(is_near(n), "{n} should snap");
    }
    for n in [3.3, 3.7, 3.5, 0.31] {
        assert!(!is_near(n), "{n} should not snap");
    }
}

#[test]
fn test_nearest_cell_rounds() {
    assert_eq!(GridCell::nearest((2.4, 2.6)), GridCell::new(2, 3));
    assert_eq!(GridCell::nearest((-0.6, 0.0)), GridCell::new(-1, 0));
}

#[test]
fn test_screen_to_view_centers_cells() {
    let view = ViewTransform::default();
    let vp = viewport();
    let ctx = CoordinateContext::new(&view, &vp, 21);

    // Cell 0 spans the first 20 x-pixels and the first 10 y-pixels
    let (x, y) = CoordinateConverter::screen_to_view(ScreenPos::new(110.0, 55.0), &ctx);
    assert_close(x, 0.0);
    assert_close(y, 0.0);
}

#[test]
fn test_screen_grid_round_trip_under_transform() {
    let mut view = ViewTransform::default();
    view.zoom_at(1.7, (4.0, 9.0));
    view.fold_drag((2.5, -1.25));
    let vp = viewport();
    let ctx = CoordinateContext::new(&view, &vp, 21);

    let grid = (6.0, 13.0);
    let screen = CoordinateConverter::grid_to_screen(grid, &ctx);
    let back = CoordinateConverter::screen_to_grid(screen, &ctx);
    assert_close(back.0, grid.0);
    assert_close(back.1, grid.1);
}

#[test]
fn test_drag_delta_scales_by_viewport() {
    let delta = CoordinateConverter::delta_screen_to_view(
        ScreenPos::new(0.0, 0.0),
        ScreenPos::new(40.0, -20.0),
        &viewport(),
        21,
    );
    assert_close(delta.0, 2.0);
    assert_close(delta.1, -2.0);
}

#[test]
fn test_zoom_keeps_anchor_fixed() {
    let anchor = (7.25, 3.5);
    let mut view = ViewTransform::default();
    view.fold_drag((1.5, -2.0));
    let before = view.view_to_grid(anchor);

    assert!(view.zoom_in_precise(anchor));
    assert!(view.zoom_in_coarse(anchor));
    assert!(view.zoom_out_precise(anchor));
    assert!(view.zoom_wheel(-3.0, anchor));

    let after = view.view_to_grid(anchor);
    assert_close(after.0, before.0);
    assert_close(after.1, before.1);
}

#[test]
fn test_coarse_zoom_steps_through_powers_of_two() {
    let mut view = ViewTransform::default();
    view.zoom_in_coarse((0.0, 0.0));
    assert_eq!(view.scale(), 2.0);
    view.zoom_in_coarse((0.0, 0.0));
    assert_eq!(view.scale(), 4.0);
    view.zoom_out_coarse((0.0, 0.0));
    assert_eq!(view.scale(), 2.0);

    // Off a power of two, coarse steps snap onto one
    view.zoom_in_precise((0.0, 0.0));
    view.zoom_in_coarse((0.0, 0.0));
    assert_eq!(view.scale(), 4.0);
    view.zoom_in_precise((0.0, 0.0));
    view.zoom_out_coarse((0.0, 0.0));
    assert_eq!(view.scale(), 4.0);
}

#[test]
fn test_wheel_step_is_a_twentieth() {
    let mut view = ViewTransform::default();
    view.zoom_wheel(120.0, (0.0, 0.0));
    assert_close(view.scale(), 1.05);
    view.zoom_wheel(-1.0, (0.0, 0.0));
    assert_close(view.scale(), 1.05 * 0.95);
    assert!(!view.zoom_wheel(0.0, (0.0, 0.0)));
}

#[test]
fn test_invalid_zoom_is_rejected() {
    let mut view = ViewTransform::default();
    assert!(!view.zoom_at(0.0, (1.0, 1.0)));
    assert!(!view.zoom_at(-2.0, (1.0, 1.0)));
    assert!(!view.zoom_at(f64::NAN, (1.0, 1.0)));
    assert!(!view.zoom_at(f64::INFINITY, (1.0, 1.0)));
    assert_eq!(view, ViewTransform::default());
}

#[test]
fn test_matrix_includes_drag() {
    let mut view = ViewTransform::default();
    view.zoom_at(2.0, (0.0, 0.0));
    view.fold_drag((1.0, 2.0));
    assert_eq!(view.matrix((0.5, -0.5)), [2.0, 0.0, 0.0, 2.0, 1.5, 1.5]);
}
