//! Unit tests for link routing.

use gridlink::{Leg, LinkPath, route};

#[test]
fn test_degenerate_pairs_route_straight() {
    for (x1, y1, x2, y2) in [
        (3.0, 1.0, 3.0, 8.0),
        (0.0, 4.0, 9.0, 4.0),
        (1.0, 1.0, 6.0, 6.0),
        (1.0, 6.0, 6.0, 1.0),
    ] {
        let path = route(x1, y1, x2, y2);
        assert!(path.is_straight(), "({x1},{y1}) -> ({x2},{y2})");
        assert!(path.legs().is_empty());
    }
}

#[test]
fn test_general_case_legs() {
    let path = route(0.0, 0.0, 5.0, 2.0);
    let lengths: Vec<f64> = path.legs().iter().map(Leg::length).collect();
    assert_eq!(lengths, [1.5, 2.0, 1.5]);
    assert_eq!(path.to_svg(), "M5,2h-1.5l-2,-2h-1.5");
}

#[test]
fn test_tall_case_uses_vertical_legs() {
    let path = route(1.0, 0.0, 2.0, 5.0);
    assert!(matches!(path.legs()[0], Leg::Vertical(_)));
    assert!(matches!(path.legs()[2], Leg::Vertical(_)));
    assert_eq!(path.vertices().first(), Some(&(2.0, 5.0)));
    assert_eq!(path.vertices().last(), Some(&(1.0, 0.0)));
}

#[test]
fn test_route_is_symmetric_over_grid() {
    let coords: Vec<f64> = (0..6).map(f64::from).collect();
    for &x1 in &coords {
        for &y1 in &coords {
            for &x2 in &coords {
                for &y2 in &coords {
                    let forward = route(x1, y1, x2, y2);
                    let backward = route(x2, y2, x1, y1);
                    assert!(
                        forward.same_shape(&backward),
                        "({x1},{y1}) <-> ({x2},{y2}): {} vs {}",
                        forward.to_svg(),
                        backward.to_svg()
                    );
                }
            }
        }
    }
}

#[test]
fn test_elbow_ends_at_both_endpoints() {
    let path = route(7.0, 2.0, 1.0, 6.0);
    let vertices = path.vertices();
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[0], (7.0, 2.0));
    let end = vertices[3];
    assert!((end.0 - 1.0).abs() < 1e-9 && (end.1 - 6.0).abs() < 1e-9);
}

#[test]
fn test_fractional_target_for_preview() {
    let path = route(2.0, 2.0, 4.6, 3.1);
    match path {
        LinkPath::Elbow { from, legs } => {
            assert_eq!(from, (4.6, 3.1));
            assert!(matches!(legs[1], Leg::Diagonal(dx, dy) if dx < 0.0 && dy < 0.0));
        }
        LinkPath::Straight { .. } => panic!("expected an elbow"),
    }
}
