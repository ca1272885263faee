//! Validates polygon primitives and rectangle clipping behavior

use tessellate::geometry::{Bounds, Point, Polygon};

#[test]
fn test_polygon_area_and_edges() {
    let square = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 2.0),
    ]);
    assert!((square.area() - 4.0).abs() < 1e-12);
    assert_eq!(square.vertex_count(), 4);

    let edges: Vec<_> = square.edges().collect();
    assert_eq!(edges.len(), 4);
    let (last_from, last_to) = edges.last().copied().expect("square has edges");
    assert_eq!(last_from, Point::new(0.0, 2.0));
    assert_eq!(last_to, Point::new(0.0, 0.0), "closing edge returns to start");

    let triangle = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ]);
    assert!((triangle.area() - 6.0).abs() < 1e-12);
}

#[test]
fn test_clip_keeps_contained_polygon_unchanged() {
    let bounds = Bounds::new(10.0, 10.0);
    let inner = Polygon::new(vec![
        Point::new(2.0, 2.0),
        Point::new(8.0, 2.0),
        Point::new(8.0, 8.0),
        Point::new(2.0, 8.0),
    ]);

    let clipped = bounds.clip(&inner).expect("contained polygon survives");
    assert_eq!(clipped.vertices(), inner.vertices());
}

#[test]
fn test_clip_cuts_straddling_polygon_to_bounds() {
    let bounds = Bounds::new(10.0, 10.0);
    let straddling = Polygon::new(vec![
        Point::new(5.0, -5.0),
        Point::new(15.0, -5.0),
        Point::new(15.0, 5.0),
        Point::new(5.0, 5.0),
    ]);

    let clipped = bounds.clip(&straddling).expect("overlap is non-empty");
    assert!((clipped.area() - 25.0).abs() < 1e-9);
    for vertex in clipped.vertices() {
        assert!(bounds.contains(*vertex), "clipped vertex {vertex:?} inside");
    }
}

#[test]
fn test_clip_discards_outside_and_degenerate_polygons() {
    let bounds = Bounds::new(10.0, 10.0);

    let outside = Polygon::new(vec![
        Point::new(20.0, 20.0),
        Point::new(30.0, 20.0),
        Point::new(30.0, 30.0),
    ]);
    assert!(bounds.clip(&outside).is_none());

    // Touches the boundary in a single point only
    let touching = Polygon::new(vec![
        Point::new(10.0, 5.0),
        Point::new(15.0, 0.0),
        Point::new(15.0, 10.0),
    ]);
    assert!(bounds.clip(&touching).is_none());
}

#[test]
fn test_clip_tolerances_follow_polygon_extent() {
    // Cells expressed in very small plane units must survive clipping just
    // like print-sized ones
    let bounds = Bounds::new(1e-6, 1e-6);
    let cell = Polygon::new(vec![
        Point::new(1e-8, 1e-8),
        Point::new(3e-8, 1e-8),
        Point::new(3e-8, 3e-8),
        Point::new(1e-8, 3e-8),
    ]);

    let clipped = bounds.clip(&cell).expect("tiny cell survives clipping");
    assert_eq!(clipped.vertices(), cell.vertices());
    assert!((clipped.area() - 4e-16).abs() < 1e-20);
}

#[test]
fn test_bounds_contains_is_boundary_inclusive() {
    let bounds = Bounds::new(4.0, 3.0);
    assert!(bounds.contains(Point::new(0.0, 0.0)));
    assert!(bounds.contains(Point::new(4.0, 3.0)));
    assert!(!bounds.contains(Point::new(4.1, 1.0)));
    assert!(!bounds.contains(Point::new(1.0, -0.1)));
    assert!((bounds.area() - 12.0).abs() < f64::EPSILON);
}
