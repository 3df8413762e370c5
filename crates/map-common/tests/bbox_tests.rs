//! Tests for BoundingBox construction from geometries.

use map_common::{BoundingBox, Coordinate, Geometry};
use test_utils::assert_approx_eq;

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.min_y, -90.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.max_y, 90.0);
}

#[test]
fn test_bbox_from_linestring() {
    let g = Geometry::from_wkt("LINESTRING(151.2093 -33.8688, 144.9631 -37.8136)").unwrap();
    let bbox = g.bounding_box();
    assert_approx_eq!(bbox.width(), 6.2462, 1e-9);
    assert_approx_eq!(bbox.height(), 3.9448, 1e-9);
}

#[test]
fn test_bbox_from_polygon_rings() {
    let g = Geometry::from_wkt(
        "POLYGON((153.0 -28.0, 150.0 -37.0, 145.0 -35.0, 148.0 -25.0, 153.0 -28.0))",
    )
    .unwrap();
    let bbox = g.bounding_box();
    assert_eq!(bbox, BoundingBox::new(145.0, -37.0, 153.0, -25.0));
}

#[test]
fn test_bbox_antimeridian_polygon_spans_globe() {
    // The fold is over raw longitudes: a ring straddling ±180 spans 340°.
    let g = Geometry::from_wkt("POLYGON((170 -10,-170 -10,-170 10,170 10,170 -10))").unwrap();
    let bbox = g.bounding_box();
    assert_eq!(bbox.width(), 340.0);
    assert_eq!(bbox.center(), Coordinate::new(0.0, 0.0));
}

// ============================================================================
// Dimension tests (width/height)
// ============================================================================

#[test]
fn test_bbox_width_negative_coords() {
    let bbox = BoundingBox::new(-120.0, 30.0, -80.0, 50.0);
    assert_eq!(bbox.width(), 40.0);
}

#[test]
fn test_bbox_width_crossing_zero() {
    let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0);
    assert_eq!(bbox.width(), 20.0);
    assert_eq!(bbox.height(), 10.0);
}

#[test]
fn test_bbox_zero_dimensions() {
    let g = Geometry::from_wkt("POINT(15.6455 78.2232)").unwrap();
    let bbox = g.bounding_box();
    assert_eq!(bbox.width(), 0.0);
    assert_eq!(bbox.height(), 0.0);
    assert!(bbox.is_degenerate());
}

#[test]
fn test_bbox_contains_point() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(bbox.contains_point(5.0, 5.0));
    assert!(bbox.contains_point(10.0, 0.0));
    assert!(!bbox.contains_point(10.1, 5.0));
}
