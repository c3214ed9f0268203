use super::*;
use nalgebra::vector;

fn l_shape() -> Polygon {
    Polygon::from_coords(&[
        [0.0, 0.0],
        [2.0, 0.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
    ])
    .unwrap()
}

#[test]
fn polygon_needs_three_points() {
    assert_eq!(
        Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0]]),
        Err(crate::GeomError::InvalidPolygon { len: 2 })
    );
    assert!(Polygon::new(Vec::new()).is_err());
}

#[test]
fn shoelace_area_and_winding() {
    let l = l_shape();
    assert_eq!(l.signed_area(), 3.0);
    assert!(l.is_ccw());
    let r = l.reversed();
    assert_eq!(r.signed_area(), -3.0);
    assert!(!r.is_ccw());
    assert_eq!(r.area(), 3.0);
}

#[test]
fn even_odd_containment_on_concave_outline() {
    let l = l_shape();
    assert!(l.contains(vector![0.5, 0.5]));
    assert!(l.contains(vector![0.5, 1.5]));
    assert!(l.contains(vector![1.5, 0.5]));
    // The notch of the L.
    assert!(!l.contains(vector![1.5, 1.5]));
    assert!(!l.contains(vector![-0.5, 0.5]));
}

#[test]
fn bounding_box_spans_outline() {
    let bb = l_shape().bounding_box();
    assert_eq!(bb.min, vector![0.0, 0.0]);
    assert_eq!(bb.max, vector![2.0, 2.0]);
    assert_eq!(bb.width(), 2.0);
    assert_eq!(bb.height(), 2.0);
}

#[test]
fn rect_intersection_is_strict() {
    let a = Rect::from_points(&[vector![0.0, 0.0], vector![1.0, 1.0]]);
    let touching = Rect::from_points(&[vector![1.0, 0.0], vector![2.0, 1.0]]);
    let overlapping = Rect::from_points(&[vector![0.5, 0.5], vector![2.0, 2.0]]);
    let flat = Rect::from_points(&[vector![0.5, -1.0], vector![0.5, 2.0]]);
    assert!(!a.intersects(&touching));
    assert!(a.intersects(&overlapping));
    assert!(overlapping.intersects(&a));
    assert!(flat.is_empty());
    assert!(!a.intersects(&flat));
    assert!(Rect::from_points(&[]).is_empty());
}

#[test]
fn triangle_containment_is_closed() {
    let t = Triangle::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
    assert_eq!(t.signed_area(), 8.0);
    assert!(t.contains_closed(vector![1.0, 1.0]));
    assert!(t.contains_closed(vector![2.0, 0.0]));
    assert!(t.contains_closed(vector![2.0, 2.0]));
    assert!(!t.contains_closed(vector![3.0, 3.0]));
    // Winding does not matter.
    let cw = Triangle::new(vector![0.0, 0.0], vector![0.0, 4.0], vector![4.0, 0.0]);
    assert!(cw.contains_closed(vector![1.0, 1.0]));
}

#[test]
fn translation_round_trips_on_grid() {
    let l = l_shape();
    let moved = l.translated(vector![7.0, -3.0]);
    assert_eq!(moved.points()[1], vector![9.0, -3.0]);
    assert_eq!(moved.translated(vector![-7.0, 3.0]), l);
}

#[test]
fn auto_snap_follows_input_grid() {
    let cfg = GeomCfg::default();
    assert!(cfg.snaps_for(l_shape().points()));
    assert!(!cfg.snaps_for(&[vector![0.5, 0.0]]));
    let never = GeomCfg {
        grid_snap: GridSnap::Never,
        ..cfg
    };
    assert!(!never.snaps_for(l_shape().points()));
}
