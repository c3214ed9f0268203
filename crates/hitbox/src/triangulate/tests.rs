use super::*;
use crate::collision::sat_overlap;
use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use crate::geom2::GridSnap;
use nalgebra::vector;
use proptest::prelude::*;

fn poly(coords: &[[f64; 2]]) -> Polygon {
    Polygon::from_coords(coords).unwrap()
}

fn l_shape() -> Polygon {
    poly(&[
        [0.0, 0.0],
        [2.0, 0.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
    ])
}

fn area_sum(tris: &[Triangle]) -> f64 {
    tris.iter().map(Triangle::area).sum()
}

fn assert_pairwise_disjoint(tris: &[Triangle]) {
    for (i, a) in tris.iter().enumerate() {
        for b in &tris[i + 1..] {
            assert!(
                !sat_overlap(&a.vertices, &b.vertices),
                "overlapping pieces {a:?} and {b:?}"
            );
        }
    }
}

#[test]
fn triangle_is_returned_unchanged() {
    let t = poly(&[[0.0, 0.0], [0.0, 3.0], [4.0, 0.0]]);
    assert!(!t.is_ccw());
    let tris = triangulate(&t).unwrap();
    assert_eq!(tris.len(), 1);
    // Winding is kept for n = 3.
    assert!(tris[0].signed_area() < 0.0);
    assert_eq!(tris[0].vertices.to_vec(), t.points().to_vec());
}

#[test]
fn l_shape_gives_four_pieces_inside_the_l() {
    let l = l_shape();
    let tris = triangulate(&l).unwrap();
    assert_eq!(tris.len(), 4);
    assert!((area_sum(&tris) - 3.0).abs() < 1e-12);
    assert_pairwise_disjoint(&tris);
    // No piece covers the notch (1,1)-(2,2).
    let notch = [
        vector![1.0, 1.0],
        vector![2.0, 1.0],
        vector![2.0, 2.0],
        vector![1.0, 2.0],
    ];
    for t in &tris {
        assert!(!sat_overlap(&t.vertices, &notch), "{t:?} covers the notch");
        let c = (t.vertices[0] + t.vertices[1] + t.vertices[2]) / 3.0;
        assert!(l.contains(c));
    }
}

#[test]
fn pieces_are_counter_clockwise() {
    for t in triangulate(&l_shape()).unwrap() {
        assert!(t.signed_area() > 0.0);
    }
}

#[test]
fn clockwise_input_is_normalized() {
    let cw = l_shape().reversed();
    let tris = triangulate(&cw).unwrap();
    assert_eq!(tris.len(), 4);
    assert!((area_sum(&tris) - 3.0).abs() < 1e-12);
    assert!(tris.iter().all(|t| t.signed_area() > 0.0));
    assert_pairwise_disjoint(&tris);
}

#[test]
fn off_grid_square_triangulates_without_snapping() {
    let sq = poly(&[[0.5, 0.5], [1.5, 0.5], [1.5, 1.5], [0.5, 1.5]]);
    let tris = triangulate(&sq).unwrap();
    assert_eq!(tris.len(), 2);
    assert!((area_sum(&tris) - 1.0).abs() < 1e-12);
}

#[test]
fn forced_snapping_misreads_off_grid_input() {
    // Rounding a hit at the start vertex moves it off `start`, which reads as
    // an obstruction on every candidate.
    let sq = poly(&[[0.5, 0.5], [1.5, 0.5], [1.5, 1.5], [0.5, 1.5]]);
    let cfg = GeomCfg {
        grid_snap: GridSnap::Always,
        ..GeomCfg::default()
    };
    assert_eq!(
        triangulate_with(&sq, &cfg),
        Err(GeomError::TriangulationFailed { remaining: 4 })
    );
}

#[test]
fn dart_does_not_clip_across_its_reflex_vertex() {
    // Arrowhead whose reflex vertex (2,1) sits inside the triangle of the tip.
    // The tip comes first, so it is the first candidate: its diagonal runs
    // along the base and touches no edge, only the vertex check rejects it.
    let dart = poly(&[[2.0, 4.0], [0.0, 0.0], [2.0, 1.0], [4.0, 0.0]]);
    let tris = triangulate(&dart).unwrap();
    assert_eq!(tris.len(), 2);
    assert!((area_sum(&tris) - dart.area()).abs() < 1e-12);
    assert_pairwise_disjoint(&tris);
    // Both pieces are cut along the tip-to-notch diagonal.
    for t in &tris {
        assert!(t.vertices.contains(&vector![2.0, 1.0]));
    }
}

#[test]
fn comb_polygon_triangulates() {
    let comb = poly(&[
        [0.0, 0.0],
        [10.0, 0.0],
        [10.0, 6.0],
        [8.0, 6.0],
        [8.0, 2.0],
        [6.0, 2.0],
        [6.0, 6.0],
        [4.0, 6.0],
        [4.0, 2.0],
        [2.0, 2.0],
        [2.0, 6.0],
        [0.0, 6.0],
    ]);
    let tris = triangulate(&comb).unwrap();
    assert_eq!(tris.len(), comb.len() - 2);
    assert!((area_sum(&tris) - comb.area()).abs() < 1e-9);
    assert_pairwise_disjoint(&tris);
}

#[test]
fn too_few_points_is_invalid() {
    let pts = [vector![0.0, 0.0], vector![1.0, 1.0]];
    assert_eq!(
        triangulate_points(&pts, &GeomCfg::default()),
        Err(GeomError::InvalidPolygon { len: 2 })
    );
}

#[test]
fn duplicate_adjacent_point_is_degenerate() {
    let p = poly(&[[0.0, 0.0], [0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
    assert_eq!(triangulate(&p), Err(GeomError::DegenerateAngle));
}

#[test]
fn collinear_ring_fails_instead_of_looping() {
    // Every candidate ear is flat and contains another vertex.
    let p = poly(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
    assert_eq!(
        triangulate(&p),
        Err(GeomError::TriangulationFailed { remaining: 4 })
    );
}

#[test]
fn interior_angle_conventions() {
    let a = interior_angle(vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]).unwrap();
    assert!((a - 90.0).abs() < 1e-12);
    let r = interior_angle(vector![1.0, 1.0], vector![1.0, 0.0], vector![0.0, 0.0]).unwrap();
    assert!((r - 270.0).abs() < 1e-12);
    let straight =
        interior_angle(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]).unwrap();
    assert!((straight - 180.0).abs() < 1e-12);
    assert_eq!(
        interior_angle(vector![1.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]),
        Err(GeomError::DegenerateAngle)
    );
}

proptest! {
    #[test]
    fn random_star_polygons_partition_exactly(seed in any::<u64>(), n in 4usize..24) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let drawn = draw_polygon_radial(cfg, Vec2::zeros(), ReplayToken::new(seed, 0));
        prop_assume!(drawn.is_some());
        let p = drawn.unwrap();
        let tris = triangulate(&p).unwrap();
        prop_assert_eq!(tris.len(), p.len() - 2);
        prop_assert!((area_sum(&tris) - p.area()).abs() < 1e-6);
        for (i, a) in tris.iter().enumerate() {
            for b in &tris[i + 1..] {
                prop_assert!(!sat_overlap(&a.vertices, &b.vertices));
            }
        }
    }

    #[test]
    fn winding_does_not_change_the_area(seed in any::<u64>()) {
        let drawn = draw_polygon_radial(RadialCfg::default(), Vec2::zeros(), ReplayToken::new(seed, 1));
        prop_assume!(drawn.is_some());
        let p = drawn.unwrap();
        let ccw = area_sum(&triangulate(&p).unwrap());
        let cw = area_sum(&triangulate(&p.reversed()).unwrap());
        prop_assert!((ccw - cw).abs() < 1e-6);
    }
}
