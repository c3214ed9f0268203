use crate::geom2::polygon::ring_edges;
use crate::geom2::{Vec2, Vec2Ext};

/// Separating-axis overlap test for two convex vertex rings.
///
/// Candidate axes are the edge directions of `a` then `b`; zero-length edges
/// are skipped and directions collinear with an earlier axis are dropped.
/// Each axis is rotated by 90° and both rings are projected onto it.
/// Intervals that merely touch count as separated, so pieces sharing an edge
/// do not overlap.
///
/// Exact only for convex input: callers pass triangles (or a convex draft).
pub fn sat_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    let mut axes: Vec<Vec2> = Vec::with_capacity(a.len() + b.len());
    for (p, q) in ring_edges(a).chain(ring_edges(b)) {
        let e = q - p;
        if e == Vec2::zeros() || axes.iter().any(|v| v.is_collinear_with(&e)) {
            continue;
        }
        axes.push(e);
    }
    // Both rings collapsed to single points: nothing has area to overlap.
    if axes.is_empty() {
        return false;
    }
    for axis in &axes {
        let line = Vec2::new(-axis.y, axis.x);
        let (a_min, a_max) = project(a, &line);
        let (b_min, b_max) = project(b, &line);
        if a_max <= b_min || a_min >= b_max {
            return false;
        }
    }
    true
}

#[inline]
fn project(points: &[Vec2], line: &Vec2) -> (f64, f64) {
    points
        .iter()
        .map(|p| p.dot(line))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}
