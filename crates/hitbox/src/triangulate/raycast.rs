//! Segment visibility by ray casting against a vertex ring.

use crate::geom2::polygon::ring_edges;
use crate::geom2::{Vec2, Vec2Ext};

/// Nearest point where the segment `start → dest` meets an edge of `ring`,
/// or `dest` itself when nothing lies strictly closer.
///
/// Each edge `a + t·r` is intersected with the ray `start + u·s`
/// (`s = dest - start`); a hit counts iff `0 ≤ t ≤ 1` and `0 ≤ u ≤ 1`.
/// Hits at `start` (within `eps`) are ignored. With `snap`, hit coordinates
/// are rounded to the integer grid before distances are compared, so edges
/// that merely end at `dest` resolve to `dest` exactly.
///
/// Edges parallel to the ray never count as hits.
pub fn cast_ray_to(start: Vec2, dest: Vec2, ring: &[Vec2], snap: bool, eps: f64) -> Vec2 {
    let s = dest - start;
    let mut nearest = dest;
    let mut best = start.distance_to(&dest);
    for (a, b) in ring_edges(ring) {
        let r = b - a;
        let denom = r.perp_dot(&s);
        if denom == 0.0 {
            continue;
        }
        let t = (start - a).perp_dot(&s) / denom;
        let u = (a - start).perp_dot(&r) / s.perp_dot(&r);
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            continue;
        }
        let mut hit = start + s * u;
        if snap {
            hit = Vec2::new(hit.x.round(), hit.y.round());
        }
        let d = hit.distance_to(&start);
        if d <= eps {
            continue;
        }
        if d < best - eps {
            best = d;
            nearest = hit;
        }
    }
    nearest
}
