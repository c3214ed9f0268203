use tracing::{debug, trace};

use super::raycast::cast_ray_to;
use crate::error::GeomError;
use crate::geom2::polygon::signed_area;
use crate::geom2::{GeomCfg, Triangle, Vec2};

/// Interior angle at `cur` in degrees, in `[0, 360)`: the counter-clockwise
/// angle from ray `cur → next` to ray `cur → prev`.
///
/// For a counter-clockwise ring, values above 180 mark reflex vertices.
pub fn interior_angle(prev: Vec2, cur: Vec2, next: Vec2) -> Result<f64, GeomError> {
    let to_next = next - cur;
    let to_prev = prev - cur;
    if to_next == Vec2::zeros() || to_prev == Vec2::zeros() {
        return Err(GeomError::DegenerateAngle);
    }
    let a = to_next.y.atan2(to_next.x);
    let b = to_prev.y.atan2(to_prev.x);
    let mut angle = b - a;
    if angle < 0.0 {
        angle += std::f64::consts::TAU;
    }
    Ok(angle.to_degrees())
}

pub(super) fn clip(points: &[Vec2], cfg: &GeomCfg) -> Result<Vec<Triangle>, GeomError> {
    let n = points.len();
    if n < 3 {
        return Err(GeomError::InvalidPolygon { len: n });
    }
    if n == 3 {
        return Ok(vec![Triangle::new(points[0], points[1], points[2])]);
    }

    let mut ring = points.to_vec();
    if signed_area(&ring) < 0.0 {
        ring.reverse();
    }
    let snap = cfg.snaps_for(&ring);

    let mut out = Vec::with_capacity(n - 2);
    let mut i = 0usize;
    let mut misses = 0usize;
    while ring.len() > 3 {
        let m = ring.len();
        if misses >= m {
            debug!(vertices = n, remaining = m, "ear clipping stalled");
            return Err(GeomError::TriangulationFailed { remaining: m });
        }
        let prev = (i + m - 1) % m;
        let next = (i + 1) % m;
        if is_ear(&ring, prev, i, next, snap, cfg)? {
            out.push(Triangle::new(ring[prev], ring[i], ring[next]));
            ring.remove(i);
            // Re-center on the shrunk ring: the old `prev` is the next candidate.
            i = if i == 0 { ring.len() - 1 } else { i - 1 };
            misses = 0;
        } else {
            i = next;
            misses += 1;
        }
    }
    out.push(Triangle::new(ring[0], ring[1], ring[2]));
    debug!(vertices = n, triangles = out.len(), snap, "triangulated");
    Ok(out)
}

fn is_ear(
    ring: &[Vec2],
    prev: usize,
    cur: usize,
    next: usize,
    snap: bool,
    cfg: &GeomCfg,
) -> Result<bool, GeomError> {
    let angle = interior_angle(ring[prev], ring[cur], ring[next])?;
    if angle > 180.0 {
        trace!(index = cur, angle, "reflex vertex");
        return Ok(false);
    }

    let hit = cast_ray_to(ring[prev], ring[next], ring, snap, cfg.eps);
    if hit != ring[next] {
        trace!(index = cur, hit_x = hit.x, hit_y = hit.y, "diagonal obstructed");
        return Ok(false);
    }

    // A reflex vertex that connects straight back to `prev` never crosses the
    // diagonal, so the ray cast alone misses it.
    let tri = Triangle::new(ring[prev], ring[cur], ring[next]);
    let blocked = ring.iter().enumerate().any(|(k, p)| {
        k != prev
            && k != cur
            && k != next
            && !tri.vertices.contains(p)
            && tri.contains_closed(*p)
    });
    if blocked {
        trace!(index = cur, "vertex inside candidate ear");
        return Ok(false);
    }
    Ok(true)
}
