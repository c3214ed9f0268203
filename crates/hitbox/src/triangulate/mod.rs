//! Ear-clipping triangulation of simple polygons.
//!
//! Purpose
//! - Decompose a (possibly concave) user-drawn outline into `n - 2` triangles
//!   so that SAT, which is exact only for convex pieces, applies to it.
//!
//! Conventions
//! - Winding: counter-clockwise in a y-up frame (positive shoelace area).
//!   For n > 3, clockwise input is reversed before clipping and every emitted
//!   triangle is counter-clockwise. A 3-vertex input is returned unchanged,
//!   whatever its winding.
//! - Termination: a full sweep over the working ring without accepting an ear
//!   fails with `TriangulationFailed` instead of looping.
//!
//! Code cross-refs: `raycast::cast_ray_to`, `crate::collision::CollisionShape`

mod ear;
mod raycast;

pub use ear::interior_angle;
pub use raycast::cast_ray_to;

use crate::error::GeomError;
use crate::geom2::{GeomCfg, Polygon, Triangle, Vec2};

/// Triangulate with the default `GeomCfg`.
pub fn triangulate(polygon: &Polygon) -> Result<Vec<Triangle>, GeomError> {
    ear::clip(polygon.points(), &GeomCfg::default())
}

pub fn triangulate_with(polygon: &Polygon, cfg: &GeomCfg) -> Result<Vec<Triangle>, GeomError> {
    ear::clip(polygon.points(), cfg)
}

/// Triangulate a raw vertex list; fewer than 3 points is `InvalidPolygon`.
pub fn triangulate_points(points: &[Vec2], cfg: &GeomCfg) -> Result<Vec<Triangle>, GeomError> {
    ear::clip(points, cfg)
}

#[cfg(test)]
mod tests;
