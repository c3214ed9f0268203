//! Planar primitives: vectors, polygons, rectangles, tolerances.
//!
//! Purpose
//! - One vertex-list representation (`Polygon`) shared by the triangulator,
//!   the collision shapes and the registry.
//! - Keep the arithmetic exact on the integer grid that user input lives on;
//!   tolerances are explicit in `GeomCfg`.
//!
//! Code cross-refs: `crate::triangulate`, `crate::collision::CollisionShape`

pub mod polygon;
pub mod rand;
mod types;
pub mod vec;

pub use polygon::{Polygon, Rect, Triangle};
pub use types::{GeomCfg, GridSnap};
pub use vec::{from_angle, parallelogram_area, round_away_from_zero, Vec2, Vec2Ext};

#[cfg(test)]
mod tests;
