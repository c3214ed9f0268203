//! Overlap queries between triangulated outlines.
//!
//! - `sat_overlap`: separating-axis test for two convex rings.
//! - `CollisionShape`: outline + pieces, with a bounding-box broad phase and a
//!   SAT narrow phase over every pair of pieces.
//!
//! Code cross-refs: `crate::triangulate`, `crate::registry::ShapeRegistry`

mod sat;
mod shape;

pub use sat::sat_overlap;
pub use shape::CollisionShape;
