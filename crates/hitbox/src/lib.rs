//! Polygon hitboxes: ear-clipping triangulation and SAT overlap.
//!
//! Data flow
//! - A caller supplies an ordered vertex list (`Polygon`).
//! - `triangulate` splits it into convex pieces; `CollisionShape` bundles the
//!   outline with those pieces.
//! - `CollisionShape::collides` prunes by bounding box and runs SAT on piece
//!   pairs; `ShapeRegistry` sweeps a whole scene.
//!
//! Everything here is synchronous and pure apart from the registry's explicit
//! mutations. Errors are `GeomError` and always recoverable.

pub mod collision;
pub mod error;
pub mod geom2;
pub mod registry;
pub mod triangulate;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collision::{sat_overlap, CollisionShape};
pub use error::GeomError;
pub use geom2::{GeomCfg, GridSnap, Polygon, Rect, Triangle, Vec2, Vec2Ext};
pub use registry::{DraftPolygon, ShapeRegistry};
pub use triangulate::{triangulate, triangulate_with};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collision::{sat_overlap, CollisionShape};
    pub use crate::error::GeomError;
    pub use crate::geom2::rand::{draw_polygon_radial, draw_scene, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{GeomCfg, GridSnap, Polygon, Rect, Triangle, Vec2, Vec2Ext};
    pub use crate::registry::{DraftPolygon, ShapeRegistry};
    pub use crate::triangulate::{triangulate, triangulate_points, triangulate_with};
    pub use crate::view::Camera;
}
