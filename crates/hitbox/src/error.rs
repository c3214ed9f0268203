//! Error taxonomy of the geometry core.
//!
//! All variants are local and recoverable: the caller rejects the offending
//! polygon or edit and keeps its previous state. Inputs are deterministic, so
//! retrying without changing the input reproduces the same error.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Fewer than 3 vertices were passed to triangulation or shape construction.
    #[error("polygon needs at least 3 vertices, got {len}")]
    InvalidPolygon { len: usize },

    /// Ear clipping swept the whole working polygon without accepting an ear.
    #[error("ear clipping made no progress with {remaining} vertices left")]
    TriangulationFailed { remaining: usize },

    /// An angle was requested for a zero-length edge (adjacent duplicate points).
    #[error("angle of a zero-length vector is undefined")]
    DegenerateAngle,

    /// A registry index does not name a shape.
    #[error("no shape with index {0}")]
    UnknownShape(usize),
}
