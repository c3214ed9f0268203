use tracing::trace;

use super::sat::sat_overlap;
use crate::error::GeomError;
use crate::geom2::{GeomCfg, Polygon, Rect, Vec2};
use crate::triangulate::triangulate_with;

/// Outline polygon plus the convex pieces collision runs on.
///
/// Invariants:
/// - `triangles` is non-empty.
/// - A finalized shape holds its `n - 2` triangles; a draft holds the outline
///   itself as its only piece.
/// - Translation moves the outline and every piece by the same delta; pieces
///   are never recomputed after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionShape {
    outline: Polygon,
    triangles: Vec<Polygon>,
}

impl CollisionShape {
    /// Finalized shape: triangulates `outline` with the default config.
    pub fn new(outline: Polygon) -> Result<Self, GeomError> {
        Self::with_cfg(outline, &GeomCfg::default())
    }

    pub fn with_cfg(outline: Polygon, cfg: &GeomCfg) -> Result<Self, GeomError> {
        let triangles = triangulate_with(&outline, cfg)?
            .into_iter()
            .map(Polygon::from)
            .collect();
        Ok(Self { outline, triangles })
    }

    /// Finalized shape from a raw vertex list.
    pub fn from_points(points: Vec<Vec2>) -> Result<Self, GeomError> {
        Self::new(Polygon::new(points)?)
    }

    /// In-progress shape: skips triangulation and uses the outline as its
    /// single piece.
    pub fn draft(outline: Polygon) -> Self {
        Self {
            triangles: vec![outline.clone()],
            outline,
        }
    }

    #[inline]
    pub fn outline(&self) -> &Polygon {
        &self.outline
    }

    #[inline]
    pub fn triangles(&self) -> &[Polygon] {
        &self.triangles
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.outline.bounding_box()
    }

    /// Broad phase: bounding rectangles overlap with positive area.
    #[inline]
    pub fn bounding_collision(&self, other: &CollisionShape) -> bool {
        self.bounding_box().intersects(&other.bounding_box())
    }

    /// Bounding prune, then SAT over every pair of pieces.
    pub fn collides(&self, other: &CollisionShape) -> bool {
        if !self.bounding_collision(other) {
            return false;
        }
        trace!(
            pieces = self.triangles.len(),
            other_pieces = other.triangles.len(),
            "narrow phase"
        );
        self.triangles.iter().any(|p| {
            other
                .triangles
                .iter()
                .any(|q| sat_overlap(p.points(), q.points()))
        })
    }

    /// True if any shape in `shapes` other than `self` (by identity) collides.
    pub fn collides_with_any<'a, I>(&self, shapes: I) -> bool
    where
        I: IntoIterator<Item = &'a CollisionShape>,
    {
        shapes
            .into_iter()
            .any(|s| !std::ptr::eq(s, self) && s.collides(self))
    }

    /// Even-odd containment against the outline.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.outline.contains(p)
    }

    /// Copy moved by `(dx, dy)` rounded to whole grid units.
    pub fn translated(&self, dx: f64, dy: f64) -> CollisionShape {
        let mut out = self.clone();
        out.translate(dx, dy);
        out
    }

    /// Move outline and pieces in lockstep by `(dx, dy)` rounded to whole grid units.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let d = Vec2::new(dx.round(), dy.round());
        self.outline.translate_in_place(d);
        for t in &mut self.triangles {
            t.translate_in_place(d);
        }
    }
}
