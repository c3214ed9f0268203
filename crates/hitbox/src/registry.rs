//! Ordered shape collection and the in-progress draft outline.
//!
//! The registry is owned by the caller (UI or CLI). Collision sweeps only read
//! it; the mutations are adding a finalized shape and translating one by a
//! drag delta.

use rayon::prelude::*;
use tracing::debug;

use crate::collision::CollisionShape;
use crate::error::GeomError;
use crate::geom2::{Polygon, Rect, Vec2};

/// Stably ordered collection of shapes. Indices are insertion order.
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<CollisionShape>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized shape; returns its index.
    pub fn push(&mut self, shape: CollisionShape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CollisionShape> {
        self.shapes.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn shapes(&self) -> &[CollisionShape] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionShape> {
        self.shapes.iter()
    }

    /// First shape (in insertion order) whose outline contains `p`.
    pub fn shape_at(&self, p: Vec2) -> Option<usize> {
        self.shapes.iter().position(|s| s.contains_point(p))
    }

    /// Move one shape's outline and pieces together; no re-triangulation.
    pub fn translate(&mut self, index: usize, dx: f64, dy: f64) -> Result<(), GeomError> {
        let shape = self
            .shapes
            .get_mut(index)
            .ok_or(GeomError::UnknownShape(index))?;
        shape.translate(dx, dy);
        Ok(())
    }

    /// Per-shape "currently colliding with another shape" flags, in index order.
    pub fn collision_flags(&self) -> Vec<bool> {
        let flags: Vec<bool> = self
            .shapes
            .par_iter()
            .map(|s| s.collides_with_any(&self.shapes))
            .collect();
        debug!(
            shapes = flags.len(),
            colliding = flags.iter().filter(|f| **f).count(),
            "collision sweep"
        );
        flags
    }

    /// Every colliding pair `(i, j)` with `i < j`.
    pub fn colliding_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.shapes.len();
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                ((i + 1)..n)
                    .filter(move |&j| self.shapes[i].collides(&self.shapes[j]))
                    .map(move |j| (i, j))
            })
            .collect()
    }
}

impl FromIterator<CollisionShape> for ShapeRegistry {
    fn from_iter<T: IntoIterator<Item = CollisionShape>>(iter: T) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

/// Outline being drawn point by point, finalized by an explicit close action.
#[derive(Clone, Debug, Default)]
pub struct DraftPolygon {
    points: Vec<Vec2>,
}

impl DraftPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_point(&mut self, p: Vec2) {
        self.points.push(p);
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Abandon the draft.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Box around the points so far; `None` before the first point.
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.points.is_empty() {
            None
        } else {
            Some(Rect::from_points(&self.points))
        }
    }

    /// Untriangulated shape for rendering and broad-phase checks.
    pub fn preview(&self) -> Result<CollisionShape, GeomError> {
        Ok(CollisionShape::draft(Polygon::new(self.points.clone())?))
    }

    /// Close the outline and triangulate it. On error the draft is consumed;
    /// callers that want to keep drawing should `clone` first.
    pub fn finalize(self) -> Result<CollisionShape, GeomError> {
        CollisionShape::from_points(self.points)
    }
}
