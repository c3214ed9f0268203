//! Vertex-list polygons, triangles and axis-aligned rectangles.
//!
//! Conventions
//! - A `Polygon` is an implicitly closed ring of at least 3 points. Winding is
//!   not constrained here; `triangulate` normalizes to counter-clockwise
//!   (positive shoelace area, y-up frame).
//! - Coordinates are compared exactly. User-drawn input lives on the integer
//!   grid, where the arithmetic below is exact.

use super::vec::{parallelogram_area, Vec2};
use crate::error::GeomError;

/// Simple polygon as an ordered vertex ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Result<Self, GeomError> {
        if points.len() < 3 {
            return Err(GeomError::InvalidPolygon { len: points.len() });
        }
        Ok(Self { points })
    }

    /// Build from `[x, y]` pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, GeomError> {
        Self::new(coords.iter().map(|c| Vec2::new(c[0], c[1])).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Vertex count; at least 3 by construction.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Edges `(p_i, p_{i+1})`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        ring_edges(&self.points)
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn reversed(&self) -> Polygon {
        let mut points = self.points.clone();
        points.reverse();
        Polygon { points }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(&self.points)
    }

    /// Even-odd point containment.
    pub fn contains(&self, p: Vec2) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn translated(&self, d: Vec2) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| p + d).collect(),
        }
    }

    pub(crate) fn translate_in_place(&mut self, d: Vec2) {
        for p in &mut self.points {
            *p += d;
        }
    }
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Polygon {
            points: t.vertices.to_vec(),
        }
    }
}

/// Three-vertex piece emitted by the triangulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        0.5 * parallelogram_area(b - a, c - a)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Closed containment (boundary counts), independent of winding.
    pub fn contains_closed(&self, p: Vec2) -> bool {
        let [a, b, c] = self.vertices;
        let d1 = parallelogram_area(b - a, p - a);
        let d2 = parallelogram_area(c - b, p - b);
        let d3 = parallelogram_area(a - c, p - c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

/// Axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Tightest rectangle around `points`. An empty slice yields an inverted
    /// (empty) rectangle.
    pub fn from_points(points: &[Vec2]) -> Rect {
        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// No interior: zero (or negative) width or height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Interiors overlap. Touching or empty rectangles do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

pub(crate) fn ring_edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

pub(crate) fn signed_area(points: &[Vec2]) -> f64 {
    0.5 * ring_edges(points)
        .map(|(a, b)| parallelogram_area(a, b))
        .sum::<f64>()
}
