//! 2D vector arithmetic on top of `nalgebra::Vector2<f64>`.
//!
//! `add`, `sub`, `scale`, `dot` and `length` are nalgebra's own operators
//! (`a + b`, `a - b`, `a * s`, `a.dot(&b)`, `a.norm()`). The `Vec2Ext` trait
//! adds the planar helpers the triangulator and SAT need.

use nalgebra::Vector2;

use crate::error::GeomError;

/// Point or free vector in the plane.
pub type Vec2 = Vector2<f64>;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Planar helpers. Names avoid nalgebra's inherent `cross`/`angle`, which
/// would shadow trait methods and mean something else for 2-vectors.
pub trait Vec2Ext {
    /// 2D cross product: z-component of the 3D cross product.
    fn perp_dot(&self, other: &Vec2) -> f64;
    fn distance_to(&self, other: &Vec2) -> f64;
    /// Unit vector, or the zero vector if `self` has zero length.
    fn normalize_or_zero(&self) -> Vec2;
    /// Unsigned angle between `self` and `other` in degrees, in `[0, 180]`.
    fn angle_to(&self, other: &Vec2) -> Result<f64, GeomError>;
    /// Angle to the +x axis in degrees, in `[0, 180]`.
    fn heading(&self) -> Result<f64, GeomError>;
    /// Parallel (or anti-parallel) directions. The zero vector is collinear with everything.
    fn is_collinear_with(&self, other: &Vec2) -> bool;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn perp_dot(&self, other: &Vec2) -> f64 {
        parallelogram_area(*self, *other)
    }

    #[inline]
    fn distance_to(&self, other: &Vec2) -> f64 {
        (self - other).norm()
    }

    #[inline]
    fn normalize_or_zero(&self) -> Vec2 {
        let l = self.norm();
        if l != 0.0 {
            self / l
        } else {
            Vec2::zeros()
        }
    }

    fn angle_to(&self, other: &Vec2) -> Result<f64, GeomError> {
        let denom = self.norm() * other.norm();
        if denom == 0.0 || !denom.is_finite() {
            return Err(GeomError::DegenerateAngle);
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        Ok(cos.acos().to_degrees())
    }

    #[inline]
    fn heading(&self) -> Result<f64, GeomError> {
        self.angle_to(&Vec2::new(1.0, 0.0))
    }

    #[inline]
    fn is_collinear_with(&self, other: &Vec2) -> bool {
        self.perp_dot(other) == 0.0
    }
}

/// Unit vector pointing at `deg` degrees from the +x axis.
#[inline]
pub fn from_angle(deg: f64) -> Vec2 {
    let r = deg.to_radians();
    Vec2::new(r.cos(), r.sin())
}

/// `ceil` for positive values, `floor` otherwise: any non-zero drag moves at
/// least one grid unit.
#[inline]
pub fn round_away_from_zero(v: f64) -> f64 {
    if v > 0.0 {
        v.ceil()
    } else {
        v.floor()
    }
}
