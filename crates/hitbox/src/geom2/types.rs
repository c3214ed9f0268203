//! Tolerances and knobs shared by triangulation and collision.
//!
//! - `GeomCfg`: centralizes the epsilon and the grid-snapping policy.
//! - `GridSnap`: when ray-cast hits are rounded to the integer grid.

/// When ray-cast intersection points are rounded to the integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridSnap {
    /// Snap only if every input vertex already lies on the integer grid.
    #[default]
    Auto,
    Always,
    Never,
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack for distance comparisons in the ray cast when hits are not snapped.
    pub eps: f64,
    pub grid_snap: GridSnap,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: 1e-9,
            grid_snap: GridSnap::Auto,
        }
    }
}

impl GeomCfg {
    /// Resolve `grid_snap` against a concrete vertex set.
    pub(crate) fn snaps_for(&self, points: &[super::Vec2]) -> bool {
        match self.grid_snap {
            GridSnap::Always => true,
            GridSnap::Never => false,
            GridSnap::Auto => points
                .iter()
                .all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0),
        }
    }
}
