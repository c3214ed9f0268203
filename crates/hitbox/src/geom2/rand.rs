//! Random simple polygons on the integer grid (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for user-like outlines, used by property tests,
//!   benches and the CLI `random` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, sort by angle and round to the integer grid. Sorting by
//!   angle around the center makes the ring star-shaped, hence simple; the
//!   result is counter-clockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::vec::{parallelogram_area, Vec2};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    /// Base radius in grid units. Small radii collapse vertices after rounding.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 100.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon around `center` (rounded to the grid).
///
/// Returns `None` when rounding broke the star shape (consecutive vertices no
/// longer turn counter-clockwise around the center), which only happens for
/// radii of a few grid units.
pub fn draw_polygon_radial(cfg: RadialCfg, center: Vec2, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let c = Vec2::new(center.x.round(), center.y.round());
    let pts: Vec<Vec2> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vec2::new((c.x + th.cos() * r).round(), (c.y + th.sin() * r).round())
        })
        .collect();
    let star = (0..n).all(|i| parallelogram_area(pts[i] - c, pts[(i + 1) % n] - c) > 0.0);
    if !star {
        return None;
    }
    Polygon::new(pts).ok()
}

/// Draw attempts allowed per requested polygon before `draw_scene` gives up.
pub const ATTEMPTS_PER_SHAPE: u64 = 64;

/// Up to `count` polygons with centers drawn uniformly from `[-spread, spread]²`.
///
/// Draws that fail (see `draw_polygon_radial`) are retried with the next
/// replay index, so the output is deterministic in `seed`. After
/// `count * ATTEMPTS_PER_SHAPE` attempts the scene is returned short; this
/// happens when the vertex count is too high for the radius to survive grid
/// rounding.
pub fn draw_scene(cfg: RadialCfg, count: usize, spread: f64, seed: u64) -> Vec<Polygon> {
    let mut out = Vec::with_capacity(count);
    let mut placer = ReplayToken::new(seed, u64::MAX).to_std_rng();
    let spread = spread.abs();
    let budget = (count as u64).saturating_mul(ATTEMPTS_PER_SHAPE);
    let mut index = 0u64;
    while out.len() < count && index < budget {
        let center = if spread > 0.0 {
            Vec2::new(
                placer.gen_range(-spread..=spread),
                placer.gen_range(-spread..=spread),
            )
        } else {
            Vec2::zeros()
        };
        if let Some(p) = draw_polygon_radial(cfg, center, ReplayToken::new(seed, index)) {
            out.push(p);
        }
        index += 1;
    }
    if out.len() < count {
        tracing::warn!(
            requested = count,
            drawn = out.len(),
            attempts = index,
            "radius too small for the vertex count"
        );
    }
    out
}
