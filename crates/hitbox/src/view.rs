//! Pan/zoom view state for a canvas front end.
//!
//! Rendering maps `world → screen` as `(world + offset) * zoom + viewport / 2`.
//! Input events update the camera explicitly; nothing here is shared state.

use crate::geom2::{round_away_from_zero, Vec2};

/// Wheel step factor per notch.
const ZOOM_STEP: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// World-space pan, applied before zoom.
    pub offset: Vec2,
    pub zoom: f64,
}

impl Default for Camera {
    /// Centered on world (64, 64) at half scale.
    fn default() -> Self {
        Self {
            offset: Vec2::new(-64.0, -64.0),
            zoom: 0.5,
        }
    }
}

impl Camera {
    /// Screen pixel to world grid cell (floored).
    pub fn screen_to_world(&self, screen: Vec2, viewport: Vec2) -> Vec2 {
        let w = (screen - viewport / 2.0) / self.zoom - self.offset;
        Vec2::new(w.x.floor(), w.y.floor())
    }

    pub fn world_to_screen(&self, world: Vec2, viewport: Vec2) -> Vec2 {
        (world + self.offset) * self.zoom + viewport / 2.0
    }

    /// Pan by a mouse delta in screen pixels.
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.offset += screen_delta / self.zoom;
    }

    /// Positive rotation zooms out, negative zooms in.
    pub fn zoom_by_wheel(&mut self, rotation: f64) {
        self.zoom *= ZOOM_STEP.powf(-rotation);
    }

    /// World-space drag delta for a screen delta, rounded away from zero so a
    /// one-pixel drag still moves a shape at low zoom.
    pub fn drag_delta(&self, screen_delta: Vec2) -> Vec2 {
        let d = screen_delta / self.zoom;
        Vec2::new(round_away_from_zero(d.x), round_away_from_zero(d.y))
    }
}
