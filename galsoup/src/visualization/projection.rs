//! Simulation space -> screen space
//!
//! The camera looks along +y (depth) with z up. A tilt rotates the y/z plane
//! before the perspective divide, so 0° is edge-on and 90° is face-on.
//! Screen coordinates are relative to the view centre with +y up.

use crate::simulation::states::{NVec2, NVec3};

/// Denominator floor for points at or behind the eye
pub const MIN_DEPTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub scale: f64, // perspective factor, also used for size and fade
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub perspective: f64,
    pub tilt_deg: f64,
}

impl Projection {
    pub fn new(perspective: f64, tilt_deg: f64) -> Self {
        Self { perspective, tilt_deg }
    }

    pub fn project(&self, p: NVec3) -> ScreenPoint {
        let (sin, cos) = self.tilt_deg.to_radians().sin_cos();
        let tilted_y = p.y * cos - p.z * sin;
        let tilted_z = p.y * sin + p.z * cos;

        let scale = self.perspective / (self.perspective + tilted_y).max(MIN_DEPTH);
        ScreenPoint {
            x: p.x * scale,
            y: tilted_z * scale,
            scale,
        }
    }

    /// Vertical squash of flat geometry seen at this tilt (1 edge-on, 0 face-on)
    pub fn edge_factor(&self) -> f64 {
        self.tilt_deg.to_radians().cos().abs()
    }
}

/// Top-down view used by the inset: plain scale, +y up
pub fn face_on(p: NVec2, scale: f64) -> (f64, f64) {
    (p.x * scale, p.y * scale)
}
