//! Planar vector helpers on top of nalgebra
//!
//! `NVec2` already gives value-semantics add/subtract/scale through its
//! operators; this adds the few operations the emitters and forces need
//! that nalgebra either lacks or handles differently (zero-safe normalize)

use super::states::{NVec2, NVec3};

/// Extra operations for in-plane vectors
pub trait PlanarOps {
    /// Unit vector in the same direction, or the zero vector for zero input
    fn safe_normalize(&self) -> Self;

    /// Euclidean distance to `other`
    fn distance(&self, other: &Self) -> f64;

    /// Rotate counter-clockwise by `angle` radians about the origin
    fn rotated(&self, angle: f64) -> Self;
}

impl PlanarOps for NVec2 {
    fn safe_normalize(&self) -> Self {
        let mag = self.norm();
        if mag == 0.0 {
            return NVec2::zeros();
        }
        self / mag
    }

    fn distance(&self, other: &Self) -> f64 {
        (self - other).norm()
    }

    fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        NVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

/// Zero-safe normalize for 3-axis vectors (helix axes, spawn rays)
pub fn safe_normalize3(v: &NVec3) -> NVec3 {
    let mag = v.norm();
    if mag == 0.0 {
        return NVec3::zeros();
    }
    v / mag
}
