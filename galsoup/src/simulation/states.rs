//! Core state types for the particle soup.
//!
//! Defines the particle record shared by both emitter variants:
//! - `Particle` with in-plane `NVec2` motion plus a scalar out-of-plane axis `z`
//! - `Trail`, the bounded FIFO of past `(x, y, z)` samples
//! - `ParticleColor` (HSL, fixed at creation) and `SourceTag`

use std::collections::VecDeque;

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Hue in degrees, saturation and lightness in percent (CSS-style)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl ParticleColor {
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }
}

/// Which emitter structure produced a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    Bulge { layer: usize }, // galactic bulge emission layer
    Helix(usize),           // disk helix pattern index
}

/// Fixed-capacity history of past positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    samples: VecDeque<NVec3>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once over capacity
    pub fn push(&mut self, sample: NVec3) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec3> {
        self.samples.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: NVec2,     // in-plane position (x, y)
    pub z: f64,              // out-of-plane coordinate
    pub velocity: NVec2,     // in-plane velocity
    pub z_velocity: f64,     // out-of-plane velocity
    pub acceleration: NVec2, // per-frame accumulator, zeroed after integration
    pub mass: f64,
    pub radius: f64,           // draw radius
    pub age: u32,              // frames since creation
    pub max_age: Option<u32>,  // None = never ages out
    pub trail: Trail,
    pub color: ParticleColor,
    pub source: Option<SourceTag>,
}

impl Particle {
    /// Particle at rest at `(x, y, z)` with unit mass and an empty trail
    pub fn at(x: f64, y: f64, z: f64, trail_capacity: usize) -> Self {
        Self {
            position: NVec2::new(x, y),
            z,
            velocity: NVec2::zeros(),
            z_velocity: 0.0,
            acceleration: NVec2::zeros(),
            mass: 1.0,
            radius: 1.0,
            age: 0,
            max_age: None,
            trail: Trail::with_capacity(trail_capacity),
            color: ParticleColor::hsl(220.0, 70.0, 70.0),
            source: None,
        }
    }

    /// Add a force into the acceleration accumulator (a = F / m)
    pub fn apply_force(&mut self, force: NVec2) {
        self.acceleration += force / self.mass;
    }

    /// Full 3-axis position
    pub fn position3(&self) -> NVec3 {
        NVec3::new(self.position.x, self.position.y, self.z)
    }

    /// True once the particle has outlived its cap (if it has one)
    pub fn is_expired(&self) -> bool {
        self.max_age.is_some_and(|max| self.age > max)
    }
}
