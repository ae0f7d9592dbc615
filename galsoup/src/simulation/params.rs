//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the live "slider" values (velocities, force constants, rates, cap, tilt),
//! - integration step and damping,
//! - force thresholds and the distance metric,
//! - per-particle defaults (trail length, radius, age cap) and culling distance
//!
//! Each emitter variant has its own preset; scenario files override fields

use super::engine::Variant;

/// How pairwise distance is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    Planar,  // x/y only
    Spatial, // x/y/z
}

/// Extra attraction applied when a pair is very close
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseBoost {
    pub threshold: f64, // distance below which the boost kicks in
    pub factor: f64,    // multiple of the base force added on top
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub base_velocity: f64,     // galaxy ejection speed floor
    pub centripetal_force: f64, // scale on the rotational deflection
    pub field_gravity: f64,     // arm field constant (0 disables)
    pub pair_gravity: f64,      // pairwise constant G
    pub emission_rate: f64,     // per-point emission chance per frame at full rate
    pub decay_rate: u32,        // length of the decay period in frames
    pub max_particles: usize,   // population cap
    pub view_tilt: f64,         // degrees, consumed by the renderer

    pub dt: f64,      // step size
    pub damping: f64, // per-frame velocity multiplier

    pub min_distance: f64, // pairwise singularity guard
    pub metric: DistanceMetric,
    pub close_boost: Option<CloseBoost>,

    pub trail_capacity: usize,
    pub particle_radius: f64,
    pub max_age: Option<u32>,
    pub cull_distance: f64, // in-plane distance from origin
    pub perspective: f64,   // renderer perspective strength
}

impl Parameters {
    /// Rotating galaxy: planar forces, arm field, no age cap
    pub fn galaxy() -> Self {
        Self {
            base_velocity: 6.0,
            centripetal_force: 6.0,
            field_gravity: 18.0,
            pair_gravity: 7.0,
            emission_rate: 0.045,
            decay_rate: 1200,
            max_particles: 2000,
            view_tilt: 0.0,
            dt: 1.0,
            damping: 0.999,
            min_distance: 8.0,
            metric: DistanceMetric::Planar,
            close_boost: None,
            trail_capacity: 8,
            particle_radius: 1.2,
            max_age: None,
            cull_distance: 1200.0,
            perspective: 600.0,
        }
    }

    /// Helix disk: spatial distances with a close-range boost, particles age out
    pub fn disk() -> Self {
        Self {
            base_velocity: 0.0,
            centripetal_force: 0.0,
            field_gravity: 0.0,
            pair_gravity: 20.0,
            emission_rate: 1.0,
            decay_rate: 0,
            max_particles: 400,
            view_tilt: 0.0,
            dt: 1.0,
            damping: 0.998,
            min_distance: 8.0,
            metric: DistanceMetric::Spatial,
            close_boost: Some(CloseBoost {
                threshold: 25.0,
                factor: 2.0,
            }),
            trail_capacity: 25,
            particle_radius: 3.0,
            max_age: Some(1500),
            cull_distance: 1000.0,
            perspective: 800.0,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Galaxy => Self::galaxy(),
            Variant::Disk => Self::disk(),
        }
    }
}
