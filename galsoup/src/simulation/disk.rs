//! Pulsing helix-streamer disk
//!
//! On activation the disk scatters its emission points across the surface,
//! half above and half below the plane, each with a random helix. Points
//! light up one after another every `helix_start_interval` frames and fire
//! on every third frame (staggered by index) until `emission_duration`.
//!
//! The spawn position walks around the helix, but the particle itself flies
//! a straight ray from the disk centre through that spawn position.

use std::f64::consts::TAU;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use super::emitter::{
    transition, EmissionContext, EmissionPoint, Emitter, EmitterShape, EmitterState, EmitterView,
    PointView,
};
use super::params::Parameters;
use super::states::{NVec3, Particle, ParticleColor, SourceTag};
use super::vector::safe_normalize3;

const FIRE_EVERY: u64 = 3;
const ACTIVE_PULSE: f64 = 0.1;
const IDLE_PULSE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct DiskLayout {
    pub radius: f64,
    pub helix_count: usize,
    pub helix_start_interval: u64,
    pub emission_duration: u64,
}

impl Default for DiskLayout {
    fn default() -> Self {
        Self {
            radius: 25.0,
            helix_count: 16,
            helix_start_interval: 20,
            emission_duration: 800,
        }
    }
}

/// Randomized helix around a unit axis pointing away from the disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixPattern {
    pub axis: NVec3,
    pub radius: f64,
    pub pitch: f64, // radians added per firing
    pub speed: f64,
    pub angle: f64,
    pub warm: bool, // above the plane
}

impl HelixPattern {
    pub fn random(side: f64, rng: &mut StdRng) -> Self {
        let axis = NVec3::new(
            (rng.gen::<f64>() - 0.5) * 1.2,
            0.6 + rng.gen::<f64>() * 0.8,
            side * (0.4 + rng.gen::<f64>() * 0.8),
        );
        Self {
            axis: safe_normalize3(&axis),
            radius: 5.0 + rng.gen::<f64>() * 12.0,
            pitch: 0.15 + rng.gen::<f64>() * 0.25,
            speed: 0.8 + rng.gen::<f64>() * 0.4,
            angle: 0.0,
            warm: side > 0.0,
        }
    }

    /// Two unit vectors perpendicular to the axis and to each other
    pub fn basis(&self) -> (NVec3, NVec3) {
        let a = self.axis;
        // pick a reference that is not parallel to the axis
        let p1 = if a.x.abs() < 0.9 {
            NVec3::new(0.0, a.z, -a.y)
        } else {
            NVec3::new(a.z, 0.0, -a.x)
        };
        let p1 = safe_normalize3(&p1);
        let p2 = a.cross(&p1);
        (p1, p2)
    }

    /// Step the helix angle and return the offset on the helix circle
    pub fn advance(&mut self) -> NVec3 {
        self.angle += self.pitch;
        let (p1, p2) = self.basis();
        (p1 * self.angle.cos() + p2 * self.angle.sin()) * self.radius
    }
}

#[derive(Debug, Clone)]
struct HelixSource {
    point: EmissionPoint,
    pattern: HelixPattern,
}

pub struct HelixDisk {
    layout: DiskLayout,
    sources: Vec<HelixSource>,
    is_active: bool,
    emission_timer: u64,
    pulse_phase: f64,
    active_helices: usize,
    state: EmitterState,
    rng: StdRng,
}

impl HelixDisk {
    pub fn new(layout: DiskLayout, rng: StdRng) -> Self {
        Self {
            layout,
            sources: Vec::new(),
            is_active: false,
            emission_timer: 0,
            pulse_phase: 0.0,
            active_helices: 0,
            state: EmitterState::Dormant,
            rng,
        }
    }

    pub fn helix_patterns(&self) -> Vec<HelixPattern> {
        self.sources.iter().map(|s| s.pattern).collect()
    }

    pub fn remaining_frames(&self) -> u64 {
        self.layout.emission_duration.saturating_sub(self.emission_timer)
    }

    fn generate_sources(&mut self) {
        let count = self.layout.helix_count;
        let mut sources = Vec::with_capacity(count);
        for i in 0..count {
            let angle = self.rng.gen::<f64>() * TAU;
            let radius = self.rng.gen::<f64>() * self.layout.radius * 0.8;
            let side = if i < count / 2 { 1.0 } else { -1.0 };
            let start = (i as u64 * self.layout.helix_start_interval) as f64;

            // points sit on the disk plane; only x varies
            let point = EmissionPoint::new(NVec3::new(angle.cos() * radius, 0.0, 0.0), side, start, 0);
            let pattern = HelixPattern::random(side, &mut self.rng);
            sources.push(HelixSource { point, pattern });
        }
        self.sources = sources;
    }
}

impl Emitter for HelixDisk {
    fn activate(&mut self) {
        self.is_active = true;
        self.emission_timer = 0;
        self.pulse_phase = 0.0;
        self.active_helices = 0;
        self.generate_sources();
        transition("disk", &mut self.state, EmitterState::Active);
        info!("disk activated with {} helices", self.sources.len());
    }

    fn update(&mut self) {
        if self.is_active && self.emission_timer < self.layout.emission_duration {
            self.emission_timer += 1;
            self.pulse_phase += ACTIVE_PULSE;
        } else if self.is_active {
            self.is_active = false;
            transition("disk", &mut self.state, EmitterState::Terminated);
        }

        if !self.is_active {
            self.pulse_phase += IDLE_PULSE;
        }
    }

    fn emit(&mut self, ctx: &EmissionContext) -> Vec<Particle> {
        if !self.is_active || self.emission_timer >= self.layout.emission_duration {
            return Vec::new();
        }

        let timer = self.emission_timer;
        let mut out = Vec::new();

        for (i, source) in self.sources.iter_mut().enumerate() {
            if source.point.try_activate(timer) {
                self.active_helices += 1;
                debug!("disk: helix {i} active at {timer}");
            }
            if !source.point.is_active || timer % FIRE_EVERY != i as u64 % FIRE_EVERY {
                continue;
            }

            source.point.record_emission(timer);
            let offset = source.pattern.advance();
            let spawn = source.point.offset + offset;
            let hue = if source.pattern.warm {
                30.0 + self.rng.gen::<f64>() * 90.0
            } else {
                180.0 + self.rng.gen::<f64>() * 100.0
            };
            out.push(helix_particle(spawn, &source.pattern, hue, i, ctx.params));
        }
        out
    }

    fn state(&self) -> EmitterState {
        self.state
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn emission_points(&self) -> Vec<EmissionPoint> {
        self.sources.iter().map(|s| s.point).collect()
    }

    fn view(&self) -> EmitterView {
        let points = if self.is_active {
            self.sources
                .iter()
                .filter(|s| s.point.is_active)
                .map(|s| PointView {
                    position: s.point.offset,
                    side: s.point.side,
                    helix_radius: Some(s.pattern.radius),
                })
                .collect()
        } else {
            Vec::new()
        };

        EmitterView {
            state: self.state,
            is_active: self.is_active,
            rotation: 0.0,
            pulse_phase: self.pulse_phase,
            points,
            total_points: self.sources.len(),
            shape: EmitterShape::Disk {
                radius: self.layout.radius,
                remaining_frames: self.remaining_frames(),
                active_helices: self.active_helices,
                total_helices: self.layout.helix_count,
            },
        }
    }
}

/// Particle at `spawn` moving along the ray from the disk centre through it
fn helix_particle(spawn: NVec3, pattern: &HelixPattern, hue: f64, index: usize, params: &Parameters) -> Particle {
    let mut p = Particle::at(spawn.x, spawn.y, spawn.z, params.trail_capacity);

    let velocity = if spawn.norm() > 0.0 {
        safe_normalize3(&spawn) * pattern.speed
    } else {
        pattern.axis * pattern.speed
    };
    p.velocity.x = velocity.x;
    p.velocity.y = velocity.y;
    p.z_velocity = velocity.z;

    p.radius = params.particle_radius;
    p.max_age = params.max_age;
    p.color = ParticleColor::hsl(hue, 85.0, 65.0);
    p.source = Some(SourceTag::Helix(index));
    p
}
