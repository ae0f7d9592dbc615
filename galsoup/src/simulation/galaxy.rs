//! Rotating galactic disk
//!
//! A central core with trailing spiral arms (field geometry only) and a
//! layered bulge of emission points on both sides of the plane. Emission
//! follows [`EmissionSchedule`]: full rate, logarithmic decay, a quiet tail,
//! then termination. Every successful trigger ejects a mirrored pair.

use std::f64::consts::{PI, TAU};

use log::info;
use rand::rngs::StdRng;
use rand::Rng;

use super::emitter::{
    transition, EmissionContext, EmissionPoint, Emitter, EmitterShape, EmitterState, EmitterView,
    FieldSegment, PointView,
};
use super::params::Parameters;
use super::schedule::{EmissionPhase, EmissionSchedule};
use super::states::{NVec2, NVec3, Particle, ParticleColor, SourceTag};
use super::vector::PlanarOps;

/// Radians per frame, counter-clockwise in simulation space
pub const ROTATION_SPEED: f64 = 0.01;
pub const CORE_RADIUS: f64 = 15.0;
pub const ARM_REACH: f64 = 120.0;
const ARM_SEGMENTS: usize = 20;
const ARM_SWEEP: f64 = 1.2; // radians the arm trails behind its base angle
const BULGE_LAYERS: usize = 3;
const ESCAPE_JITTER: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyLayout {
    pub num_arms: usize,
    pub emission_points_per_arm: usize,
    pub arm_width: f64,
    pub bulge_radius: f64,
    pub bulge_height: f64,
}

impl Default for GalaxyLayout {
    fn default() -> Self {
        Self {
            num_arms: 2,
            emission_points_per_arm: 30,
            arm_width: 1.0,
            bulge_radius: 60.0,
            bulge_height: 15.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArmSegment {
    pub offset: NVec2, // unrotated position
    pub radius: f64,   // width, also sets the field reach
}

#[derive(Debug, Clone)]
pub struct Arm {
    pub segments: Vec<ArmSegment>,
}

pub struct GalacticDisk {
    layout: GalaxyLayout,
    arms: Vec<Arm>,
    points: Vec<EmissionPoint>,
    rotation: f64,
    rotation_speed: f64,
    is_active: bool,
    frame_count: u64,
    pulse_phase: f64,
    state: EmitterState,
    rng: StdRng,
}

impl GalacticDisk {
    pub fn new(layout: GalaxyLayout, mut rng: StdRng) -> Self {
        let arms = build_arms(&layout);
        let points = build_bulge_points(&layout, &mut rng);
        Self {
            layout,
            arms,
            points,
            rotation: 0.0,
            rotation_speed: ROTATION_SPEED,
            is_active: false,
            frame_count: 0,
            pulse_phase: 0.0,
            state: EmitterState::Dormant,
            rng,
        }
    }

    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Two particles from point `idx` with mirrored random directions
    fn spawn_pair(&mut self, idx: usize, params: &Parameters) -> [Particle; 2] {
        let point = self.points[idx];
        let world = NVec2::new(point.offset.x, point.offset.y).rotated(self.rotation);

        let escape_speed = params.base_velocity + self.rng.gen::<f64>() * ESCAPE_JITTER;

        // tangential speed of the point, redirected radially outward
        let rotational_speed = self.rotation_speed * world.norm();
        let base = world.safe_normalize() * (rotational_speed * params.centripetal_force);

        let azimuth = self.rng.gen_range(0.0..TAU);
        let elevation = (self.rng.gen::<f64>() - 0.5) * PI;
        let dir = NVec3::new(
            elevation.cos() * azimuth.cos(),
            elevation.cos() * azimuth.sin(),
            elevation.sin(),
        ) * escape_speed;

        let spawn = |random: NVec3, elevation: f64| {
            let mut p = Particle::at(world.x, world.y, point.offset.z, params.trail_capacity);
            p.velocity = base + NVec2::new(random.x, random.y) * 0.5;
            p.z_velocity = random.z;
            p.radius = params.particle_radius;
            p.max_age = params.max_age;
            p.color = elevation_color(elevation, random.z);
            p.source = Some(SourceTag::Bulge { layer: point.layer });
            p
        };

        [spawn(dir, elevation), spawn(-dir, -elevation)]
    }
}

impl Emitter for GalacticDisk {
    fn activate(&mut self) {
        self.is_active = true;
        self.frame_count = 0;
        self.pulse_phase = 0.0;
        transition("galaxy", &mut self.state, EmitterState::Active);
        info!("galaxy activated with {} bulge points", self.points.len());
    }

    fn update(&mut self) {
        if !self.is_active {
            return;
        }
        self.rotation += self.rotation_speed;
        self.frame_count += 1;
        self.pulse_phase += 0.05;

        for point in self.points.iter_mut() {
            point.try_activate(self.frame_count);
        }
    }

    fn emit(&mut self, ctx: &EmissionContext) -> Vec<Particle> {
        if !self.is_active {
            return Vec::new();
        }

        let schedule = EmissionSchedule::new(u64::from(ctx.params.decay_rate));
        let next = match schedule.phase(ctx.frame) {
            EmissionPhase::Full => EmitterState::Active,
            EmissionPhase::Decaying { .. } => EmitterState::Decaying,
            EmissionPhase::Quiet => EmitterState::Quiet,
            EmissionPhase::Terminated => EmitterState::Terminated,
        };
        transition("galaxy", &mut self.state, next);

        let Some(min_delay) = schedule.min_delay(ctx.frame) else {
            return Vec::new();
        };
        let chance = schedule.emission_chance(ctx.params.emission_rate, ctx.frame);

        let mut out = Vec::new();
        for idx in 0..self.points.len() {
            if !self.points[idx].is_active {
                continue;
            }
            let roll: f64 = self.rng.gen();
            let since_last = self.frame_count.saturating_sub(self.points[idx].last_emission);
            if roll < chance && since_last > min_delay {
                self.points[idx].record_emission(self.frame_count);
                out.extend(self.spawn_pair(idx, ctx.params));
            }
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
        self.points.clone()
    }

    fn field_segments(&self) -> Vec<FieldSegment> {
        self.arms
            .iter()
            .flat_map(|arm| arm.segments.iter())
            .map(|s| FieldSegment {
                position: s.offset.rotated(self.rotation),
                radius: s.radius,
            })
            .collect()
    }

    fn view(&self) -> EmitterView {
        let arms = self
            .arms
            .iter()
            .map(|arm| {
                arm.segments
                    .iter()
                    .map(|s| FieldSegment {
                        position: s.offset.rotated(self.rotation),
                        radius: s.radius,
                    })
                    .collect()
            })
            .collect();

        let points = if self.is_active {
            self.points
                .iter()
                .filter(|p| p.is_active)
                .map(|p| {
                    let xy = NVec2::new(p.offset.x, p.offset.y).rotated(self.rotation);
                    PointView {
                        position: NVec3::new(xy.x, xy.y, p.offset.z),
                        side: p.side,
                        helix_radius: None,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        EmitterView {
            state: self.state,
            is_active: self.is_active,
            rotation: self.rotation,
            pulse_phase: self.pulse_phase,
            points,
            total_points: self.points.len(),
            shape: EmitterShape::Galaxy {
                core_radius: CORE_RADIUS,
                bulge_radius: self.layout.bulge_radius,
                bulge_height: self.layout.bulge_height,
                arm_reach: ARM_REACH,
                arms,
            },
        }
    }
}

// helpers ===========================================================================

/// Blue-to-cyan by elevation, brighter for fast vertical motion
fn elevation_color(elevation: f64, z_velocity: f64) -> ParticleColor {
    let hue = ((elevation + PI / 2.0) / PI) * 60.0 + 200.0;
    let lightness = (60.0 + z_velocity.abs() * 20.0).min(80.0);
    ParticleColor::hsl(hue, 70.0, lightness)
}

/// Evenly spaced trailing spiral arms, widest at the core
fn build_arms(layout: &GalaxyLayout) -> Vec<Arm> {
    let arm_count = layout.num_arms.max(1);
    let step = TAU / arm_count as f64;

    (0..arm_count)
        .map(|arm_index| {
            let base_angle = arm_index as f64 * step;
            let segments = (0..ARM_SEGMENTS)
                .map(|i| {
                    let t = i as f64 / (ARM_SEGMENTS - 1) as f64;
                    let radius = CORE_RADIUS + t * ARM_REACH;
                    let angle = base_angle - t * ARM_SWEEP;
                    ArmSegment {
                        offset: NVec2::new(angle.cos() * radius, angle.sin() * radius),
                        radius: (12.0 - t * 8.0) * layout.arm_width,
                    }
                })
                .collect();
            Arm { segments }
        })
        .collect()
}

/// Concentric bulge layers, one point above and one below per angular slot
fn build_bulge_points(layout: &GalaxyLayout, rng: &mut StdRng) -> Vec<EmissionPoint> {
    let total = layout.emission_points_per_arm * layout.num_arms;
    let per_layer = total.div_ceil(BULGE_LAYERS);
    let mut points = Vec::with_capacity(per_layer * BULGE_LAYERS * 2);

    for layer in 0..BULGE_LAYERS {
        let layer_radius = (layer + 1) as f64 * (layout.bulge_radius / BULGE_LAYERS as f64);

        for i in 0..per_layer {
            let angle = (i as f64 / per_layer as f64) * TAU;
            let radius = layer_radius + (rng.gen::<f64>() - 0.5) * layer_radius * 0.3;

            for side in [-1.0, 1.0] {
                let z = (rng.gen::<f64>() - 0.5) * layout.bulge_height * 0.5;
                let activation_time = rng.gen::<f64>() * 40.0 + 20.0;
                points.push(EmissionPoint::new(
                    NVec3::new(angle.cos() * radius, angle.sin() * radius, z),
                    side,
                    activation_time,
                    layer,
                ));
            }
        }
    }
    points
}
