//! Particle sources
//!
//! Defines the [`Emitter`] trait implemented by the two disk variants, the
//! emission point record they share, and the read-only [`EmitterView`]
//! handed to the renderer each frame

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::disk::{DiskLayout, HelixDisk};
use super::engine::Variant;
use super::galaxy::{GalacticDisk, GalaxyLayout};
use super::params::Parameters;
use super::states::{NVec2, NVec3, Particle};

/// Emitter lifecycle as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    Dormant,    // not yet activated
    Active,     // emitting at full rate
    Decaying,   // emission ramping down (galaxy)
    Quiet,      // no emission, physics only (galaxy)
    Terminated, // finished emitting
}

/// Per-frame inputs for `Emitter::emit`
pub struct EmissionContext<'a> {
    pub frame: u64, // simulation frame count
    pub params: &'a Parameters,
}

/// A sub-source with its own activation clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionPoint {
    pub offset: NVec3,            // relative to the emitter origin, unrotated
    pub side: f64,                // +1 above the plane, -1 below
    pub activation_time: f64,     // emitter frame at which the point may light up
    pub is_active: bool,
    pub activated_at: Option<u64>,
    pub last_emission: u64,
    pub first_emission: Option<u64>,
    pub emissions: u64,
    pub layer: usize,
}

impl EmissionPoint {
    pub fn new(offset: NVec3, side: f64, activation_time: f64, layer: usize) -> Self {
        Self {
            offset,
            side,
            activation_time,
            is_active: false,
            activated_at: None,
            last_emission: 0,
            first_emission: None,
            emissions: 0,
            layer,
        }
    }

    /// Light the point up once `clock` reaches its activation time.
    /// Returns true only on the frame it transitions
    pub fn try_activate(&mut self, clock: u64) -> bool {
        if self.is_active || (clock as f64) < self.activation_time {
            return false;
        }
        self.is_active = true;
        self.activated_at = Some(clock);
        true
    }

    pub fn record_emission(&mut self, clock: u64) {
        self.last_emission = clock;
        self.first_emission.get_or_insert(clock);
        self.emissions += 1;
    }
}

/// A piece of emitter geometry that attracts particles, in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSegment {
    pub position: NVec2,
    pub radius: f64,
}

/// An active emission point, in world space, for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointView {
    pub position: NVec3,
    pub side: f64,
    pub helix_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmitterShape {
    Galaxy {
        core_radius: f64,
        bulge_radius: f64,
        bulge_height: f64,
        arm_reach: f64,
        arms: Vec<Vec<FieldSegment>>,
    },
    Disk {
        radius: f64,
        remaining_frames: u64,
        active_helices: usize,
        total_helices: usize,
    },
}

/// Snapshot of emitter state exposed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterView {
    pub state: EmitterState,
    pub is_active: bool,
    pub rotation: f64,
    pub pulse_phase: f64,
    pub points: Vec<PointView>,
    pub total_points: usize,
    pub shape: EmitterShape,
}

/// A rotating or pulsing source of particles
pub trait Emitter {
    /// Dormant -> Active, resetting the frame counters
    fn activate(&mut self);

    /// Advance timers, rotation and point activation by one frame
    fn update(&mut self);

    /// Particles produced this frame (possibly none)
    fn emit(&mut self, ctx: &EmissionContext) -> Vec<Particle>;

    fn state(&self) -> EmitterState;

    fn is_active(&self) -> bool;

    fn emission_points(&self) -> Vec<EmissionPoint>;

    /// Attracting geometry for the current frame
    fn field_segments(&self) -> Vec<FieldSegment> {
        Vec::new()
    }

    fn view(&self) -> EmitterView;
}

/// Structural emitter configuration; changing it regenerates the emitter
#[derive(Debug, Clone, PartialEq)]
pub enum EmitterLayout {
    Galaxy(GalaxyLayout),
    Disk(DiskLayout),
}

impl EmitterLayout {
    pub fn variant(&self) -> Variant {
        match self {
            EmitterLayout::Galaxy(_) => Variant::Galaxy,
            EmitterLayout::Disk(_) => Variant::Disk,
        }
    }

    pub fn default_for(variant: Variant) -> Self {
        match variant {
            Variant::Galaxy => EmitterLayout::Galaxy(GalaxyLayout::default()),
            Variant::Disk => EmitterLayout::Disk(DiskLayout::default()),
        }
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Construct a fresh, dormant emitter for `layout`
pub fn build_emitter(layout: &EmitterLayout, seed: Option<u64>) -> Box<dyn Emitter + Send + Sync> {
    let rng = make_rng(seed);
    match layout {
        EmitterLayout::Galaxy(l) => Box::new(GalacticDisk::new(l.clone(), rng)),
        EmitterLayout::Disk(l) => Box::new(HelixDisk::new(l.clone(), rng)),
    }
}

/// Store `next` and log when it differs from the current state
pub(crate) fn transition(name: &str, current: &mut EmitterState, next: EmitterState) {
    if *current != next {
        debug!("{name}: {current:?} -> {next:?}");
        *current = next;
    }
}
