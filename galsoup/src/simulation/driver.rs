//! The simulation context
//!
//! `Simulation` owns the particle population, the emitter, the force set
//! and all parameters, and runs one frame at a time:
//! update emitter -> emit -> cap -> forces -> integrate -> cull.
//!
//! It is inserted into Bevy as a `Resource`; the viewer decides when to call
//! [`Simulation::step`] (see [`Simulation::should_step`]) and reads
//! [`Simulation::frame_view`] to draw

use bevy::prelude::Resource;
use log::{info, trace};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::emitter::{build_emitter, EmissionContext, Emitter, EmitterLayout, EmitterState, EmitterView};
use crate::simulation::engine::{Engine, Variant};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::Particle;

/// What one call to `step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub frame: u64,
    pub emitted: usize,
    pub evicted: usize, // dropped by the population cap
    pub culled: usize,  // dropped for age or distance
    pub population: usize,
}

/// Read-only state handed to the renderer
pub struct FrameView<'a> {
    pub variant: Variant,
    pub frame: u64,
    pub running: bool,
    pub paused: bool,
    pub view_tilt: f64,
    pub perspective: f64,
    pub particles: &'a [Particle],
    pub emitter: EmitterView,
}

#[derive(Resource)]
pub struct Simulation {
    pub engine: Engine,
    parameters: Parameters,
    layout: EmitterLayout,
    emitter: Box<dyn Emitter + Send + Sync>,
    forces: ForceSet,
    particles: Vec<Particle>,
    frame_count: u64,
    running: bool,
    paused: bool,
}

impl Simulation {
    pub fn new(engine: Engine, parameters: Parameters, layout: EmitterLayout) -> Self {
        let emitter = build_emitter(&layout, engine.seed);
        let forces = ForceSet::from_parameters(&parameters);
        Self {
            engine,
            parameters,
            layout,
            emitter,
            forces,
            particles: Vec::new(),
            frame_count: 0,
            running: false,
            paused: false,
        }
    }

    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        Self::new(cfg.engine(), cfg.parameters(), cfg.layout())
    }

    // lifecycle ============================================================================

    /// Activate the emitter and begin stepping; no-op while already running
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.paused = false;
        self.emitter.activate();
        info!("simulation started ({:?})", self.engine.variant);
    }

    pub fn pause(&mut self) {
        if self.running && !self.paused {
            self.paused = true;
            info!("simulation paused at frame {}", self.frame_count);
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            info!("simulation resumed at frame {}", self.frame_count);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Drop every particle and rebuild a dormant emitter
    pub fn reset(&mut self) {
        self.running = false;
        self.paused = false;
        self.particles.clear();
        self.emitter = build_emitter(&self.layout, self.engine.seed);
        self.frame_count = 0;
        info!("simulation reset");
    }

    /// Reset, then start again if we were running
    fn regenerate(&mut self) {
        let was_running = self.running;
        self.reset();
        if was_running {
            self.start();
        }
    }

    // configuration ========================================================================

    /// Live update of non-structural parameters; particles are kept
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.forces = ForceSet::from_parameters(&parameters);
        self.parameters = parameters;
    }

    /// Structural change: the emitter and population are regenerated.
    /// Switching variant also swaps in that variant's parameter preset
    pub fn set_layout(&mut self, layout: EmitterLayout) {
        if layout == self.layout {
            return;
        }
        let variant = layout.variant();
        info!("regenerating {:?} emitter", variant);
        if variant != self.engine.variant {
            info!("variant changed to {variant:?}, loading its parameter preset");
            self.engine.variant = variant;
            self.set_parameters(Parameters::for_variant(variant));
        }
        self.layout = layout;
        self.regenerate();
    }

    // stepping =============================================================================

    /// Whether an external scheduler should call `step` this tick
    pub fn should_step(&self) -> bool {
        self.running && !self.paused
    }

    /// Advance one frame
    pub fn step(&mut self) -> StepReport {
        // (1) emitter timers
        self.emitter.update();

        // (2) new particles
        let ctx = EmissionContext {
            frame: self.frame_count,
            params: &self.parameters,
        };
        let fresh = self.emitter.emit(&ctx);
        let emitted = fresh.len();
        self.particles.extend(fresh);

        // (3) population cap
        let evicted = enforce_cap(&mut self.particles, self.parameters.max_particles);

        // (4) + (5) forces then integration
        let segments = self.emitter.field_segments();
        euler_integrator(&mut self.particles, &self.forces, &segments, &self.parameters);

        // (6) age / distance culling
        let culled = cull(&mut self.particles, self.parameters.cull_distance);

        let report = StepReport {
            frame: self.frame_count,
            emitted,
            evicted,
            culled,
            population: self.particles.len(),
        };
        self.frame_count += 1;

        trace!("{report:?}");
        report
    }

    // accessors ============================================================================

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            variant: self.engine.variant,
            frame: self.frame_count,
            running: self.running,
            paused: self.paused,
            view_tilt: self.parameters.view_tilt,
            perspective: self.parameters.perspective,
            particles: &self.particles,
            emitter: self.emitter.view(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn emitter(&self) -> &(dyn Emitter + Send + Sync) {
        self.emitter.as_ref()
    }

    pub fn emitter_state(&self) -> EmitterState {
        self.emitter.state()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn layout(&self) -> &EmitterLayout {
        &self.layout
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Keep only the most recent `cap` particles; returns how many were dropped
pub fn enforce_cap(particles: &mut Vec<Particle>, cap: usize) -> usize {
    if particles.len() <= cap {
        return 0;
    }
    let excess = particles.len() - cap;
    particles.drain(..excess);
    excess
}

/// Remove particles past their age cap or beyond `cull_distance` in-plane
pub fn cull(particles: &mut Vec<Particle>, cull_distance: f64) -> usize {
    let before = particles.len();
    particles.retain(|p| !p.is_expired() && p.position.norm() <= cull_distance);
    before - particles.len()
}
