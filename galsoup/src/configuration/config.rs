//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – emitter variant, step rate, optional seed
//! - [`ParametersConfig`] – slider values; anything omitted falls back to the variant preset
//! - [`GalaxyConfig`] / [`DiskConfig`] – structural emitter settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example galaxy scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   variant: galaxy          # or "disk"
//!   fps: 20.0                # omit to step once per rendered frame
//!
//! parameters:
//!   base_velocity: 6.0
//!   centripetal_force: 6.0
//!   field_gravity: 18.0      # arm attraction
//!   pair_gravity: 7.0        # particle-particle attraction
//!   emission_rate: 0.045
//!   decay_rate: 1200         # frames of ramp-down
//!   max_particles: 2000
//!   view_tilt: 0.0           # degrees
//!
//! galaxy:
//!   num_arms: 2
//!   emission_points_per_arm: 30
//!   arm_width: 1.0
//!   bulge_radius: 60.0
//!   bulge_height: 15.0
//! ```
//!
//! Values outside their useful range are clamped by [`ScenarioConfig::sanitized`]
//! rather than rejected.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::simulation::disk::DiskLayout;
use crate::simulation::emitter::EmitterLayout;
use crate::simulation::engine::{Engine, Variant};
use crate::simulation::galaxy::GalaxyLayout;
use crate::simulation::params::Parameters;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub variant: Variant,  // `galaxy` or `disk`
    pub fps: Option<f64>,  // fixed step rate; omitted -> once per rendered frame
    pub seed: Option<u64>, // omitted -> fresh entropy every run
}

/// Live-tunable parameters, all optional
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub base_velocity: Option<f64>,
    pub centripetal_force: Option<f64>,
    pub field_gravity: Option<f64>,
    pub pair_gravity: Option<f64>,
    pub emission_rate: Option<f64>,
    pub decay_rate: Option<f64>,
    pub max_particles: Option<f64>,
    pub view_tilt: Option<f64>,
}

/// Structural galaxy settings
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GalaxyConfig {
    pub num_arms: Option<usize>,
    pub emission_points_per_arm: Option<usize>,
    pub arm_width: Option<f64>,
    pub bulge_radius: Option<f64>,
    pub bulge_height: Option<f64>,
}

/// Structural disk settings
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DiskConfig {
    pub radius: Option<f64>,
    pub helix_count: Option<usize>,
    pub helix_start_interval: Option<u64>,
    pub emission_duration: Option<u64>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub galaxy: Option<GalaxyConfig>,
    pub disk: Option<DiskConfig>,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Clamp every value into a range the core can run with
    pub fn sanitized(mut self) -> Self {
        self.engine.fps = self.engine.fps.filter(|hz| *hz > 0.0);

        let p = &mut self.parameters;
        clamp_field("base_velocity", &mut p.base_velocity, 0.0, f64::MAX);
        clamp_field("centripetal_force", &mut p.centripetal_force, 0.0, f64::MAX);
        clamp_field("field_gravity", &mut p.field_gravity, 0.0, f64::MAX);
        clamp_field("pair_gravity", &mut p.pair_gravity, 0.0, f64::MAX);
        clamp_field("emission_rate", &mut p.emission_rate, 0.0, 1.0);
        clamp_field("decay_rate", &mut p.decay_rate, 0.0, u32::MAX as f64);
        clamp_field("max_particles", &mut p.max_particles, 0.0, 1.0e6);
        clamp_field("view_tilt", &mut p.view_tilt, -90.0, 90.0);

        if let Some(g) = self.galaxy.as_mut() {
            g.num_arms = g.num_arms.map(|n| n.max(1));
            g.emission_points_per_arm = g.emission_points_per_arm.map(|n| n.max(1));
            clamp_field("arm_width", &mut g.arm_width, 0.0, f64::MAX);
            clamp_field("bulge_radius", &mut g.bulge_radius, 0.0, f64::MAX);
            clamp_field("bulge_height", &mut g.bulge_height, 0.0, f64::MAX);
        }
        if let Some(d) = self.disk.as_mut() {
            clamp_field("radius", &mut d.radius, 0.0, f64::MAX);
        }
        self
    }

    pub fn engine(&self) -> Engine {
        Engine {
            variant: self.engine.variant,
            fps: self.engine.fps,
            seed: self.engine.seed,
        }
    }

    /// Variant preset with any configured overrides applied
    pub fn parameters(&self) -> Parameters {
        let mut params = Parameters::for_variant(self.engine.variant);
        let c = &self.parameters;
        if let Some(v) = c.base_velocity { params.base_velocity = v; }
        if let Some(v) = c.centripetal_force { params.centripetal_force = v; }
        if let Some(v) = c.field_gravity { params.field_gravity = v; }
        if let Some(v) = c.pair_gravity { params.pair_gravity = v; }
        if let Some(v) = c.emission_rate { params.emission_rate = v; }
        if let Some(v) = c.decay_rate { params.decay_rate = v as u32; }
        if let Some(v) = c.max_particles { params.max_particles = v as usize; }
        if let Some(v) = c.view_tilt { params.view_tilt = v; }
        params
    }

    pub fn layout(&self) -> EmitterLayout {
        match self.engine.variant {
            Variant::Galaxy => {
                let mut layout = GalaxyLayout::default();
                if let Some(g) = &self.galaxy {
                    if let Some(v) = g.num_arms { layout.num_arms = v; }
                    if let Some(v) = g.emission_points_per_arm { layout.emission_points_per_arm = v; }
                    if let Some(v) = g.arm_width { layout.arm_width = v; }
                    if let Some(v) = g.bulge_radius { layout.bulge_radius = v; }
                    if let Some(v) = g.bulge_height { layout.bulge_height = v; }
                }
                EmitterLayout::Galaxy(layout)
            }
            Variant::Disk => {
                let mut layout = DiskLayout::default();
                if let Some(d) = &self.disk {
                    if let Some(v) = d.radius { layout.radius = v; }
                    if let Some(v) = d.helix_count { layout.helix_count = v; }
                    if let Some(v) = d.helix_start_interval { layout.helix_start_interval = v; }
                    if let Some(v) = d.emission_duration { layout.emission_duration = v; }
                }
                EmitterLayout::Disk(layout)
            }
        }
    }
}

fn clamp_field(name: &str, value: &mut Option<f64>, min: f64, max: f64) {
    if let Some(v) = value.as_mut() {
        let clamped = if v.is_nan() { min } else { v.clamp(min, max) };
        if clamped != *v {
            warn!("scenario: {name} = {v} clamped to {clamped}");
            *v = clamped;
        }
    }
}
