pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleColor, SourceTag, Trail, NVec2, NVec3};
pub use simulation::params::{Parameters, DistanceMetric, CloseBoost};
pub use simulation::engine::{Engine, Variant};
pub use simulation::schedule::{EmissionSchedule, EmissionPhase};
pub use simulation::emitter::{Emitter, EmitterLayout, EmitterState, EmissionPoint, build_emitter};
pub use simulation::galaxy::{GalacticDisk, GalaxyLayout};
pub use simulation::disk::{HelixDisk, DiskLayout, HelixPattern};
pub use simulation::forces::{Force, ForceSet, PairwiseAttraction, ArmFieldAttraction};
pub use simulation::integrator::euler_integrator;
pub use simulation::driver::{Simulation, StepReport};

pub use configuration::config::{ConfigError, EngineConfig, ParametersConfig, GalaxyConfig, DiskConfig, ScenarioConfig};

pub use visualization::{projection::Projection, viewer::run_viewer};

pub use benchmark::benchmark::{bench_pairwise, bench_step};
