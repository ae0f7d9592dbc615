pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod schedule;
pub mod emitter;
pub mod galaxy;
pub mod disk;
pub mod forces;
pub mod integrator;
pub mod driver;
