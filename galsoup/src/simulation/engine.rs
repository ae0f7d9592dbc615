//! High-level runtime engine settings
//!
//! Selects the emitter variant, the stepping cadence and the optional
//! RNG seed used when building a `Simulation`

use serde::Deserialize;

/// Which emitter drives the simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Galaxy, // rotating galactic disk with a decaying bulge
    Disk,   // pulsing disk with helix streamers
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub variant: Variant,
    pub fps: Option<f64>, // fixed step rate; None = once per rendered frame
    pub seed: Option<u64>, // None = entropy
}
