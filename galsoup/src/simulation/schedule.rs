//! Emission timing for the galaxy variant
//!
//! Full rate until `full_emission_time`, a logarithmic ramp-down over
//! `decay_frames`, a quiet tail of `quiet_frames` where only physics runs,
//! then termination. All times are simulation frames since activation.

use std::f64::consts::E;

/// Frames of full-rate emission (two minutes at 20 fps)
pub const FULL_EMISSION_TIME: u64 = 2400;

/// Frames of physics-only tail after the decay ends
pub const QUIET_FRAMES: u64 = 100;

/// Lowest time factor reached during the decay ramp
pub const MIN_TIME_FACTOR: f64 = 0.05;

/// Base minimum gap, in emitter frames, between two emissions from one point
pub const BASE_MIN_DELAY: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmissionPhase {
    Full,
    Decaying { progress: f64 },
    Quiet,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionSchedule {
    pub full_emission_time: u64,
    pub decay_frames: u64,
    pub quiet_frames: u64,
}

impl EmissionSchedule {
    pub fn new(decay_frames: u64) -> Self {
        Self {
            full_emission_time: FULL_EMISSION_TIME,
            decay_frames,
            quiet_frames: QUIET_FRAMES,
        }
    }

    pub fn decay_end(&self) -> u64 {
        self.full_emission_time + self.decay_frames
    }

    pub fn quiet_end(&self) -> u64 {
        self.decay_end() + self.quiet_frames
    }

    pub fn phase(&self, frame: u64) -> EmissionPhase {
        if frame < self.full_emission_time {
            EmissionPhase::Full
        } else if frame < self.decay_end() {
            let elapsed = (frame - self.full_emission_time) as f64;
            EmissionPhase::Decaying {
                progress: elapsed / self.decay_frames as f64,
            }
        } else if frame < self.quiet_end() {
            EmissionPhase::Quiet
        } else {
            EmissionPhase::Terminated
        }
    }

    /// Multiplier on the emission chance: 1 at full rate, log ramp to 0.05, then 0
    pub fn time_factor(&self, frame: u64) -> f64 {
        match self.phase(frame) {
            EmissionPhase::Full => 1.0,
            EmissionPhase::Decaying { progress } => {
                let ramp = (1.0 + (1.0 - progress) * (E - 1.0)).ln() / E;
                ramp.max(MIN_TIME_FACTOR)
            }
            EmissionPhase::Quiet | EmissionPhase::Terminated => 0.0,
        }
    }

    /// Per-point emission probability for this frame
    pub fn emission_chance(&self, rate: f64, frame: u64) -> f64 {
        rate * self.time_factor(frame)
    }

    /// Minimum frames between emissions from one point; `None` means no emission at all
    pub fn min_delay(&self, frame: u64) -> Option<u64> {
        let factor = self.time_factor(frame);
        if factor <= 0.0 {
            return None;
        }
        Some((BASE_MIN_DELAY / factor).floor() as u64)
    }
}
