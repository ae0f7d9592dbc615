//! Force contributors for the particle soup
//!
//! Defines the [`Force`] trait and a [`ForceSet`] that sums every term into a
//! per-particle force buffer. Terms:
//! - `PairwiseAttraction`: stylized inverse-square pull between particles
//! - `ArmFieldAttraction`: pull toward nearby emitter geometry
//!
//! The whole buffer is filled before anything integrates, so the result does
//! not depend on particle order.

use super::emitter::FieldSegment;
use super::params::{CloseBoost, DistanceMetric, Parameters};
use super::states::{NVec2, Particle};
use super::vector::PlanarOps;

/// Everything a force term may read for one frame
pub struct ForceContext<'a> {
    pub particles: &'a [Particle],
    pub segments: &'a [FieldSegment],
}

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per particle
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Pairwise attraction always, arm field only when it has a non-zero constant
    pub fn from_parameters(params: &Parameters) -> Self {
        let mut set = ForceSet::new().with(PairwiseAttraction {
            gravity: params.pair_gravity,
            min_distance: params.min_distance,
            metric: params.metric,
            close_boost: params.close_boost,
        });
        if params.field_gravity != 0.0 {
            set = set.with(ArmFieldAttraction::new(params.field_gravity));
        }
        set
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total forces for all particles
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, ctx: &ForceContext, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.accumulate(ctx, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A source of in-plane force
/// Implementations add their contribution into `out[i]` for each particle
pub trait Force {
    fn accumulate(&self, ctx: &ForceContext, out: &mut [NVec2]);
}

/// Inverse-square pull between every pair of particles
/// Pairs closer than `min_distance` feel nothing
pub struct PairwiseAttraction {
    pub gravity: f64,
    pub min_distance: f64,
    pub metric: DistanceMetric,
    pub close_boost: Option<CloseBoost>,
}

impl PairwiseAttraction {
    /// Force on `a` due to `b`; `b` feels exactly the negation
    pub fn pair_force(&self, a: &Particle, b: &Particle) -> NVec2 {
        let distance = match self.metric {
            DistanceMetric::Planar => a.position.distance(&b.position),
            DistanceMetric::Spatial => (b.position3() - a.position3()).norm(),
        };
        if distance < self.min_distance {
            return NVec2::zeros();
        }

        let magnitude = self.gravity * a.mass * b.mass / (distance * distance);

        // direction is in-plane even when the distance is spatial
        let direction = (b.position - a.position).safe_normalize();
        let force = direction * magnitude;

        match self.close_boost {
            Some(boost) if distance < boost.threshold => force + force * boost.factor,
            _ => force,
        }
    }
}

impl Force for PairwiseAttraction {
    fn accumulate(&self, ctx: &ForceContext, out: &mut [NVec2]) {
        let particles = ctx.particles;
        let n = particles.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.pair_force(&particles[i], &particles[j]);
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}

/// Pull toward emitter geometry within a band around each segment
/// A segment attracts when `min_distance < d < reach * segment.radius`
pub struct ArmFieldAttraction {
    pub gravity: f64,
    pub min_distance: f64,
    pub reach: f64,
}

impl ArmFieldAttraction {
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            min_distance: 5.0,
            reach: 3.0,
        }
    }

    /// Net field force at `position`
    pub fn field_force(&self, position: &NVec2, segments: &[FieldSegment]) -> NVec2 {
        let mut total = NVec2::zeros();
        for seg in segments {
            let d = position.distance(&seg.position);
            if d < seg.radius * self.reach && d > self.min_distance {
                let direction = (seg.position - position).safe_normalize();
                total += direction * (self.gravity / (d * d));
            }
        }
        total
    }
}

impl Force for ArmFieldAttraction {
    fn accumulate(&self, ctx: &ForceContext, out: &mut [NVec2]) {
        if ctx.segments.is_empty() {
            return;
        }
        for (p, f) in ctx.particles.iter().zip(out.iter_mut()) {
            *f += self.field_force(&p.position, ctx.segments);
        }
    }
}
