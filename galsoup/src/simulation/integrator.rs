//! Fixed-step time integration for the particle soup
//!
//! Semi-implicit (symplectic) Euler with a damping factor just under 1,
//! driven by a `ForceSet` and `Parameters`

use super::emitter::FieldSegment;
use super::forces::{ForceContext, ForceSet};
use super::params::Parameters;
use super::states::{NVec2, Particle};

/// Accumulate all forces, apply them, then advance every particle one step.
/// Forces are fully applied before any particle moves
pub fn euler_integrator(particles: &mut [Particle], forces: &ForceSet, segments: &[FieldSegment], params: &Parameters) {
    let n = particles.len();
    if n == 0 { // no particles, return
        return;
    }

    let mut buffer = vec![NVec2::zeros(); n];
    let ctx = ForceContext {
        particles: &*particles,
        segments,
    };
    forces.accumulate_forces(&ctx, &mut buffer);

    for (p, f) in particles.iter_mut().zip(buffer.iter()) {
        p.apply_force(*f);
    }

    integrate(particles, params);
}

/// One symplectic Euler step per particle; consumes and clears acceleration
pub fn integrate(particles: &mut [Particle], params: &Parameters) {
    let dt = params.dt;

    for p in particles.iter_mut() {
        p.trail.push(p.position3());

        // Kick then drift: v_n+1 = v_n + a dt, x_n+1 = x_n + v_n+1 dt
        p.velocity += p.acceleration * dt;
        p.position += p.velocity * dt;
        p.z += p.z_velocity * dt;

        p.velocity *= params.damping;
        p.z_velocity *= params.damping;

        p.acceleration = NVec2::zeros();
        p.age += 1;
    }
}
