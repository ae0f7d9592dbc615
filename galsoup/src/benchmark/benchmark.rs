use std::time::Instant;

use crate::simulation::driver::Simulation;
use crate::simulation::emitter::EmitterLayout;
use crate::simulation::engine::{Engine, Variant};
use crate::simulation::forces::{Force, ForceContext, PairwiseAttraction};
use crate::simulation::params::{DistanceMetric, Parameters};
use crate::simulation::states::{NVec2, Particle};

/// Helper to build a deterministic cloud of `n` particles
fn make_particles(n: usize) -> Vec<Particle> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            Particle::at(
                (i_f * 0.37).sin() * 200.0,
                (i_f * 0.13).cos() * 200.0,
                (i_f * 0.07).sin() * 20.0,
                0,
            )
        })
        .collect()
}

/// Time one pairwise sweep for growing populations, planar vs spatial distance
pub fn bench_pairwise() {
    let ns = [200, 400, 800, 1600, 3200];

    for n in ns {
        let particles = make_particles(n);
        let ctx = ForceContext {
            particles: &particles,
            segments: &[],
        };
        let mut out = vec![NVec2::zeros(); n];

        let planar = PairwiseAttraction {
            gravity: 7.0,
            min_distance: 8.0,
            metric: DistanceMetric::Planar,
            close_boost: None,
        };
        let disk = Parameters::disk();
        let spatial = PairwiseAttraction {
            gravity: disk.pair_gravity,
            min_distance: disk.min_distance,
            metric: DistanceMetric::Spatial,
            close_boost: disk.close_boost,
        };

        // Warm up
        planar.accumulate(&ctx, &mut out);

        let t0 = Instant::now();
        planar.accumulate(&ctx, &mut out);
        let dt_planar = t0.elapsed().as_secs_f64();

        out.fill(NVec2::zeros());
        let t1 = Instant::now();
        spatial.accumulate(&ctx, &mut out);
        let dt_spatial = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, planar = {dt_planar:8.6} s, spatial = {dt_spatial:8.6} s");
    }
}

/// Average cost of a full `Simulation::step` as the galaxy fills up to its cap
pub fn bench_step() {
    let steps = 3000;
    let report_every = 500;

    let engine = Engine {
        variant: Variant::Galaxy,
        fps: None,
        seed: Some(42),
    };
    let mut params = Parameters::galaxy();
    params.emission_rate = 0.5;
    let mut sim = Simulation::new(engine, params, EmitterLayout::default_for(Variant::Galaxy));
    sim.start();

    println!("frame,population,ms_per_step");
    let mut t0 = Instant::now();
    for frame in 1..=steps {
        sim.step();
        if frame % report_every == 0 {
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / report_every as f64;
            println!("{},{},{:.4}", frame, sim.particles().len(), ms);
            t0 = Instant::now();
        }
    }
}
