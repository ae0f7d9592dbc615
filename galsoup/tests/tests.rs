use galsoup::simulation::states::{NVec2, NVec3, Particle};
use galsoup::simulation::params::{DistanceMetric, Parameters};
use galsoup::simulation::engine::{Engine, Variant};
use galsoup::simulation::emitter::{EmissionContext, Emitter, EmitterLayout, EmitterState, FieldSegment};
use galsoup::simulation::galaxy::{GalacticDisk, GalaxyLayout};
use galsoup::simulation::disk::{DiskLayout, HelixDisk};
use galsoup::simulation::forces::{ArmFieldAttraction, Force, ForceContext, ForceSet, PairwiseAttraction};
use galsoup::simulation::integrator::integrate;
use galsoup::simulation::driver::{cull, enforce_cap, Simulation};
use galsoup::simulation::emitter::make_rng;
use galsoup::configuration::config::ScenarioConfig;

/// Particle at rest with unit mass
pub fn particle(x: f64, y: f64, z: f64) -> Particle {
    Particle::at(x, y, z, 4)
}

pub fn pairwise(params: &Parameters) -> PairwiseAttraction {
    PairwiseAttraction {
        gravity: params.pair_gravity,
        min_distance: params.min_distance,
        metric: params.metric,
        close_boost: params.close_boost,
    }
}

/// Seeded simulation for `variant` with its preset parameters
pub fn seeded_sim(variant: Variant, params: Parameters, layout: EmitterLayout) -> Simulation {
    let engine = Engine {
        variant,
        fps: None,
        seed: Some(7),
    };
    Simulation::new(engine, params, layout)
}

// ==================================================================================
// Pairwise attraction
// ==================================================================================

#[test]
fn pairwise_forces_are_equal_and_opposite() {
    let params = Parameters::galaxy();
    let set = ForceSet::new().with(pairwise(&params));
    let particles = vec![
        particle(0.0, 0.0, 0.0),
        particle(30.0, 5.0, 2.0),
        particle(-12.0, 40.0, -3.0),
        particle(50.0, -20.0, 0.0),
    ];
    let ctx = ForceContext {
        particles: &particles,
        segments: &[],
    };
    let mut out = vec![NVec2::zeros(); particles.len()];
    set.accumulate_forces(&ctx, &mut out);

    let net: NVec2 = out.iter().sum();
    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);

    let term = pairwise(&params);
    let f01 = term.pair_force(&particles[0], &particles[1]);
    let f10 = term.pair_force(&particles[1], &particles[0]);
    assert!((f01 + f10).norm() < 1e-15);
}

#[test]
fn pairwise_points_toward_other_particle() {
    let params = Parameters::galaxy();
    let term = pairwise(&params);
    let a = particle(0.0, 0.0, 0.0);
    let b = particle(20.0, 0.0, 0.0);

    let f = term.pair_force(&a, &b);
    assert!(f.x > 0.0);
    assert!(f.y.abs() < 1e-15);
    // G m m / d^2
    assert!((f.x - 7.0 / 400.0).abs() < 1e-12);
}

#[test]
fn pairwise_switches_off_below_min_distance() {
    let params = Parameters::galaxy();
    let term = pairwise(&params);
    let origin = particle(0.0, 0.0, 0.0);

    let inside = term.pair_force(&origin, &particle(params.min_distance - 1e-6, 0.0, 0.0));
    let outside = term.pair_force(&origin, &particle(params.min_distance + 1e-6, 0.0, 0.0));

    assert_eq!(inside, NVec2::zeros());
    assert!(outside.norm() > 0.0);

    let a = particle(0.0, 0.0, 0.0);
    let b = particle(params.min_distance + 1e-6, 0.0, 0.0);
    assert_eq!(term.pair_force(&a, &b), -term.pair_force(&b, &a));
}

#[test]
fn planar_metric_ignores_height() {
    let params = Parameters::galaxy();
    assert_eq!(params.metric, DistanceMetric::Planar);
    let term = pairwise(&params);
    let origin = particle(0.0, 0.0, 0.0);

    let flat = term.pair_force(&origin, &particle(10.0, 0.0, 0.0));
    let raised = term.pair_force(&origin, &particle(10.0, 0.0, 50.0));
    assert_eq!(flat, raised);
}

#[test]
fn disk_close_boost_triples_the_force() {
    let params = Parameters::disk();
    let boosted = pairwise(&params);
    let mut plain = pairwise(&params);
    plain.close_boost = None;

    let a = particle(0.0, 0.0, 0.0);
    let near = particle(6.0, 0.0, 8.0); // spatial distance 10
    let fb = boosted.pair_force(&a, &near);
    let fp = plain.pair_force(&a, &near);
    assert!((fp.x - 20.0 / 100.0).abs() < 1e-12); // spatial distance, in-plane direction
    assert!((fb.x - 3.0 * fp.x).abs() < 1e-12);

    let far = particle(30.0, 0.0, 0.0);
    assert_eq!(boosted.pair_force(&a, &far), plain.pair_force(&a, &far));
}

// ==================================================================================
// Arm field
// ==================================================================================

#[test]
fn arm_field_only_acts_inside_its_band() {
    let field = ArmFieldAttraction::new(18.0);
    let segments = [FieldSegment {
        position: NVec2::new(0.0, 0.0),
        radius: 4.0, // band is (5, 12)
    }];

    let too_close = field.field_force(&NVec2::new(4.0, 0.0), &segments);
    let in_band = field.field_force(&NVec2::new(10.0, 0.0), &segments);
    let too_far = field.field_force(&NVec2::new(13.0, 0.0), &segments);

    assert_eq!(too_close, NVec2::zeros());
    assert_eq!(too_far, NVec2::zeros());
    assert!(in_band.x < 0.0, "field should pull toward the segment");
    assert!((in_band.x + 18.0 / 100.0).abs() < 1e-12);
}

#[test]
fn arm_field_is_skipped_without_segments() {
    let field = ArmFieldAttraction::new(18.0);
    let particles = vec![particle(10.0, 0.0, 0.0)];
    let ctx = ForceContext {
        particles: &particles,
        segments: &[],
    };
    let mut out = vec![NVec2::zeros(); 1];
    field.accumulate(&ctx, &mut out);
    assert_eq!(out[0], NVec2::zeros());
}

#[test]
fn force_set_from_parameters_drops_zero_field() {
    assert_eq!(ForceSet::from_parameters(&Parameters::galaxy()).len(), 2);
    assert_eq!(ForceSet::from_parameters(&Parameters::disk()).len(), 1);
}

// ==================================================================================
// Integration, trails, ageing
// ==================================================================================

#[test]
fn integrate_is_kick_then_drift_with_damping() {
    let params = Parameters::galaxy();
    let mut particles = vec![particle(0.0, 0.0, 1.0)];
    particles[0].velocity = NVec2::new(1.0, 0.0);
    particles[0].z_velocity = 0.5;
    particles[0].apply_force(NVec2::new(0.0, 2.0));

    integrate(&mut particles, &params);

    let p = &particles[0];
    assert!((p.position - NVec2::new(1.0, 2.0)).norm() < 1e-12);
    assert!((p.z - 1.5).abs() < 1e-12);
    assert!((p.velocity - NVec2::new(1.0, 2.0) * params.damping).norm() < 1e-12);
    assert_eq!(p.acceleration, NVec2::zeros());
    assert_eq!(p.age, 1);
}

#[test]
fn trail_keeps_the_most_recent_positions() {
    let params = Parameters::galaxy();
    let mut particles = vec![Particle::at(0.0, 0.0, 0.0, 3)];
    particles[0].velocity = NVec2::new(1.0, 0.0);

    let mut previous = NVec3::zeros();
    for _ in 0..5 {
        previous = particles[0].position3();
        integrate(&mut particles, &params);
    }

    let trail = &particles[0].trail;
    assert_eq!(trail.len(), 3);
    let last = trail.iter().last().copied();
    assert_eq!(last, Some(previous));
    let xs: Vec<f64> = trail.iter().map(|s| s.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]), "trail out of order: {:?}", xs);
}

#[test]
fn particles_are_removed_once_past_max_age() {
    let mut params = Parameters::disk();
    params.max_age = Some(5);
    let mut particles = vec![particle(0.0, 0.0, 0.0)];
    particles[0].max_age = params.max_age;

    for _ in 0..5 {
        integrate(&mut particles, &params);
    }
    assert_eq!(cull(&mut particles, params.cull_distance), 0);
    assert_eq!(particles.len(), 1);

    integrate(&mut particles, &params);
    assert_eq!(cull(&mut particles, params.cull_distance), 1);
    assert!(particles.is_empty());
}

#[test]
fn cull_drops_far_particles() {
    let mut particles = vec![particle(10.0, 0.0, 0.0), particle(2000.0, 0.0, 0.0)];
    assert_eq!(cull(&mut particles, 1200.0), 1);
    assert_eq!(particles[0].position.x, 10.0);
}

#[test]
fn cap_evicts_the_oldest_first() {
    let mut particles: Vec<Particle> = (0..10).map(|i| particle(i as f64, 0.0, 0.0)).collect();
    assert_eq!(enforce_cap(&mut particles, 4), 6);
    let xs: Vec<f64> = particles.iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![6.0, 7.0, 8.0, 9.0]);
}

// ==================================================================================
// Emitters
// ==================================================================================

#[test]
fn galaxy_bulge_has_two_sides_per_slot() {
    let galaxy = GalacticDisk::new(GalaxyLayout::default(), make_rng(Some(1)));
    let points = galaxy.emission_points();
    // 60 points over 3 layers, above and below
    assert_eq!(points.len(), 120);
    let above = points.iter().filter(|p| p.side > 0.0).count();
    assert_eq!(above, 60);
    assert!(points.iter().all(|p| (20.0..60.0).contains(&p.activation_time)));
    assert_eq!(galaxy.state(), EmitterState::Dormant);
}

#[test]
fn galaxy_points_never_emit_before_activation() {
    let mut galaxy = GalacticDisk::new(GalaxyLayout::default(), make_rng(Some(3)));
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    galaxy.activate();

    for frame in 0..200 {
        galaxy.update();
        let out = galaxy.emit(&EmissionContext { frame, params: &params });
        assert_eq!(out.len() % 2, 0, "galaxy emits mirrored pairs");
    }

    let points = galaxy.emission_points();
    assert!(points.iter().any(|p| p.emissions > 0));
    for p in points {
        if let Some(at) = p.activated_at {
            assert!(at as f64 >= p.activation_time);
        }
        if let Some(first) = p.first_emission {
            assert!(first as f64 >= p.activation_time);
            assert!(p.is_active);
        }
    }
}

#[test]
fn galaxy_points_respect_the_minimum_delay() {
    let mut galaxy = GalacticDisk::new(GalaxyLayout::default(), make_rng(Some(21)));
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    galaxy.activate();

    let frames: u64 = 400;
    let mut counts: Vec<u64> = galaxy.emission_points().iter().map(|p| p.emissions).collect();
    let mut history: Vec<Vec<u64>> = vec![Vec::new(); counts.len()];

    for frame in 0..frames {
        galaxy.update();
        galaxy.emit(&EmissionContext { frame, params: &params });
        for (i, p) in galaxy.emission_points().iter().enumerate() {
            if p.emissions > counts[i] {
                history[i].push(p.last_emission);
                counts[i] = p.emissions;
            }
        }
    }

    // full rate: min delay is 15, so consecutive emissions sit at least 16 frames apart
    let bound = frames.div_ceil(16);
    for (i, emitted_at) in history.iter().enumerate() {
        assert!(counts[i] <= bound, "point {i} emitted {} times", counts[i]);
        for pair in emitted_at.windows(2) {
            assert!(pair[1] - pair[0] > 15, "point {i} emitted at {:?}", pair);
        }
    }
    assert!(counts.iter().any(|&c| c > 1));
}

#[test]
fn galaxy_rotates_only_while_active() {
    let layout = GalaxyLayout {
        num_arms: 3,
        ..GalaxyLayout::default()
    };
    let mut galaxy = GalacticDisk::new(layout, make_rng(Some(4)));
    assert_eq!(galaxy.arms().len(), 3);
    assert!(galaxy.arms().iter().all(|arm| arm.segments.len() == 20));
    assert_eq!(galaxy.field_segments().len(), 60);

    galaxy.update();
    assert_eq!(galaxy.rotation(), 0.0);

    galaxy.activate();
    for _ in 0..10 {
        galaxy.update();
    }
    assert!((galaxy.rotation() - 0.1).abs() < 1e-12);
}

#[test]
fn galaxy_pairs_are_mirrored_about_the_base_velocity() {
    let mut galaxy = GalacticDisk::new(GalaxyLayout::default(), make_rng(Some(11)));
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    galaxy.activate();

    let mut out = Vec::new();
    let mut frame = 0;
    while out.is_empty() && frame < 200 {
        galaxy.update();
        out = galaxy.emit(&EmissionContext { frame, params: &params });
        frame += 1;
    }
    assert!(!out.is_empty());

    let (a, b) = (&out[0], &out[1]);
    assert_eq!(a.position3(), b.position3());
    assert!((a.z_velocity + b.z_velocity).abs() < 1e-12);
}

#[test]
fn disk_helices_start_in_order() {
    let layout = DiskLayout::default();
    let mut disk = HelixDisk::new(layout.clone(), make_rng(Some(5)));
    let params = Parameters::disk();
    disk.activate();

    for frame in 0..400 {
        disk.update();
        disk.emit(&EmissionContext { frame, params: &params });
    }

    let points = disk.emission_points();
    assert_eq!(points.len(), layout.helix_count);
    for (i, p) in points.iter().enumerate() {
        let start = i as u64 * layout.helix_start_interval;
        let at = p.activated_at.expect("every helix is active by frame 400");
        assert!(at >= start);
        if let Some(first) = p.first_emission {
            assert!(first >= start);
        }
    }
    let above = points.iter().filter(|p| p.side > 0.0).count();
    assert_eq!(above, layout.helix_count / 2);
}

#[test]
fn disk_helices_fire_on_their_own_third_of_frames() {
    let mut disk = HelixDisk::new(DiskLayout::default(), make_rng(Some(13)));
    let params = Parameters::disk();
    disk.activate();

    let mut counts = vec![0u64; DiskLayout::default().helix_count];
    let mut fired = 0;
    for frame in 0..400 {
        disk.update();
        disk.emit(&EmissionContext { frame, params: &params });
        for (i, p) in disk.emission_points().iter().enumerate() {
            if p.emissions > counts[i] {
                assert_eq!(p.last_emission % 3, i as u64 % 3, "helix {i} fired at {}", p.last_emission);
                counts[i] = p.emissions;
                fired += 1;
            }
        }
    }
    assert!(fired > 0);
}

#[test]
fn disk_helix_patterns_point_away_from_their_side() {
    let layout = DiskLayout::default();
    let mut disk = HelixDisk::new(layout.clone(), make_rng(Some(8)));
    assert!(disk.helix_patterns().is_empty());

    disk.activate();
    let patterns = disk.helix_patterns();
    assert_eq!(patterns.len(), layout.helix_count);
    for (i, pattern) in patterns.iter().enumerate() {
        let above = i < layout.helix_count / 2;
        assert_eq!(pattern.warm, above);
        assert_eq!(pattern.axis.z > 0.0, above);
        assert!((pattern.axis.norm() - 1.0).abs() < 1e-12);
        assert!((0.8..1.2).contains(&pattern.speed));
    }
}

#[test]
fn disk_particles_fly_straight_out_from_the_centre() {
    let mut disk = HelixDisk::new(DiskLayout::default(), make_rng(Some(9)));
    let params = Parameters::disk();
    disk.activate();

    let mut emitted = Vec::new();
    for frame in 0..120 {
        disk.update();
        emitted.extend(disk.emit(&EmissionContext { frame, params: &params }));
    }
    assert!(!emitted.is_empty());

    for p in &emitted {
        let v = NVec3::new(p.velocity.x, p.velocity.y, p.z_velocity);
        let r = p.position3();
        let speed = v.norm();
        assert!((0.8..=1.2).contains(&speed), "speed {speed}");
        assert!(v.cross(&r).norm() < 1e-9 * r.norm().max(1.0));
        assert!(v.dot(&r) > 0.0);
        assert_eq!(p.max_age, params.max_age);
    }
}

#[test]
fn disk_terminates_after_its_emission_window() {
    let layout = DiskLayout {
        emission_duration: 30,
        ..DiskLayout::default()
    };
    let mut disk = HelixDisk::new(layout, make_rng(Some(2)));
    let params = Parameters::disk();
    disk.activate();

    for frame in 0..30 {
        disk.update();
        disk.emit(&EmissionContext { frame, params: &params });
    }
    assert!(disk.is_active());

    disk.update();
    assert!(!disk.is_active());
    assert_eq!(disk.state(), EmitterState::Terminated);
    assert!(disk.emit(&EmissionContext { frame: 31, params: &params }).is_empty());
}

// ==================================================================================
// Simulation
// ==================================================================================

#[test]
fn population_never_exceeds_the_cap() {
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    params.max_particles = 50;
    let mut sim = seeded_sim(Variant::Galaxy, params, EmitterLayout::default_for(Variant::Galaxy));
    sim.start();

    let mut evicted = 0;
    for _ in 0..300 {
        let report = sim.step();
        assert!(sim.particles().len() <= 50);
        assert_eq!(report.emitted % 2, 0);
        evicted += report.evicted;
    }
    assert!(evicted > 0, "cap was never reached");
}

#[test]
fn galaxy_goes_quiet_then_terminates() {
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    params.decay_rate = 0;
    params.base_velocity = 0.0;
    params.max_particles = 20;
    let mut sim = seeded_sim(Variant::Galaxy, params, EmitterLayout::default_for(Variant::Galaxy));
    sim.start();

    for _ in 0..2400 {
        sim.step();
    }
    assert_eq!(sim.emitter_state(), EmitterState::Active);
    assert!(!sim.particles().is_empty());

    let before: Vec<NVec3> = sim.particles().iter().map(|p| p.position3()).collect();
    let report = sim.step();
    assert_eq!(report.emitted, 0);
    assert_eq!(sim.emitter_state(), EmitterState::Quiet);
    let moved = sim
        .particles()
        .iter()
        .zip(before.iter())
        .any(|(p, old)| p.position3() != *old);
    assert!(moved, "physics should keep running while quiet");

    for _ in 0..100 {
        assert_eq!(sim.step().emitted, 0);
    }
    assert_eq!(sim.emitter_state(), EmitterState::Terminated);
}

#[test]
fn reset_clears_everything() {
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    let mut sim = seeded_sim(Variant::Galaxy, params, EmitterLayout::default_for(Variant::Galaxy));
    sim.start();
    for _ in 0..100 {
        sim.step();
    }
    assert!(!sim.particles().is_empty());

    sim.reset();
    assert!(sim.particles().is_empty());
    assert_eq!(sim.frame_count(), 0);
    assert!(!sim.is_running());
    assert!(!sim.should_step());
    assert_eq!(sim.emitter_state(), EmitterState::Dormant);

    // stepping a dormant emitter produces nothing
    for _ in 0..100 {
        assert_eq!(sim.step().emitted, 0);
    }
    assert!(sim.particles().is_empty());
}

#[test]
fn pause_only_applies_while_running() {
    let mut sim = seeded_sim(Variant::Disk, Parameters::disk(), EmitterLayout::default_for(Variant::Disk));
    sim.pause();
    assert!(!sim.is_paused());

    sim.start();
    assert!(sim.should_step());
    sim.toggle_pause();
    assert!(sim.is_paused());
    assert!(!sim.should_step());
    sim.toggle_pause();
    assert!(sim.should_step());
}

#[test]
fn live_parameters_keep_particles_but_layout_regenerates() {
    let mut params = Parameters::galaxy();
    params.emission_rate = 1.0;
    let mut sim = seeded_sim(Variant::Galaxy, params.clone(), EmitterLayout::default_for(Variant::Galaxy));
    sim.start();
    for _ in 0..100 {
        sim.step();
    }
    let count = sim.particles().len();
    assert!(count > 0);

    params.pair_gravity = 1.0;
    params.view_tilt = 30.0;
    sim.set_parameters(params);
    assert_eq!(sim.particles().len(), count);
    assert_eq!(sim.parameters().view_tilt, 30.0);

    // same layout: nothing happens
    sim.set_layout(EmitterLayout::default_for(Variant::Galaxy));
    assert_eq!(sim.particles().len(), count);

    let layout = GalaxyLayout {
        emission_points_per_arm: 10,
        ..GalaxyLayout::default()
    };
    sim.set_layout(EmitterLayout::Galaxy(layout));
    assert!(sim.particles().is_empty());
    assert_eq!(sim.frame_count(), 0);
    assert!(sim.is_running());
    assert_eq!(sim.emitter().emission_points().len(), 2 * 21);
}

#[test]
fn switching_variant_loads_the_new_preset() {
    let mut sim = seeded_sim(Variant::Galaxy, Parameters::galaxy(), EmitterLayout::default_for(Variant::Galaxy));
    sim.start();
    for _ in 0..50 {
        sim.step();
    }

    sim.set_layout(EmitterLayout::Disk(DiskLayout::default()));
    assert_eq!(sim.engine.variant, Variant::Disk);
    assert_eq!(sim.parameters(), &Parameters::disk());
    assert!(sim.is_running());

    for _ in 0..100 {
        sim.step();
    }
    let disk = Parameters::disk();
    assert!(!sim.particles().is_empty());
    for p in sim.particles() {
        assert_eq!(p.max_age, disk.max_age);
        assert_eq!(p.trail.capacity(), disk.trail_capacity);
        assert_eq!(p.radius, disk.particle_radius);
    }
    assert!(sim.particles().len() <= disk.max_particles);
}

#[test]
fn disk_simulation_ages_particles_out() {
    let mut params = Parameters::disk();
    params.max_age = Some(40);
    let mut sim = seeded_sim(Variant::Disk, params, EmitterLayout::default_for(Variant::Disk));
    sim.start();

    for _ in 0..200 {
        sim.step();
        assert!(sim.particles().iter().all(|p| p.age <= 40));
    }
    assert!(!sim.particles().is_empty());
}

// ==================================================================================
// Configuration
// ==================================================================================

const GALAXY_YAML: &str = r#"
engine:
  variant: galaxy
  fps: -5.0
  seed: 42

parameters:
  emission_rate: 2.0
  view_tilt: 120.0
  max_particles: 500

galaxy:
  num_arms: 0
  emission_points_per_arm: 12
"#;

#[test]
fn scenario_overrides_the_preset() {
    let cfg = ScenarioConfig::from_yaml_str(GALAXY_YAML).unwrap().sanitized();

    let engine = cfg.engine();
    assert_eq!(engine.variant, Variant::Galaxy);
    assert_eq!(engine.fps, None);
    assert_eq!(engine.seed, Some(42));

    let params = cfg.parameters();
    assert_eq!(params.emission_rate, 1.0);
    assert_eq!(params.view_tilt, 90.0);
    assert_eq!(params.max_particles, 500);
    assert_eq!(params.field_gravity, Parameters::galaxy().field_gravity);

    match cfg.layout() {
        EmitterLayout::Galaxy(g) => {
            assert_eq!(g.num_arms, 1);
            assert_eq!(g.emission_points_per_arm, 12);
        }
        other => panic!("expected a galaxy layout, got {other:?}"),
    }
}

#[test]
fn disk_scenario_without_sections_uses_defaults() {
    let cfg = ScenarioConfig::from_yaml_str("engine:\n  variant: disk\n").unwrap();
    assert_eq!(cfg.parameters(), Parameters::disk());
    assert_eq!(cfg.layout(), EmitterLayout::Disk(DiskLayout::default()));

    let sim = Simulation::from_config(&cfg);
    assert_eq!(sim.emitter_state(), EmitterState::Dormant);
    assert!(!sim.is_running());
}

#[test]
fn unknown_variant_is_rejected() {
    assert!(ScenarioConfig::from_yaml_str("engine:\n  variant: spiral\n").is_err());
}

#[test]
fn bundled_scenarios_load() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");

    let galaxy = ScenarioConfig::load(&dir.join("galaxy.yaml")).unwrap().sanitized();
    assert_eq!(galaxy.engine().variant, Variant::Galaxy);
    assert_eq!(galaxy.engine().fps, Some(20.0));
    assert_eq!(galaxy.parameters(), Parameters::galaxy());

    let disk = ScenarioConfig::load(&dir.join("disk.yaml")).unwrap().sanitized();
    assert_eq!(disk.engine().fps, None);
    assert_eq!(disk.parameters(), Parameters::disk());
    assert_eq!(disk.layout(), EmitterLayout::Disk(DiskLayout::default()));
}
