use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::driver::Simulation;
use crate::simulation::emitter::{EmitterLayout, EmitterShape, EmitterView};
use crate::simulation::engine::Variant;
use crate::simulation::states::ParticleColor;
use crate::visualization::projection::{face_on, Projection, ScreenPoint};

/// Marker for the stats overlay
#[derive(Component)]
struct Hud;

/// World units -> pixels
const SCALE: f32 = 1.0;

const TILT_STEP: f64 = 5.0;
const POINTS_STEP: usize = 5;
const HELIX_STEP: usize = 2;

const INSET_SIZE: f32 = 120.0;
const INSET_MARGIN: f32 = 20.0;
const INSET_SCALE: f64 = 0.4;

/// Open a window and run `simulation` until it is closed.
///
/// Stepping happens in `FixedUpdate` when the engine has an fps, otherwise
/// once per rendered frame; drawing always happens every frame, so a paused
/// simulation stays on screen.
pub fn run_viewer(simulation: Simulation) {
    log::info!(
        "run_viewer: starting {:?} viewer (fps: {:?})",
        simulation.engine.variant,
        simulation.engine.fps
    );
    let fps = simulation.engine.fps;

    let mut app = App::new();
    app.insert_resource(simulation)
        .insert_resource(ClearColor(Color::srgb(0.0, 0.03, 0.07)))
        // env_logger already owns the global logger
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_viewer)
        .add_systems(
            Update,
            (control_system, draw_particles_system, draw_emitter_system, draw_inset_system, hud_system).chain(),
        );

    match fps {
        Some(hz) => {
            app.insert_resource(Time::<Fixed>::from_hz(hz))
                .add_systems(FixedUpdate, physics_step_system);
        }
        None => {
            app.add_systems(Update, physics_step_system.before(draw_particles_system));
        }
    }

    app.run();
}

fn setup_viewer(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 14.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
        Hud,
    ));
}

fn physics_step_system(mut sim: ResMut<Simulation>) {
    if sim.should_step() {
        sim.step();
    }
}

/// Space start, P pause, R reset, Up/Down tilt, =/- emission point count
fn control_system(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Simulation>) {
    if keys.just_pressed(KeyCode::Space) {
        sim.start();
    }
    if keys.just_pressed(KeyCode::KeyP) {
        sim.toggle_pause();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        sim.reset();
    }

    let tilt_delta = if keys.just_pressed(KeyCode::ArrowUp) {
        TILT_STEP
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        -TILT_STEP
    } else {
        0.0
    };
    if tilt_delta != 0.0 {
        let mut params = sim.parameters().clone();
        params.view_tilt = (params.view_tilt + tilt_delta).clamp(-90.0, 90.0);
        sim.set_parameters(params);
    }

    let grow = keys.just_pressed(KeyCode::Equal);
    let shrink = keys.just_pressed(KeyCode::Minus);
    if grow || shrink {
        let layout = match sim.layout().clone() {
            EmitterLayout::Galaxy(mut g) => {
                g.emission_points_per_arm = resize(g.emission_points_per_arm, POINTS_STEP, grow);
                EmitterLayout::Galaxy(g)
            }
            EmitterLayout::Disk(mut d) => {
                d.helix_count = resize(d.helix_count, HELIX_STEP, grow);
                EmitterLayout::Disk(d)
            }
        };
        sim.set_layout(layout);
    }
}

fn resize(n: usize, step: usize, grow: bool) -> usize {
    if grow {
        n + step
    } else {
        n.saturating_sub(step).max(1)
    }
}

fn draw_particles_system(sim: Res<Simulation>, mut gizmos: Gizmos) {
    let view = sim.frame_view();
    let projection = Projection::new(view.perspective, view.view_tilt);

    for p in view.particles {
        let head = projection.project(p.position3());

        if p.trail.len() > 1 {
            let trail_alpha = (head.scale * 0.4).max(0.2);
            let points: Vec<Vec2> = p.trail.iter().map(|s| to_screen(projection.project(*s))).collect();
            gizmos.linestrip_2d(points, hsla(&p.color, trail_alpha));
        }

        let radius = (p.radius * head.scale) as f32 * SCALE;
        gizmos.circle_2d(to_screen(head), radius, hsla(&p.color, head.scale.max(0.4)));
        // glow
        gizmos.circle_2d(to_screen(head), radius * 1.8, hsla(&p.color, (head.scale * 0.4).max(0.2)));
    }
}

fn draw_emitter_system(sim: Res<Simulation>, mut gizmos: Gizmos) {
    let view = sim.frame_view();
    let projection = Projection::new(view.perspective, view.view_tilt);
    draw_edge_on(&view.emitter, &projection, &mut gizmos);
}

fn draw_edge_on(emitter: &EmitterView, projection: &Projection, gizmos: &mut Gizmos) {
    let squash = projection.edge_factor() as f32;

    match &emitter.shape {
        EmitterShape::Galaxy { core_radius, bulge_radius, bulge_height, arm_reach, arms } => {
            let pulse = 1.0 + (emitter.pulse_phase.sin() * 0.15) as f32;
            let core = Vec2::new(*core_radius as f32 * pulse, 4.0 * squash);
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, core * Vec2::new(1.5, 2.0) * SCALE, Color::srgba(1.0, 0.67, 0.27, 0.6));
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, core * SCALE, Color::srgb(1.0, 0.8, 0.4));

            // arms seen edge-on: a tick per segment, thicker toward the core
            for arm in arms {
                for seg in arm {
                    let x = seg.position.x as f32 * SCALE;
                    let closeness = 1.0 - (seg.position.norm() / arm_reach) as f32;
                    let half = (seg.radius as f32 * 0.2 * (1.0 + closeness.max(0.0) * 3.0) * squash).max(2.0);
                    gizmos.line_2d(Vec2::new(x, -half), Vec2::new(x, half), Color::srgba(0.2, 0.33, 0.67, 0.5));
                }
            }

            let bulge = Vec2::new(*bulge_radius as f32 * 2.0, *bulge_height as f32 * squash);
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, bulge * 1.2 * SCALE, Color::srgba(1.0, 0.67, 0.27, 0.3));
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, bulge * SCALE, Color::srgba(1.0, 0.8, 0.4, 0.6));
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, bulge * Vec2::new(0.6, 0.7) * SCALE, Color::srgba(1.0, 0.87, 0.53, 0.8));

            for point in &emitter.points {
                let color = if point.side > 0.0 {
                    Color::srgba(1.0, 0.53, 0.53, 0.8)
                } else {
                    Color::srgba(0.53, 1.0, 0.53, 0.8)
                };
                gizmos.circle_2d(to_screen(projection.project(point.position)), 1.5, color);
            }
        }
        EmitterShape::Disk { radius, .. } => {
            let pulse = 1.0 + (emitter.pulse_phase.sin() * 0.1) as f32;
            let half = Vec2::new(*radius as f32 * pulse, 4.0);
            let (glow, body, line) = if emitter.is_active {
                (Color::srgba(1.0, 0.4, 0.0, 0.4), Color::srgba(1.0, 0.53, 0.2, 0.9), Color::srgb(1.0, 0.67, 0.4))
            } else {
                (Color::srgba(0.2, 0.2, 0.4, 0.4), Color::srgba(0.33, 0.4, 0.6, 0.9), Color::srgb(0.47, 0.53, 0.73))
            };
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, half * Vec2::new(1.5, 2.0) * SCALE, glow);
            gizmos.ellipse_2d(Vec2::ZERO, 0.0, half * SCALE, body);
            gizmos.line_2d(Vec2::new(-half.x * 0.8, 0.0) * SCALE, Vec2::new(half.x * 0.8, 0.0) * SCALE, line);

            for point in &emitter.points {
                let at = Vec2::new(point.position.x as f32, 0.0) * SCALE;
                let (dot, ring) = if point.side > 0.0 {
                    (Color::srgba(1.0, 0.67, 0.27, 0.6), Color::srgba(1.0, 0.8, 0.4, 0.3))
                } else {
                    (Color::srgba(0.27, 0.67, 1.0, 0.6), Color::srgba(0.4, 0.8, 1.0, 0.3))
                };
                gizmos.circle_2d(at, 2.0, dot);
                if let Some(r) = point.helix_radius {
                    gizmos.circle_2d(at, r as f32 * SCALE, ring);
                }
            }
        }
    }
}

/// Face-on inset of the arms in the bottom-right corner (galaxy only)
fn draw_inset_system(sim: Res<Simulation>, windows: Query<&Window>, mut gizmos: Gizmos) {
    if sim.engine.variant != Variant::Galaxy {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };

    let center = Vec2::new(
        window.width() / 2.0 - INSET_SIZE / 2.0 - INSET_MARGIN,
        -window.height() / 2.0 + INSET_SIZE / 2.0 + INSET_MARGIN,
    );
    gizmos.circle_2d(center, INSET_SIZE / 2.0, Color::srgb(0.2, 0.27, 0.33));

    let view = sim.emitter().view();
    if let EmitterShape::Galaxy { arms, arm_reach, .. } = &view.shape {
        for seg in arms.iter().flatten() {
            let (x, y) = face_on(seg.position, INSET_SCALE);
            let brightness = (1.0 - seg.position.norm() / arm_reach).max(0.3) as f32;
            gizmos.circle_2d(
                center + Vec2::new(x as f32, y as f32),
                (seg.radius * INSET_SCALE) as f32,
                Color::srgba(0.39, 0.59, 1.0, brightness),
            );
        }
    }
    gizmos.circle_2d(center, 3.0, Color::srgb(1.0, 0.67, 0.27));
}

fn hud_system(sim: Res<Simulation>, mut query: Query<&mut Text, With<Hud>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    let view = sim.frame_view();

    let mut lines = vec![format!("Particles: {}", view.particles.len())];
    match &view.emitter.shape {
        EmitterShape::Galaxy { .. } => {
            lines.push(format!("Galaxy Rotation: {:.1}°", view.emitter.rotation.to_degrees()));
            lines.push(format!("Frame: {}", view.frame));
            if view.emitter.is_active {
                lines.push(format!(
                    "Active Emission Points: {}/{}",
                    view.emitter.points.len(),
                    view.emitter.total_points
                ));
            }
        }
        EmitterShape::Disk { remaining_frames, active_helices, total_helices, .. } => {
            lines.push(format!("Frame: {}", view.frame));
            if view.emitter.is_active {
                let seconds = (*remaining_frames as f64 / 60.0).ceil();
                lines.push(format!("Emission time remaining: {seconds}s"));
                lines.push(format!("Active helixes: {active_helices}/{total_helices}"));
            }
        }
    }
    lines.push(format!("State: {:?}{}", view.emitter.state, if view.paused { " (paused)" } else { "" }));
    lines.push(format!("Tilt: {:.0}°", view.view_tilt));

    text.sections[0].value = lines.join("\n");
}

fn to_screen(s: ScreenPoint) -> Vec2 {
    Vec2::new(s.x as f32, s.y as f32) * SCALE
}

fn hsla(c: &ParticleColor, alpha: f64) -> Color {
    Color::hsla(
        c.hue as f32,
        (c.saturation / 100.0) as f32,
        (c.lightness / 100.0) as f32,
        alpha.clamp(0.0, 1.0) as f32,
    )
}
