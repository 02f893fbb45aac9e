//! Bevy 2D viewer over the simulation core.
//!
//! Spawns one circle mesh per body, steps the engine from the real frame
//! clock, and recolors bodies every frame from their collision/overlap
//! markers: red for a confirmed collision, teal for a broad-phase overlap,
//! green otherwise.
//!
//! The viewer is a consumer of the core's read-only surface (positions,
//! radii, per-frame markers); no simulation logic lives here.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;

/// Component tagging each circle with its body id.
///
/// Ids, not indices: sweep-and-prune permutes the body pool every tick.
#[derive(Component)]
struct BodyId(u64);

/// Clamp for the frame delta; the first frame after startup can report a
/// huge dt that would teleport every body.
const MAX_DT: f64 = 0.1;

fn idle_color() -> Color {
    Color::srgb(0.0, 1.0, 0.0)
}

fn collision_color() -> Color {
    Color::srgb(1.0, 0.0, 0.0)
}

fn overlap_color() -> Color {
    Color::srgb(0.0, 0.39, 0.5)
}

pub fn run_viewer(scenario: Scenario) {
    println!(
        "viewer: starting with {} bodies ({})",
        scenario.engine.world.bodies.len(),
        scenario.engine.strategy.name()
    );

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (sim_step_system, sync_bodies_system).chain())
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    for body in &scenario.engine.world.bodies {
        let (x, y) = to_screen(body.pos.x, body.pos.y, &scenario);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(idle_color())),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyId(body.id),
        ));
    }
}

/// Step the engine once per rendered frame from the wall-clock delta.
fn sim_step_system(mut scenario: ResMut<Scenario>, time: Res<Time>, mut exit: EventWriter<AppExit>) {
    let dt = (time.delta_seconds() as f64).min(MAX_DT);
    scenario.engine.step(dt);

    // Runtime cap reached: print the end-of-run metrics and close.
    if !scenario.engine.is_running() {
        println!("{}", scenario.engine.report());
        exit.send(AppExit::Success);
    }
}

/// Push positions and marker colors from the body pool to the entities.
fn sync_bodies_system(
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&BodyId, &Handle<ColorMaterial>, &mut Transform)>,
) {
    let world = scenario.engine.world();
    let by_id: HashMap<u64, usize> = world
        .bodies
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id, i))
        .collect();

    for (BodyId(id), material, mut transform) in &mut query {
        let Some(&i) = by_id.get(id) else {
            continue;
        };
        let body = &world.bodies[i];

        let (x, y) = to_screen(body.pos.x, body.pos.y, &scenario);
        transform.translation.x = x;
        transform.translation.y = y;

        let color = if body.is_colliding(world.frame) {
            collision_color()
        } else if body.is_overlapping(world.frame) {
            overlap_color()
        } else {
            idle_color()
        };
        if let Some(mat) = materials.get_mut(material) {
            mat.color = color;
        }
    }
}

/// Arena coordinates (origin top-left, y down) to centered screen space.
fn to_screen(x: f64, y: f64, scenario: &Scenario) -> (f32, f32) {
    let arena = &scenario.engine.arena;
    (
        (x - arena.width / 2.0) as f32,
        (arena.height / 2.0 - y) as f32,
    )
}
