use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Rectangle;

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

const QUAD_SCALE: f32 = 10.0; // edge length of each body's quad in world units
const VIEW_CENTER: Vec2 = Vec2::new(500.0, 500.0);

const PALETTE: [Color; 3] = [
    Color::srgb(1.0, 0.0, 0.0),
    Color::srgb(0.0, 1.0, 0.0),
    Color::srgb(0.0, 0.0, 1.0),
];

/// Open a window and advance `scenario` one tick per frame until it closes
pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.len());

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbital Mechanics".into(),
                resolution: (1000.0, 1000.0).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera looking at the middle of the 1000x1000 field
    commands.spawn(Camera2dBundle {
        transform: Transform::from_xyz(VIEW_CENTER.x, VIEW_CENTER.y, 999.9),
        ..Default::default()
    });

    let quad = Mesh2dHandle(meshes.add(Rectangle::new(1.0, 1.0)));

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: quad.clone(),
                material: materials.add(ColorMaterial::from(PALETTE[i % PALETTE.len()])),
                transform: body_transform(body.translation_matrix(QUAD_SCALE)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            *transform = body_transform(b.translation_matrix(QUAD_SCALE));
        }
    }
}

// nalgebra and glam both store matrices column-major
fn body_transform(m: nalgebra::Matrix4<f32>) -> Transform {
    Transform::from_matrix(Mat4::from_cols_slice(m.as_slice()))
}
