use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::collision::objects::NVec2;
use crate::collision::resolver::CollisionOutcome;
use crate::collision::scenario::Scenario;
use crate::collision::search::CollisionEvent;

/// World-space → screen-space scaling factor for positions and vectors
const SCALE: f32 = 50.0;

/// Visual radius for the point objects (they have no physical extent)
const MARKER_RADIUS: f32 = 0.15 * SCALE;

/// Per-object marker colors (object 1, object 2)
fn object_colors() -> [Color; 2] {
    [Color::srgb(0.3, 0.6, 1.0), Color::srgb(1.0, 0.5, 0.2)]
}

/// Everything the plot needs besides the scenario itself: the detected
/// event (if any) and the resolved outcome. Computed once before the app
/// starts; the scene never advances
#[derive(Resource)]
pub struct CollisionReport {
    pub event: Option<CollisionEvent>,
    pub outcome: CollisionOutcome,
}

/// Print the console summary and open the static Bevy 2D plot
pub fn run_2d(scenario: Scenario, report: CollisionReport) {
    print_summary(&scenario, &report);

    App::new()
        .insert_resource(scenario)
        .insert_resource(report)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_plot_system)
        .add_systems(Update, draw_vectors_system)
        .run();
}

fn print_summary(scenario: &Scenario, report: &CollisionReport) {
    let (o1, o2) = &scenario.objects;
    println!(
        "object 1: m = {}, x0 = ({}, {}), v = ({}, {})",
        o1.mass(),
        o1.position().x,
        o1.position().y,
        o1.velocity().x,
        o1.velocity().y
    );
    println!(
        "object 2: m = {}, x0 = ({}, {}), v = ({}, {})",
        o2.mass(),
        o2.position().x,
        o2.position().y,
        o2.velocity().x,
        o2.velocity().y
    );
    match &report.event {
        Some(ev) => {
            println!(
                "collision at t = {} near ({}, {})",
                ev.t, ev.point.x, ev.point.y
            );
            println!("{}", report.outcome);
        }
        None => println!(
            "no collision within t_end = {} (tolerance {})",
            scenario.parameters.t_end, scenario.parameters.merge_t
        ),
    }
}

/// Startup system: camera plus one circle per object at its initial position
fn setup_plot_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let (o1, o2) = &scenario.objects;
    for (obj, color) in [o1, o2].into_iter().zip(object_colors()) {
        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS))),
            material: materials.add(ColorMaterial::from(color)),
            transform: Transform::from_xyz(
                obj.position().x as f32 * SCALE,
                obj.position().y as f32 * SCALE,
                0.0,
            ),
            ..Default::default()
        });
    }
}

/// Gizmos are immediate-mode, so the arrows are redrawn every frame even
/// though nothing in the scene moves
fn draw_vectors_system(
    scenario: Res<Scenario>,
    report: Res<CollisionReport>,
    mut gizmos: Gizmos,
) {
    let (o1, o2) = &scenario.objects;
    let colors = object_colors();

    // Initial velocity vectors, anchored at the initial positions
    for (obj, color) in [o1, o2].into_iter().zip(colors) {
        let from = to_screen(obj.position());
        let to = to_screen(obj.position() + obj.velocity());
        gizmos.arrow_2d(from, to, color);
    }

    let Some(ev) = &report.event else {
        return;
    };

    // Detected collision point
    let point = to_screen(ev.point);
    gizmos.circle_2d(point, 0.5 * MARKER_RADIUS, Color::srgb(1.0, 1.0, 0.3));

    // Post-collision velocity vectors, anchored at the impact point
    match &report.outcome {
        CollisionOutcome::Elastic { v1, v2 } => {
            gizmos.arrow_2d(point, to_screen(ev.point + v1), colors[0]);
            gizmos.arrow_2d(point, to_screen(ev.point + v2), colors[1]);
        }
        CollisionOutcome::Inelastic { v, .. } => {
            gizmos.arrow_2d(point, to_screen(ev.point + v), Color::srgb(1.0, 1.0, 1.0));
        }
    }
}

fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)
}
