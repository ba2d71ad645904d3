use bevy::prelude::*;

use crate::{constants::*, markers::*, systems::animations::PoseAnimation};
use strider_common::{
    animation::AnimatorParameters,
    collision::{CollisionWorld, KinematicBody, Obstacle},
    components::{Facing, LocomotionState, Position},
    input::PlayerInput,
    markers::PlayerMarker,
    settings::LocomotionSettings,
};

// ============================================================================
// Resources
// ============================================================================

// Startup parameters for the player, taken from the command line
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnConfig {
    pub settings: LocomotionSettings,
    pub spawn_height: f32,
}

// ============================================================================
// Bundles
// ============================================================================

#[derive(Bundle)]
struct PlayerBundle {
    player_marker: PlayerMarker,
    settings: LocomotionSettings,
    state: LocomotionState,
    input: PlayerInput,
    facing: Facing,
    position: Position,
    body: KinematicBody,
    animator: AnimatorParameters,
    transform: Transform,
    visibility: Visibility,
}

// ============================================================================
// Arena Layout
// ============================================================================

// A wall to slide along, a crate low enough to jump onto, a ledge too high to reach and a beam to bump into mid-jump
#[must_use]
pub fn arena_obstacles() -> Vec<Obstacle> {
    vec![
        Obstacle {
            center: Vec3::new(-6.0, 1.5, -4.0),
            half_extents: Vec3::new(0.25, 1.5, 6.0),
        },
        Obstacle {
            center: Vec3::new(4.0, 0.5, -5.0),
            half_extents: Vec3::new(1.0, 0.5, 1.0),
        },
        Obstacle {
            center: Vec3::new(4.0, 1.5, -10.0),
            half_extents: Vec3::new(3.0, 1.5, 1.5),
        },
        Obstacle {
            center: Vec3::new(-1.0, 2.85, -8.0),
            half_extents: Vec3::new(2.0, 0.25, 0.25),
        },
    ]
}

// ============================================================================
// Spawning
// ============================================================================

pub fn spawn_arena_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    spawn_config: Res<SpawnConfig>,
) {
    commands.spawn((
        GroundMarker,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ARENA_SIZE, ARENA_SIZE))),
        MeshMaterial3d(materials.add(rgb(GROUND_COLOR))),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_DIRECTIONAL_BRIGHTNESS,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let obstacle_material = materials.add(rgb(OBSTACLE_COLOR));
    let mut collision_world = CollisionWorld::default();
    for obstacle in arena_obstacles() {
        commands.spawn((
            ObstacleMarker,
            Mesh3d(meshes.add(Cuboid::from_size(obstacle.half_extents * 2.0))),
            MeshMaterial3d(obstacle_material.clone()),
            Transform::from_translation(obstacle.center),
        ));
        collision_world.obstacles.push(obstacle);
    }
    info!("arena ready with {} obstacles", collision_world.obstacles.len());
    commands.insert_resource(collision_world);

    let feet = Vec3::new(0.0, spawn_config.spawn_height, 0.0);
    let player = spawn_player(&mut commands, &mut meshes, &mut materials, spawn_config.settings, feet);
    info!("spawned player {player} at {feet} with {:?}", spawn_config.settings);
}

// Spawn the player root at its feet with a capsule model child, returning the new entity id
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: LocomotionSettings,
    feet: Vec3,
) -> Entity {
    let body = KinematicBody::default();
    let capsule = Capsule3d::new(body.radius, body.height - 2.0 * body.radius);

    commands
        .spawn(PlayerBundle {
            player_marker: PlayerMarker,
            settings,
            state: LocomotionState::default(),
            input: PlayerInput::default(),
            facing: Facing::default(),
            position: Position(feet),
            body,
            animator: AnimatorParameters::default(),
            transform: Transform::from_translation(feet),
            visibility: Visibility::Visible,
        })
        .with_children(|parent| {
            parent
                .spawn((
                    PlayerModelMarker,
                    PoseAnimation::default(),
                    Mesh3d(meshes.add(capsule)),
                    MeshMaterial3d(materials.add(rgb(PLAYER_COLOR))),
                    Transform::from_xyz(0.0, body.height / 2.0, 0.0),
                ))
                .with_children(|model| {
                    // Nose on the forward (-Z) side so facing is visible
                    model.spawn((
                        Mesh3d(meshes.add(Cuboid::new(0.2, 0.2, 0.3))),
                        MeshMaterial3d(materials.add(rgb(PLAYER_NOSE_COLOR))),
                        Transform::from_xyz(0.0, body.height * 0.3, -body.radius),
                    ));
                });
        })
        .id()
}

fn rgb(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_common::locomotion::jump_velocity;

    #[test]
    fn obstacles_are_above_ground() {
        for obstacle in arena_obstacles() {
            let bottom = obstacle.center.y - obstacle.half_extents.y;
            assert!(bottom >= 0.0, "{obstacle:?}");
        }
    }

    #[test]
    fn crate_is_reachable_and_ledge_is_not() {
        let settings = LocomotionSettings::default();
        let v = jump_velocity(settings.jump_height, settings.gravity);
        let apex = v * v / (2.0 * -settings.gravity);

        let tops: Vec<f32> = arena_obstacles()
            .iter()
            .filter(|o| o.center.y - o.half_extents.y < 1e-6)
            .map(|o| o.center.y + o.half_extents.y)
            .collect();
        assert!(tops.iter().any(|&top| top < apex));
        assert!(tops.iter().any(|&top| top > apex));
    }
}
