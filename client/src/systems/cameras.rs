use bevy::prelude::*;

use crate::{constants::*, markers::MainCameraMarker};
use strider_common::{components::Position, markers::PlayerMarker};

// ============================================================================
// Camera Setup System
// ============================================================================

pub fn setup_camera_system(mut commands: Commands) {
    // Initial position will be eased toward the player by the follow system
    commands.spawn((
        MainCameraMarker,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::Y * CAMERA_LOOKAT_HEIGHT, Vec3::Y),
    ));
}

// ============================================================================
// Follow Camera System
// ============================================================================

#[must_use]
pub fn follow_target(feet: Vec3) -> Vec3 {
    feet + CAMERA_OFFSET
}

// Ease the camera toward its spot behind the player and keep it aimed at the chest
pub fn follow_camera_system(
    time: Res<Time>,
    player_query: Query<&Position, With<PlayerMarker>>,
    mut camera_query: Query<&mut Transform, (With<MainCameraMarker>, Without<PlayerMarker>)>,
) {
    let Some(pos) = player_query.iter().next() else {
        return;
    };

    let t = (time.delta_secs() * CAMERA_FOLLOW_RATE).clamp(0.0, 1.0);
    let look_at = pos.0 + Vec3::Y * CAMERA_LOOKAT_HEIGHT;
    for mut transform in &mut camera_query {
        transform.translation = transform.translation.lerp(follow_target(pos.0), t);
        transform.look_at(look_at, Vec3::Y);
    }
}
