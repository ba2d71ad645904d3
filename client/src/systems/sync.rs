use bevy::prelude::*;

use strider_common::{
    components::{Facing, Position},
    markers::PlayerMarker,
};

// ============================================================================
// Sync Systems
// ============================================================================

// Update Transform from Position; the player root sits at the feet
pub fn sync_position_to_transform_system(mut query: Query<(&Position, &mut Transform), With<PlayerMarker>>) {
    for (pos, mut transform) in &mut query {
        transform.translation = pos.0;
    }
}

// Update Transform rotation from Facing
pub fn sync_facing_to_transform_system(mut query: Query<(&Facing, &mut Transform), With<PlayerMarker>>) {
    for (facing, mut transform) in &mut query {
        transform.rotation = facing.0;
    }
}
