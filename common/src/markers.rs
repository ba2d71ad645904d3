use bevy_ecs::prelude::*;

// Marker component for entities driven by the locomotion step.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;
