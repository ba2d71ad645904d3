#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_log::error;
use bevy_time::Time;

use crate::{
    animation::AnimatorParameters,
    collision::{CapsuleMover, CollisionWorld, KinematicBody},
    components::{Facing, LocomotionState, Position},
    input::PlayerInput,
    locomotion::step_locomotion,
    markers::PlayerMarker,
    settings::LocomotionSettings,
};

// ============================================================================
// Shared Locomotion Systems
// ============================================================================

type LocomotionQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static LocomotionSettings,
        &'static mut LocomotionState,
        &'static PlayerInput,
        &'static mut Facing,
        &'static mut Position,
        &'static mut KinematicBody,
        &'static mut AnimatorParameters,
    ),
    With<PlayerMarker>,
>;

// Runs the locomotion step once per frame for every fully assembled player.
// Players missing a body or animator are skipped (see report_missing_components_system).
pub fn locomotion_system(time: Res<Time>, world: Option<Res<CollisionWorld>>, mut query: LocomotionQuery) {
    let delta = time.delta_secs();
    let empty_world = CollisionWorld::default();
    let world = world.as_deref().unwrap_or(&empty_world);

    for (settings, mut state, input, mut facing, mut position, mut body, mut animator) in &mut query {
        let mut mover = CapsuleMover {
            body: &mut *body,
            position: &mut *position,
            world,
        };
        step_locomotion(
            settings,
            &mut state,
            input,
            &mut facing,
            &mut mover,
            &mut *animator,
            delta,
        );
    }
}

// Names of the components a player needs before locomotion_system will drive it
#[must_use]
pub fn missing_player_components(has_body: bool, has_animator: bool) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !has_body {
        missing.push("KinematicBody");
    }
    if !has_animator {
        missing.push("AnimatorParameters");
    }
    missing
}

// Log once for each newly added player that cannot be driven
pub fn report_missing_components_system(
    query: Query<(Entity, Has<KinematicBody>, Has<AnimatorParameters>), Added<PlayerMarker>>,
) {
    for (entity, has_body, has_animator) in &query {
        for component in missing_player_components(has_body, has_animator) {
            error!("player {entity} has no {component}; it will not move or animate");
        }
    }
}
