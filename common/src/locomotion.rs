use bevy_math::{Quat, Vec3};

use crate::{
    collision::CollisionFlags,
    components::{Facing, LocomotionState},
    constants::{ANIM_CRAWL, ANIM_GROUNDED, ANIM_JUMP, ANIM_SPRINT, ANIM_WALK},
    input::PlayerInput,
    settings::LocomotionSettings,
};

// ============================================================================
// Seams
// ============================================================================

/// Moves a character through the world with collision.
pub trait CharacterMover {
    fn move_by(&mut self, displacement: Vec3) -> CollisionFlags;

    /// Whether the most recent move ended touching the ground.
    fn is_grounded(&self) -> bool;
}

/// Receives animation parameters.
pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}

// ============================================================================
// Helpers
// ============================================================================

// Crawl takes precedence over sprint
#[must_use]
pub fn current_speed(settings: &LocomotionSettings, is_crawling: bool, is_sprinting: bool) -> f32 {
    if is_crawling {
        settings.speed * settings.crawl_speed_multiplier
    } else if is_sprinting {
        settings.speed * settings.sprint_multiplier
    } else {
        settings.speed
    }
}

// Launch speed that reaches `jump_height` under `gravity`: v = sqrt(2 * h * -g)
#[must_use]
pub fn jump_velocity(jump_height: f32, gravity: f32) -> f32 {
    (2.0 * jump_height * -gravity).sqrt()
}

// Rotation about world up whose forward (-Z) points along `direction` projected onto XZ
#[must_use]
pub fn look_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y((-direction.x).atan2(-direction.z))
}

#[must_use]
pub fn turn_towards(current: Quat, target: Quat, t: f32) -> Quat {
    current.slerp(target, t.clamp(0.0, 1.0))
}

// ============================================================================
// Locomotion Step
// ============================================================================

/// Advance one character by one frame.
///
/// Planar movement and the vertical (gravity/jump) move are applied as two
/// separate moves. The grounded flag is sampled once at the start of the
/// frame and used for both the jump check and the `isGround` parameter.
pub fn step_locomotion(
    settings: &LocomotionSettings,
    state: &mut LocomotionState,
    input: &PlayerInput,
    facing: &mut Facing,
    mover: &mut impl CharacterMover,
    animator: &mut impl AnimationSink,
    delta: f32,
) {
    state.is_grounded = mover.is_grounded();
    if state.is_grounded && state.velocity.y < 0.0 {
        state.velocity.y = settings.grounded_stick_velocity;
    }

    state.movement_input = input.planar_direction();

    if input.crawl_toggle {
        state.is_crawling = !state.is_crawling;
    }
    state.is_sprinting = input.sprint && !state.is_crawling;

    let speed = current_speed(settings, state.is_crawling, state.is_sprinting);
    mover.move_by(state.movement_input * speed * delta);

    if state.movement_input != Vec3::ZERO {
        let target = look_rotation(state.movement_input);
        facing.0 = turn_towards(facing.0, target, delta * settings.turn_rate);
    }

    let is_moving = state.is_moving();
    animator.set_bool(ANIM_WALK, is_moving && !state.is_sprinting && !state.is_crawling);
    animator.set_bool(ANIM_SPRINT, is_moving && state.is_sprinting);
    animator.set_bool(ANIM_CRAWL, is_moving && state.is_crawling);
    animator.set_bool(ANIM_GROUNDED, state.is_grounded);

    if input.jump && state.is_grounded {
        state.velocity.y = jump_velocity(settings.jump_height, settings.gravity);
        animator.set_trigger(ANIM_JUMP);
    }

    state.velocity.y += settings.gravity * delta;
    mover.move_by(state.velocity * delta);
}
