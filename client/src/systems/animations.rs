use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::{constants::*, markers::PlayerModelMarker};
use strider_common::{
    animation::{AnimatorParameters, LocomotionPose},
    collision::KinematicBody,
    constants::ANIM_JUMP,
    markers::PlayerMarker,
};

// ============================================================================
// Pose Animation
// ============================================================================

// Transform-only stand-in for skeletal clips, driven by the animator parameters
#[derive(Component, Debug, Default)]
pub struct PoseAnimation {
    pub pose: LocomotionPose,
    pub phase: f32,
    pub jump_timer: f32,
}

impl PoseAnimation {
    // Advance the pose and return the model's scale and its center height above the feet
    pub fn advance(&mut self, pose: LocomotionPose, jumped: bool, delta: f32, body_height: f32) -> (Vec3, f32) {
        if pose != self.pose {
            self.pose = pose;
            self.phase = 0.0;
        }
        if jumped {
            self.jump_timer = JUMP_STRETCH_DURATION;
        }

        let frequency = match pose {
            LocomotionPose::Walk => WALK_BOB_FREQUENCY,
            LocomotionPose::Sprint => SPRINT_BOB_FREQUENCY,
            LocomotionPose::Crawl => CRAWL_BOB_FREQUENCY,
            LocomotionPose::Idle | LocomotionPose::Airborne => 0.0,
        };
        self.phase = delta.mul_add(frequency, self.phase).fract();
        let bob = (self.phase * TAU).sin().abs() * BOB_AMPLITUDE;

        let mut height_scale = match pose {
            LocomotionPose::Crawl => CRAWL_SQUASH,
            LocomotionPose::Airborne => AIRBORNE_STRETCH,
            _ => 1.0,
        };
        if self.jump_timer > 0.0 {
            height_scale *= 1.0_f32.lerp(JUMP_STRETCH, self.jump_timer / JUMP_STRETCH_DURATION);
            self.jump_timer = (self.jump_timer - delta).max(0.0);
        }

        // Keep volume roughly constant
        let width_scale = 1.0 / height_scale.sqrt();
        let scale = Vec3::new(width_scale, height_scale, width_scale);
        (scale, body_height * height_scale / 2.0 + bob)
    }
}

pub fn animate_player_model_system(
    time: Res<Time>,
    mut player_query: Query<(Entity, &mut AnimatorParameters, &KinematicBody, &Children), With<PlayerMarker>>,
    mut model_query: Query<(&mut Transform, &mut PoseAnimation), With<PlayerModelMarker>>,
) {
    let delta = time.delta_secs();

    for (entity, mut params, body, children) in &mut player_query {
        let pose = params.pose();
        let jumped = params.consume_trigger(ANIM_JUMP);

        for &child in children {
            let Ok((mut transform, mut animation)) = model_query.get_mut(child) else {
                continue;
            };
            if animation.pose != pose {
                debug!("player {entity} pose {:?} -> {:?}", animation.pose, pose);
            }
            let (scale, height) = animation.advance(pose, jumped, delta, body.height);
            transform.scale = scale;
            transform.translation.y = height;
        }
    }
}
