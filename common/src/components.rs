#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::{Quat, Vec3};

// ============================================================================
// Shared Locomotion Components
// ============================================================================

// Feet position of a character in meters (bottom of the capsule)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position(pub Vec3);

// World rotation of a character; the model's forward is -Z
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Facing(pub Quat);

// Per-frame locomotion state carried between updates
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionState {
    // Only the vertical component is ever written; planar motion is not carried over
    pub velocity: Vec3,
    pub is_grounded: bool,
    pub is_crawling: bool,
    pub is_sprinting: bool,
    // Normalized planar direction from the last processed input
    pub movement_input: Vec3,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            is_grounded: true,
            is_crawling: false,
            is_sprinting: false,
            movement_input: Vec3::ZERO,
        }
    }
}

impl LocomotionState {
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.movement_input.length() > 0.0
    }
}
