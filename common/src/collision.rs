mod helpers;

pub use helpers::{Aabb, clamp_axis_travel, ranges_overlap_1d};

#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::{
    components::Position,
    constants::{CAPSULE_HEIGHT, CAPSULE_RADIUS, PHYSICS_EPSILON},
    locomotion::CharacterMover,
};

// ============================================================================
// Static World
// ============================================================================

// Axis-aligned solid box in the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Obstacle {
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, self.half_extents)
    }
}

// Everything a kinematic body can collide with: an infinite ground plane plus boxes
#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionWorld {
    pub ground_height: f32,
    pub obstacles: Vec<Obstacle>,
}

impl CollisionWorld {
    #[must_use]
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }
}

// Which sides of the body were blocked during a move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub below: bool,
    pub sides: bool,
    pub above: bool,
}

// ============================================================================
// Kinematic Body
// ============================================================================

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub radius: f32,
    pub height: f32,
    // Set by the most recent move; true when it ended resting on a support
    pub grounded: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            radius: CAPSULE_RADIUS,
            height: CAPSULE_HEIGHT,
            grounded: false,
        }
    }
}

impl KinematicBody {
    // The capsule is approximated by its bounding box
    #[must_use]
    pub fn bounds(&self, feet: Vec3) -> Aabb {
        Aabb {
            min: feet - Vec3::new(self.radius, 0.0, self.radius),
            max: feet + Vec3::new(self.radius, self.height, self.radius),
        }
    }
}

/// Move a body's feet by `displacement`, resolving Y, then X, then Z.
///
/// Each axis is clamped against the ground plane (downward only) and every
/// obstacle overlapping on the other two axes. Clamping per axis makes a
/// blocked diagonal move slide along the obstacle. A move without vertical
/// travel reports `below` when the body already rests on a support.
#[must_use]
pub fn move_capsule(world: &CollisionWorld, body: &KinematicBody, feet: Vec3, displacement: Vec3) -> (Vec3, CollisionFlags) {
    let mut bounds = body.bounds(feet);
    let mut flags = CollisionFlags::default();
    let mut moved = Vec3::ZERO;

    for axis in [1, 0, 2] {
        let requested = displacement[axis];
        if requested.abs() < PHYSICS_EPSILON {
            if axis == 1 {
                flags.below = rests_on_support(world, &bounds);
            }
            continue;
        }

        let mut travel = requested;
        if axis == 1 && travel < 0.0 {
            // Also stops a body that starts below the ground from sinking further
            let gap = world.ground_height - bounds.min.y;
            travel = travel.max(gap.min(0.0));
        }
        for obstacle in &world.obstacles {
            travel = clamp_axis_travel(&bounds, &obstacle.bounds(), axis, travel);
        }

        if (travel - requested).abs() > PHYSICS_EPSILON {
            match axis {
                1 if requested < 0.0 => flags.below = true,
                1 => flags.above = true,
                _ => flags.sides = true,
            }
        }

        let mut offset = Vec3::ZERO;
        offset[axis] = travel;
        bounds = bounds.translated(offset);
        moved[axis] = travel;
    }

    (feet + moved, flags)
}

// Feet touching the ground plane or the top of an obstacle underneath
fn rests_on_support(world: &CollisionWorld, bounds: &Aabb) -> bool {
    if (bounds.min.y - world.ground_height).abs() <= PHYSICS_EPSILON {
        return true;
    }
    world.obstacles.iter().any(|obstacle| {
        let top = obstacle.bounds();
        (bounds.min.y - top.max.y).abs() <= PHYSICS_EPSILON
            && ranges_overlap_1d(bounds.min.x, bounds.max.x, top.min.x, top.max.x)
            && ranges_overlap_1d(bounds.min.z, bounds.max.z, top.min.z, top.max.z)
    })
}

// ============================================================================
// Mover
// ============================================================================

// Binds a body, its position and the static world for one locomotion step
pub struct CapsuleMover<'a> {
    pub body: &'a mut KinematicBody,
    pub position: &'a mut Position,
    pub world: &'a CollisionWorld,
}

impl CharacterMover for CapsuleMover<'_> {
    fn move_by(&mut self, displacement: Vec3) -> CollisionFlags {
        let (feet, flags) = move_capsule(self.world, self.body, self.position.0, displacement);
        self.position.0 = feet;
        self.body.grounded = flags.below;
        flags
    }

    fn is_grounded(&self) -> bool {
        self.body.grounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_at_x(x: f32) -> Obstacle {
        Obstacle {
            center: Vec3::new(x, 2.0, 0.0),
            half_extents: Vec3::new(0.5, 2.0, 5.0),
        }
    }

    #[test]
    fn falling_body_lands_on_ground() {
        let world = CollisionWorld::default();
        let body = KinematicBody::default();
        let (feet, flags) = move_capsule(&world, &body, Vec3::new(0.0, 0.3, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(feet.y.abs() < 1e-6);
        assert!(flags.below);
        assert!(!flags.sides && !flags.above);
    }

    #[test]
    fn free_fall_is_not_grounded() {
        let world = CollisionWorld::default();
        let body = KinematicBody::default();
        let (feet, flags) = move_capsule(&world, &body, Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!((feet.y - 4.0).abs() < 1e-6);
        assert!(!flags.below);
    }

    #[test]
    fn wall_blocks_and_sets_sides() {
        let world = CollisionWorld::default().with_obstacle(wall_at_x(3.0));
        let body = KinematicBody::default();
        let (feet, flags) = move_capsule(&world, &body, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        // Wall face at x = 2.5, body radius 0.5
        assert!((feet.x - 2.0).abs() < 1e-5);
        assert!(flags.sides);
    }

    #[test]
    fn diagonal_slides_along_wall() {
        let world = CollisionWorld::default().with_obstacle(wall_at_x(3.0));
        let body = KinematicBody::default();
        let (feet, flags) = move_capsule(&world, &body, Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, -1.0));
        assert!((feet.x - 2.0).abs() < 1e-5);
        assert!((feet.z + 1.0).abs() < 1e-5);
        assert!(flags.sides);
    }

    #[test]
    fn box_top_supports_body() {
        let crate_box = Obstacle {
            center: Vec3::new(0.0, 0.5, 0.0),
            half_extents: Vec3::splat(0.5),
        };
        let world = CollisionWorld::default().with_obstacle(crate_box);
        let body = KinematicBody::default();
        let (feet, flags) = move_capsule(&world, &body, Vec3::new(0.2, 1.5, 0.0), Vec3::new(0.0, -2.0, 0.0));
        assert!((feet.y - 1.0).abs() < 1e-5);
        assert!(flags.below);
    }

    #[test]
    fn ceiling_sets_above() {
        let ceiling = Obstacle {
            center: Vec3::new(0.0, 3.0, 0.0),
            half_extents: Vec3::new(5.0, 0.5, 5.0),
        };
        let world = CollisionWorld::default().with_obstacle(ceiling);
        let body = KinematicBody::default();
        let (feet, flags) = move_capsule(&world, &body, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!((feet.y - 0.5).abs() < 1e-5);
        assert!(flags.above);
    }

    #[test]
    fn mover_tracks_grounded_from_last_move() {
        let world = CollisionWorld::default();
        let mut body = KinematicBody::default();
        let mut position = Position(Vec3::ZERO);
        let mut mover = CapsuleMover {
            body: &mut body,
            position: &mut position,
            world: &world,
        };
        assert!(!mover.is_grounded());

        mover.move_by(Vec3::new(0.0, -0.1, 0.0));
        assert!(mover.is_grounded());

        // Sliding along the ground keeps contact
        mover.move_by(Vec3::new(1.0, 0.0, 0.0));
        assert!(mover.is_grounded());

        mover.move_by(Vec3::new(0.0, 0.5, 0.0));
        assert!(!mover.is_grounded());

        mover.move_by(Vec3::new(1.0, 0.0, 0.0));
        assert!(!mover.is_grounded());
        assert!((position.0.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn resting_body_reports_below_without_vertical_travel() {
        let crate_box = Obstacle {
            center: Vec3::new(0.0, 0.5, 0.0),
            half_extents: Vec3::splat(0.5),
        };
        let world = CollisionWorld::default().with_obstacle(crate_box);
        let body = KinematicBody::default();

        let (_, on_ground) = move_capsule(&world, &body, Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO);
        assert!(on_ground.below);

        let (_, on_crate) = move_capsule(&world, &body, Vec3::new(0.2, 1.0, 0.0), Vec3::ZERO);
        assert!(on_crate.below);

        // Level with the crate top but beside it
        let (_, beside_crate) = move_capsule(&world, &body, Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO);
        assert!(!beside_crate.below);

        let (_, midair) = move_capsule(&world, &body, Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO);
        assert!(!midair.below);
    }
}
