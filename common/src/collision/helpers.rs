use bevy_math::Vec3;

use crate::constants::PHYSICS_EPSILON;

/// Axis-aligned box given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[must_use]
    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

// Check if two 1D ranges overlap by more than the contact tolerance (touching doesn't count).
#[must_use]
pub fn ranges_overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min + PHYSICS_EPSILON && a_min < b_max - PHYSICS_EPSILON
}

// Clamp travel of `moving` along one axis (0 = X, 1 = Y, 2 = Z) so it stops at the face of `obstacle`.
// Obstacles already overlapping on the travel axis are ignored so a penetrating body can escape.
#[must_use]
pub fn clamp_axis_travel(moving: &Aabb, obstacle: &Aabb, axis: usize, travel: f32) -> f32 {
    let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);
    if !ranges_overlap_1d(moving.min[a], moving.max[a], obstacle.min[a], obstacle.max[a])
        || !ranges_overlap_1d(moving.min[b], moving.max[b], obstacle.min[b], obstacle.max[b])
    {
        return travel;
    }

    if travel > 0.0 {
        let gap = obstacle.min[axis] - moving.max[axis];
        if gap >= -PHYSICS_EPSILON {
            return travel.min(gap.max(0.0));
        }
    } else if travel < 0.0 {
        let gap = obstacle.max[axis] - moving.min[axis];
        if gap <= PHYSICS_EPSILON {
            return travel.max(gap.min(0.0));
        }
    }

    travel
}
