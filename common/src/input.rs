#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;

// ============================================================================
// Player Input
// ============================================================================

/// Key state for a single frame.
///
/// Held keys are level-triggered; `jump` and `crawl_toggle` are only set on
/// the frame the key went down.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub jump: bool,
    pub crawl_toggle: bool,
}

impl PlayerInput {
    /// Normalized sum of the held direction keys in world space.
    /// Forward is -Z and right is +X. Opposing keys cancel to zero.
    #[must_use]
    pub fn planar_direction(&self) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if self.forward {
            direction += Vec3::NEG_Z;
        }
        if self.back {
            direction += Vec3::Z;
        }
        if self.left {
            direction += Vec3::NEG_X;
        }
        if self.right {
            direction += Vec3::X;
        }
        direction.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_is_zero() {
        assert_eq!(PlayerInput::default().planar_direction(), Vec3::ZERO);
    }

    #[test]
    fn single_keys_map_to_axes() {
        let forward = PlayerInput {
            forward: true,
            ..PlayerInput::default()
        };
        assert_eq!(forward.planar_direction(), Vec3::NEG_Z);

        let right = PlayerInput {
            right: true,
            ..PlayerInput::default()
        };
        assert_eq!(right.planar_direction(), Vec3::X);
    }

    #[test]
    fn diagonal_is_unit_length() {
        let input = PlayerInput {
            forward: true,
            left: true,
            ..PlayerInput::default()
        };
        let dir = input.planar_direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x < 0.0 && dir.z < 0.0);
        assert!(dir.y.abs() < f32::EPSILON);
    }

    #[test]
    fn opposing_keys_cancel() {
        let input = PlayerInput {
            forward: true,
            back: true,
            left: true,
            right: true,
            ..PlayerInput::default()
        };
        assert_eq!(input.planar_direction(), Vec3::ZERO);

        let three = PlayerInput {
            forward: true,
            back: true,
            right: true,
            ..PlayerInput::default()
        };
        assert_eq!(three.planar_direction(), Vec3::X);
    }
}
