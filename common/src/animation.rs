use std::collections::{BTreeMap, BTreeSet};

#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;

use crate::{
    constants::{ANIM_CRAWL, ANIM_GROUNDED, ANIM_SPRINT, ANIM_WALK},
    locomotion::AnimationSink,
};

// ============================================================================
// Animator Parameters
// ============================================================================

/// Named animation parameters written by the locomotion step and read by
/// the presentation layer. Triggers stay pending until consumed.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimatorParameters {
    bools: BTreeMap<String, bool>,
    triggers: BTreeSet<String>,
}

impl AnimatorParameters {
    #[must_use]
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_triggered(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    // Returns whether the trigger was pending and clears it
    pub fn consume_trigger(&mut self, name: &str) -> bool {
        self.triggers.remove(name)
    }

    /// Collapse the locomotion booleans into a single pose.
    #[must_use]
    pub fn pose(&self) -> LocomotionPose {
        if !self.get_bool(ANIM_GROUNDED) {
            LocomotionPose::Airborne
        } else if self.get_bool(ANIM_CRAWL) {
            LocomotionPose::Crawl
        } else if self.get_bool(ANIM_SPRINT) {
            LocomotionPose::Sprint
        } else if self.get_bool(ANIM_WALK) {
            LocomotionPose::Walk
        } else {
            LocomotionPose::Idle
        }
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_owned(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_owned());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocomotionPose {
    #[default]
    Idle,
    Walk,
    Sprint,
    Crawl,
    Airborne,
}
