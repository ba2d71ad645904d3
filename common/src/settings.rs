use anyhow::{Result, bail, ensure};
use bevy_ecs::prelude::*;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::*;

// ============================================================================
// Locomotion Settings
// ============================================================================

/// Per-character locomotion tuning.
///
/// Each character carries its own copy so differently tuned characters can
/// share the same systems.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default, deny_unknown_fields))]
pub struct LocomotionSettings {
    /// Base planar speed in meters per second.
    pub speed: f32,
    /// Speed factor applied while sprinting.
    pub sprint_multiplier: f32,
    /// Apex height of a jump in meters.
    pub jump_height: f32,
    /// Speed factor applied while crawling. Takes precedence over sprint.
    pub crawl_speed_multiplier: f32,
    /// Vertical acceleration; must be negative.
    pub gravity: f32,
    /// How quickly the character turns toward its heading.
    pub turn_rate: f32,
    /// Vertical velocity forced while grounded and falling.
    pub grounded_stick_velocity: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            jump_height: DEFAULT_JUMP_HEIGHT,
            crawl_speed_multiplier: DEFAULT_CRAWL_SPEED_MULTIPLIER,
            gravity: DEFAULT_GRAVITY,
            turn_rate: DEFAULT_TURN_RATE,
            grounded_stick_velocity: DEFAULT_GROUNDED_STICK_VELOCITY,
        }
    }
}

impl LocomotionSettings {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("speed", self.speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("jump_height", self.jump_height),
            ("crawl_speed_multiplier", self.crawl_speed_multiplier),
            ("gravity", self.gravity),
            ("turn_rate", self.turn_rate),
            ("grounded_stick_velocity", self.grounded_stick_velocity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                bail!("{name} must be finite, got {value}");
            }
        }

        for (name, value) in [
            ("speed", self.speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("jump_height", self.jump_height),
            ("crawl_speed_multiplier", self.crawl_speed_multiplier),
            ("turn_rate", self.turn_rate),
        ] {
            ensure!(value >= 0.0, "{name} must not be negative, got {value}");
        }

        // Jump velocity is sqrt(2 * h * -g)
        ensure!(self.gravity < 0.0, "gravity must point down (negative), got {}", self.gravity);
        ensure!(
            self.grounded_stick_velocity <= 0.0,
            "grounded_stick_velocity must not be positive, got {}",
            self.grounded_stick_velocity
        );

        Ok(())
    }
}

#[cfg(feature = "json")]
mod json {
    use std::{fs, path::Path};

    use anyhow::{Context, Result};

    use super::LocomotionSettings;

    impl LocomotionSettings {
        /// Parse settings from JSON. Missing fields keep their defaults.
        pub fn from_json_str(json: &str) -> Result<Self> {
            let settings: Self = serde_json::from_str(json).context("failed to parse locomotion settings")?;
            settings.validate().context("invalid locomotion settings")?;
            Ok(settings)
        }

        pub fn load(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            Self::from_json_str(&json).with_context(|| format!("in settings file {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = LocomotionSettings::default();
        assert!(settings.validate().is_ok());
        assert!((settings.speed - 5.0).abs() < f32::EPSILON);
        assert!((settings.gravity + 9.81).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_upward_gravity() {
        let settings = LocomotionSettings {
            gravity: 9.81,
            ..LocomotionSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("gravity"));
    }

    #[test]
    fn rejects_negative_speed_and_nan() {
        let negative = LocomotionSettings {
            speed: -1.0,
            ..LocomotionSettings::default()
        };
        assert!(negative.validate().is_err());

        let nan = LocomotionSettings {
            jump_height: f32::NAN,
            ..LocomotionSettings::default()
        };
        let err = nan.validate().unwrap_err();
        assert!(err.to_string().contains("jump_height"));
    }

    #[test]
    fn rejects_negative_multipliers_and_turn_rate() {
        let defaults = LocomotionSettings::default();
        let cases = [
            (
                "sprint_multiplier",
                LocomotionSettings {
                    sprint_multiplier: -1.5,
                    ..defaults
                },
            ),
            (
                "crawl_speed_multiplier",
                LocomotionSettings {
                    crawl_speed_multiplier: -0.5,
                    ..defaults
                },
            ),
            (
                "turn_rate",
                LocomotionSettings {
                    turn_rate: -10.0,
                    ..defaults
                },
            ),
        ];
        for (name, settings) in cases {
            let err = settings.validate().unwrap_err().to_string();
            assert!(err.contains(name) && err.contains("negative"), "{name}: {err}");
        }
    }

    #[test]
    fn rejects_positive_stick_velocity() {
        let settings = LocomotionSettings {
            grounded_stick_velocity: 2.0,
            ..LocomotionSettings::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("grounded_stick_velocity"), "{err}");

        // Zero means no stick, which is allowed
        let zero = LocomotionSettings {
            grounded_stick_velocity: 0.0,
            ..LocomotionSettings::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[cfg(feature = "json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let settings = LocomotionSettings::from_json_str(r#"{ "speed": 3.5, "jump_height": 1.0 }"#).unwrap();
        assert!((settings.speed - 3.5).abs() < f32::EPSILON);
        assert!((settings.jump_height - 1.0).abs() < f32::EPSILON);
        assert!((settings.sprint_multiplier - DEFAULT_SPRINT_MULTIPLIER).abs() < f32::EPSILON);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_is_validated() {
        assert!(LocomotionSettings::from_json_str(r#"{ "gravity": 1.0 }"#).is_err());
        assert!(LocomotionSettings::from_json_str(r#"{ "sped": 1.0 }"#).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn load_reports_missing_file() {
        let err = LocomotionSettings::load("does/not/exist.json").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}
