use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use clap::Parser;

use strider::{
    spawning::{SpawnConfig, spawn_arena_system},
    systems::{
        animations::animate_player_model_system,
        cameras::{follow_camera_system, setup_camera_system},
        input::keyboard_input_system,
        sync::{sync_facing_to_transform_system, sync_position_to_transform_system},
    },
};
use strider_common::{
    settings::LocomotionSettings,
    systems::{locomotion_system, report_missing_components_system},
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Third-person locomotion playground", long_about = None)]
struct Args {
    // JSON file with locomotion tuning; missing fields keep their defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    // Height of the player's feet above the ground at spawn (meters)
    #[arg(long, default_value = "1.0")]
    spawn_height: f32,

    // Window X position
    #[arg(long)]
    window_x: Option<i32>,

    // Window Y position
    #[arg(long)]
    window_y: Option<i32>,

    // Window width
    #[arg(long, default_value = "1200")]
    window_width: u32,

    // Window height
    #[arg(long, default_value = "800")]
    window_height: u32,
}

#[cfg(feature = "json")]
fn load_settings(path: Option<&Path>) -> Result<LocomotionSettings> {
    path.map_or_else(|| Ok(LocomotionSettings::default()), LocomotionSettings::load)
}

#[cfg(not(feature = "json"))]
fn load_settings(path: Option<&Path>) -> Result<LocomotionSettings> {
    if let Some(path) = path {
        anyhow::bail!("cannot read {}: built without the json feature", path.display());
    }
    Ok(LocomotionSettings::default())
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // info! doesn't work because Bevy isn't initialized yet, so errors surface through main
    let settings = load_settings(args.settings.as_deref()).context("failed to load locomotion settings")?;
    ensure!(
        args.spawn_height.is_finite() && args.spawn_height >= 0.0,
        "spawn height must be a non-negative number, got {}",
        args.spawn_height
    );

    // Configure window position
    let window_position = if let (Some(x), Some(y)) = (args.window_x, args.window_y) {
        bevy::window::WindowPosition::At(IVec2::new(x, y))
    } else {
        bevy::window::WindowPosition::Automatic
    };

    // Start Bevy app
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Strider".to_string(),
            resolution: (args.window_width, args.window_height).into(),
            position: window_position,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(SpawnConfig {
        settings,
        spawn_height: args.spawn_height,
    })
    .add_systems(Startup, (spawn_arena_system, setup_camera_system))
    .add_systems(
        Update,
        (
            // Read WASD, Shift, Space and C into PlayerInput
            keyboard_input_system,
            // Complain about players that cannot be driven
            report_missing_components_system,
            // Shared locomotion step
            locomotion_system,
            // Sync Position to Transform
            sync_position_to_transform_system,
            // Sync Facing to Transform
            sync_facing_to_transform_system,
            // Pose the player model from animator parameters
            animate_player_model_system,
            // Camera follows player
            follow_camera_system,
        )
            .chain(),
    )
    .run();

    Ok(())
}
