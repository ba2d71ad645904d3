use bevy::prelude::*;

// ============================================================================
// Player Markers
// ============================================================================

// Marker component for the visible player model (child of the player entity)
#[derive(Component)]
pub struct PlayerModelMarker;

// ============================================================================
// Camera Markers
// ============================================================================

// Marker component for the main camera
#[derive(Component)]
pub struct MainCameraMarker;

// ============================================================================
// Map Markers
// ============================================================================

// Marker component for the ground plane
#[derive(Component)]
pub struct GroundMarker;

// Marker component for solid obstacles
#[derive(Component)]
pub struct ObstacleMarker;
