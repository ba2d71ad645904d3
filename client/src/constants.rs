use bevy::math::Vec3;

// ============================================================================
// Client Constants
// ============================================================================

// Third-person follow camera
pub const CAMERA_FOV_DEGREES: f32 = 60.0; // Field of view in degrees
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 4.0, 7.0); // From the player's feet (behind is +Z)
pub const CAMERA_LOOKAT_HEIGHT: f32 = 1.2; // Look at chest height
pub const CAMERA_FOLLOW_RATE: f32 = 6.0; // Higher is snappier

// Lighting
pub const LIGHT_DIRECTIONAL_BRIGHTNESS: f32 = 8000.0;

// Arena
pub const ARENA_SIZE: f32 = 40.0; // Ground plane edge length (meters)
pub const GROUND_COLOR: [f32; 3] = [0.35, 0.45, 0.35];
pub const OBSTACLE_COLOR: [f32; 3] = [0.55, 0.5, 0.45];
pub const PLAYER_COLOR: [f32; 3] = [0.2, 0.45, 0.9];
pub const PLAYER_NOSE_COLOR: [f32; 3] = [0.95, 0.8, 0.2];

// Pose animation of the player model
pub const WALK_BOB_FREQUENCY: f32 = 2.0; // Steps per second
pub const SPRINT_BOB_FREQUENCY: f32 = 3.2;
pub const CRAWL_BOB_FREQUENCY: f32 = 1.2;
pub const BOB_AMPLITUDE: f32 = 0.06; // meters
pub const CRAWL_SQUASH: f32 = 0.45; // Model height scale while crawling
pub const AIRBORNE_STRETCH: f32 = 1.08;
pub const JUMP_STRETCH: f32 = 1.25;
pub const JUMP_STRETCH_DURATION: f32 = 0.2; // seconds
