// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, contact tolerance).
pub const PHYSICS_EPSILON: f32 = 1e-5;

// ============================================================================
// Locomotion Tuning Defaults
// ============================================================================

// Speeds (meters per second)
pub const DEFAULT_SPEED: f32 = 5.0;
pub const DEFAULT_SPRINT_MULTIPLIER: f32 = 1.5;
pub const DEFAULT_CRAWL_SPEED_MULTIPLIER: f32 = 0.5;

// Vertical motion
pub const DEFAULT_JUMP_HEIGHT: f32 = 2.0; // meters
pub const DEFAULT_GRAVITY: f32 = -9.81; // meters per second squared, negative is down
pub const DEFAULT_GROUNDED_STICK_VELOCITY: f32 = -2.0; // keeps the mover pressed onto the ground

// Rotation
pub const DEFAULT_TURN_RATE: f32 = 10.0; // slerp factor per second

// ============================================================================
// Character Capsule
// ============================================================================

// Dimensions (meters)
pub const CAPSULE_HEIGHT: f32 = 2.0; // feet to top of head
pub const CAPSULE_RADIUS: f32 = 0.5;

// ============================================================================
// Animator Parameters
// ============================================================================

pub const ANIM_WALK: &str = "walk";
pub const ANIM_SPRINT: &str = "sprint";
pub const ANIM_CRAWL: &str = "crawl";
pub const ANIM_GROUNDED: &str = "isGround";
pub const ANIM_JUMP: &str = "jump";
