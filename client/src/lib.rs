pub mod constants;
pub mod markers;
pub mod spawning;
pub mod systems;
