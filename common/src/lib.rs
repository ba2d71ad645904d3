pub mod animation;
pub mod collision;
pub mod components;
pub mod constants;
pub mod input;
pub mod locomotion;
pub mod markers;
pub mod settings;
pub mod systems;
