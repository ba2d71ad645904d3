pub mod animations;
pub mod cameras;
pub mod input;
pub mod sync;
