//! Arcball scene control

mod arcball;
mod camera;
pub mod sphere;

pub use arcball::*;
pub use camera::*;
