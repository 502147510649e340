//! Lumen engine crate.
//!
//! Owns the platform + GPU runtime pieces the game builds on: one window, a
//! wgpu device, a frame clock and a single-shader quad renderer.

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;

pub use lumen_math as math;
