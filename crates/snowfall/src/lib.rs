//! # Snowfall
//!
//! Windowed front end for `snowfall-core`: tens of thousands of falling
//! flakes, scattered by releasing the left mouse button.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod input;
pub mod render;
pub mod screenshot;

#[cfg(not(target_arch = "wasm32"))]
pub use app::App;
