//! # Snowfall Core
//!
//! Simulation half of the Snowfall demo: a fixed pool of falling flakes, the
//! per-frame update that moves, recycles and draws them, and the click impulse
//! that flings them around. Rendering goes through [`surface::RenderSurface`]
//! and randomness through [`rng::SnowRng`], so nothing here needs a window or
//! a GPU.

pub mod error;
pub mod interaction;
pub mod particle;
pub mod rng;
pub mod settings;
pub mod simulation;
pub mod surface;

pub use error::ConfigError;
pub use particle::{Particle, ParticleStore};
pub use rng::SnowRng;
pub use settings::SnowSettings;
pub use simulation::{FrameStats, Snowfall};
pub use surface::{PixelCanvas, RenderSurface, Rgba};
