//! Errors raised when building a simulation from settings

use thiserror::Error;

/// Settings that would make the frame step meaningless or non-finite
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,

    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("flake size must be finite and positive, got {0}")]
    InvalidFlakeSize(f32),

    #[error("snowiness must lie in [0, 1], got {0}")]
    InvalidSnowiness(f32),

    #[error("impulse softening must be finite and positive, got {0}")]
    InvalidSoftening(f32),
}
