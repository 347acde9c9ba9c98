//! Tunable constants for the snowfall simulation

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::surface::Rgba;

/// Colour the frame is cleared to before any flake is drawn
pub const BACKGROUND: Rgba = Rgba::new(0.1, 0.2, 0.3, 1.0);

/// Simulation settings, fixed for the lifetime of a [`crate::Snowfall`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowSettings {
    /// Number of flakes in the store
    pub particle_count: usize,
    /// Viewport width in render units
    pub viewport_width: f32,
    /// Viewport height in render units (respawned flakes start here)
    pub viewport_height: f32,
    /// Edge length of the square drawn per flake
    pub flake_size: f32,
    /// Base downward speed in units per millisecond
    pub fall_speed: f32,
    /// Extra downward speed added across the index range
    pub fall_speed_spread: f32,
    /// Respawn threshold; an inactive flake respawns when a roll exceeds it
    pub snowiness: f32,
    /// Width of the random horizontal velocity given on respawn
    pub drift: f32,
    /// Click impulse strength (K)
    pub impulse_strength: f32,
    /// Added to the squared distance to keep the impulse finite (ε)
    pub impulse_softening: f32,
}

impl Default for SnowSettings {
    fn default() -> Self {
        Self {
            particle_count: 50_000,
            viewport_width: 1024.0,
            viewport_height: 768.0,
            flake_size: 2.0,
            fall_speed: 0.04,
            fall_speed_spread: 0.05,
            snowiness: 0.998,
            drift: 0.02,
            impulse_strength: 5.0,
            impulse_softening: 0.1,
        }
    }
}

impl SnowSettings {
    /// Reject settings the frame step cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0)
            || !(self.viewport_height.is_finite() && self.viewport_height > 0.0)
        {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !(self.flake_size.is_finite() && self.flake_size > 0.0) {
            return Err(ConfigError::InvalidFlakeSize(self.flake_size));
        }
        if !(0.0..=1.0).contains(&self.snowiness) {
            return Err(ConfigError::InvalidSnowiness(self.snowiness));
        }
        if !(self.impulse_softening.is_finite() && self.impulse_softening > 0.0) {
            return Err(ConfigError::InvalidSoftening(self.impulse_softening));
        }
        Ok(())
    }

    /// Downward speed given to flake `index` when it respawns
    pub fn fall_speed_for(&self, index: usize) -> f32 {
        self.fall_speed + index as f32 * self.fall_speed_spread / self.particle_count as f32
    }

    /// Grey level of flake `index`, from 0.5 for the first to just under 1.0
    pub fn brightness_for(&self, index: usize) -> f32 {
        0.5 + index as f32 * 0.5 / self.particle_count as f32
    }
}
