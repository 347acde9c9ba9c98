//! Per-frame flake update, recycling and drawing

use glam::Vec2;

use crate::error::ConfigError;
use crate::interaction::apply_radial_impulse;
use crate::particle::{Particle, ParticleStore};
use crate::rng::SnowRng;
use crate::settings::{BACKGROUND, SnowSettings};
use crate::surface::{RenderSurface, Rgba};

/// What one call to [`Snowfall::advance_and_render`] did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Time step applied to every flake
    pub dt: f64,
    /// Flakes drawn this frame
    pub visible: usize,
    /// Inactive flakes sent back to the top this frame
    pub respawned: usize,
}

/// The snowfall simulation: flake store plus frame clock
pub struct Snowfall {
    settings: SnowSettings,
    particles: ParticleStore,
    /// Timestamp of the previous frame; 0 until the first frame, so the
    /// first `dt` equals the first timestamp
    previous_time: f64,
}

impl Snowfall {
    /// Create a simulation with every flake zeroed and inactive
    pub fn new(settings: SnowSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let particles = ParticleStore::new(settings.particle_count);

        log::debug!(
            "Snowfall created: {} flakes, viewport {}x{}",
            settings.particle_count,
            settings.viewport_width,
            settings.viewport_height
        );

        Ok(Self {
            settings,
            particles,
            previous_time: 0.0,
        })
    }

    pub fn settings(&self) -> &SnowSettings {
        &self.settings
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticleStore {
        &mut self.particles
    }

    /// Timestamp passed to the most recent frame (0 before the first)
    pub fn previous_time(&self) -> f64 {
        self.previous_time
    }

    /// Advance every flake to `current_time`, recycle fallen ones and draw
    /// the visible ones into `surface`
    ///
    /// `current_time` should not decrease between calls; if it does, flakes
    /// simply move backwards for one frame.
    pub fn advance_and_render<S, R>(
        &mut self,
        current_time: f64,
        surface: &mut S,
        rng: &mut R,
    ) -> FrameStats
    where
        S: RenderSurface + ?Sized,
        R: SnowRng + ?Sized,
    {
        let dt = current_time - self.previous_time;
        self.previous_time = current_time;

        surface.clear_screen(BACKGROUND);

        let settings = &self.settings;
        let flake_extent = Vec2::splat(settings.flake_size);
        let mut stats = FrameStats {
            dt,
            ..Default::default()
        };

        for (index, particle) in self.particles.iter_mut().enumerate() {
            // Integrate in f64, narrow once
            let position = particle.position.as_dvec2();
            let velocity = particle.velocity.as_dvec2();
            particle.position = Vec2::new(
                (position.x + dt * velocity.x) as f32,
                (position.y - dt * velocity.y) as f32,
            );

            if particle.is_active() {
                let color = Rgba::grey(settings.brightness_for(index));
                surface.fill_solid_rectangle(
                    particle.position,
                    particle.position + flake_extent,
                    color,
                );
                stats.visible += 1;
            } else if rng.gen_f32() > settings.snowiness {
                respawn(particle, index, settings, rng);
                stats.respawned += 1;
            }
        }

        stats
    }

    /// Apply the click impulse at `click_x, click_y` (render coordinates)
    pub fn on_primary_click_release(&mut self, click_x: f32, click_y: f32) {
        log::debug!("Click released at x={}, y={}", click_x, click_y);
        apply_radial_impulse(
            &mut self.particles,
            Vec2::new(click_x, click_y),
            self.settings.impulse_strength,
            self.settings.impulse_softening,
        );
    }
}

/// Send a flake back to the top edge
///
/// Draws x first, then the horizontal drift.
fn respawn<R: SnowRng + ?Sized>(
    particle: &mut Particle,
    index: usize,
    settings: &SnowSettings,
    rng: &mut R,
) {
    particle.position = Vec2::new(
        settings.viewport_width * rng.gen_f32(),
        settings.viewport_height,
    );
    particle.velocity = Vec2::new(
        (rng.gen_f32() - 0.5) * settings.drift,
        settings.fall_speed_for(index),
    );
}
