//! Click impulse applied to every flake on pointer release

use glam::Vec2;

use crate::particle::ParticleStore;

/// Replace every flake's velocity with a radial impulse relative to `click`
///
/// `vx` takes the sign of `click.x - x` and the stored `vy` the sign of
/// `-(click.y - y)`. Magnitude falls off with the squared distance;
/// `softening` keeps it finite for flakes right under the pointer.
/// Inactive flakes are affected too. Positions are left untouched.
pub fn apply_radial_impulse(
    particles: &mut ParticleStore,
    click: Vec2,
    strength: f32,
    softening: f32,
) {
    for particle in particles.iter_mut() {
        let delta = click - particle.position;
        let scale = strength / (delta.length_squared() + softening);

        // Vertical velocity is stored in fall convention (positive = down)
        particle.velocity = Vec2::new(delta.x * scale, -delta.y * scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    #[test]
    fn test_impulse_signs_follow_offset() {
        let mut store = ParticleStore::new(4);
        store[0].position = Vec2::new(60.0, 50.0); // right of click
        store[1].position = Vec2::new(40.0, 50.0); // left of click
        store[2].position = Vec2::new(50.0, 70.0); // above click
        store[3].position = Vec2::new(50.0, 30.0); // below click

        apply_radial_impulse(&mut store, Vec2::new(50.0, 50.0), 5.0, 0.1);

        assert!(store[0].velocity.x < 0.0);
        assert!(store[1].velocity.x > 0.0);
        assert_eq!(store[0].velocity.y, 0.0);
        assert_eq!(store[1].velocity.y, 0.0);

        // vy carries the sign of -dy
        assert_eq!(store[2].velocity.y.signum(), 1.0);
        assert_eq!(store[3].velocity.y.signum(), -1.0);
        assert_eq!(store[2].velocity.x, 0.0);
    }

    #[test]
    fn test_impulse_magnitude() {
        let mut store = ParticleStore::new(1);
        store[0].position = Vec2::new(3.0, 4.0);

        apply_radial_impulse(&mut store, Vec2::ZERO, 5.0, 0.1);

        // dx = -3, dy = -4, distSq = 25
        let scale = 5.0 / 25.1;
        assert_eq!(store[0].velocity, Vec2::new(-3.0 * scale, 4.0 * scale));
    }

    #[test]
    fn test_impulse_on_click_point_stays_finite() {
        let mut store = ParticleStore::new(1);
        store[0].position = Vec2::new(10.0, 10.0);

        apply_radial_impulse(&mut store, Vec2::new(10.0, 10.0), 5.0, 0.1);

        assert!(store[0].velocity.is_finite());
        assert_eq!(store[0].velocity.length(), 0.0);
    }

    #[test]
    fn test_impulse_reaches_inactive_flakes_without_moving_them() {
        let mut store = ParticleStore::new(2);
        store[1].position = Vec2::new(0.0, -5.0);

        apply_radial_impulse(&mut store, Vec2::new(100.0, 100.0), 5.0, 0.1);

        for particle in store.iter() {
            assert!(!particle.is_active());
            assert_ne!(particle.velocity, Particle::default().velocity);
        }
        assert_eq!(store[0].position, Vec2::ZERO);
        assert_eq!(store[1].position, Vec2::new(0.0, -5.0));
    }
}
