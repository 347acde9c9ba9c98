//! Snowflake records and the fixed-size store that owns them

use glam::Vec2;

/// A single snowflake
///
/// Velocity uses the fall convention of the frame step: positive `velocity.y`
/// moves the flake down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Visible flakes are strictly above the bottom edge
    pub fn is_active(&self) -> bool {
        self.position.y > 0.0
    }
}

/// Fixed-capacity flake storage
///
/// Sized once at construction and never grown or shrunk; flakes are recycled
/// in place.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Box<[Particle]>,
}

impl ParticleStore {
    /// Create `count` zeroed (and therefore inactive) flakes
    pub fn new(count: usize) -> Self {
        Self {
            particles: vec![Particle::default(); count].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of flakes currently visible
    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_active()).count()
    }
}

impl std::ops::Index<usize> for ParticleStore {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl std::ops::IndexMut<usize> for ParticleStore {
    fn index_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_zeroed_and_inactive() {
        let store = ParticleStore::new(128);
        assert_eq!(store.len(), 128);
        assert!(store.iter().all(|p| *p == Particle::default()));
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_activity_is_strictly_above_zero() {
        let mut particle = Particle::default();
        assert!(!particle.is_active());

        particle.position.y = f32::MIN_POSITIVE;
        assert!(particle.is_active());

        particle.position.y = -3.0;
        assert!(!particle.is_active());

        // x never affects visibility
        particle.position = Vec2::new(-1.0e6, 10.0);
        assert!(particle.is_active());
    }

    #[test]
    fn test_indexed_access() {
        let mut store = ParticleStore::new(3);
        store[1].position = Vec2::new(5.0, 6.0);
        assert_eq!(store.get(1).map(|p| p.position), Some(Vec2::new(5.0, 6.0)));
        assert!(store.get(3).is_none());

        if let Some(p) = store.get_mut(2) {
            p.velocity = Vec2::ONE;
        }
        assert_eq!(store.as_slice()[2].velocity, Vec2::ONE);
        assert_eq!(store.active_count(), 1);
    }
}
