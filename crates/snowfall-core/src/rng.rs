//! Random source abstraction for the frame step
//!
//! Lets the step run against:
//! - `rand` generators (thread-local or seeded Xoshiro in the app)
//! - scripted sequences in tests (`ScriptedRng`, behind the `test-utils` feature)

/// Uniform random source used for respawn placement
pub trait SnowRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> SnowRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

/// Test support: replays a fixed list of values, wrapping around at the end
///
/// Values are not checked against [0, 1) so tests can force a roll past any
/// threshold. An empty list replays 0.0.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(any(test, feature = "test-utils"))]
impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Source that returns the same value forever
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

// Not rand::Rng, so the blanket impl above does not apply
#[cfg(any(test, feature = "test-utils"))]
impl SnowRng for ScriptedRng {
    fn gen_f32(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_snow_rng_gen_f32_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            let val = rng.gen_f32();
            assert!(val >= 0.0);
            assert!(val < 1.0);
        }
    }

    #[test]
    fn test_snow_rng_deterministic() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f32(), rng2.gen_f32());
        }
    }

    #[test]
    fn test_scripted_rng_wraps() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.gen_f32(), 0.1);
        assert_eq!(rng.gen_f32(), 0.9);
        assert_eq!(rng.gen_f32(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_rng_empty_replays_zero() {
        let mut rng = ScriptedRng::new(Vec::new());
        assert_eq!(rng.gen_f32(), 0.0);
        assert_eq!(rng.gen_f32(), 0.0);
    }

    #[test]
    fn test_scripted_rng_allows_out_of_range() {
        let mut rng = ScriptedRng::constant(1.0);
        assert_eq!(rng.gen_f32(), 1.0);
    }
}
