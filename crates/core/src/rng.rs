//! RNG module - injectable random sources
//!
//! Every random decision in the core (food placement, color picks, particle
//! angles/speeds/sizes) goes through [`RandomSource`], so the same game can be
//! driven by the thread RNG in production or by the seeded [`SimpleRng`] for
//! reproducible runs and tests.

/// Source of uniformly distributed random numbers.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. Returns 0 when `max == 0`.
    fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Multiply-shift keeps the high bits, which are the good ones for an LCG.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform value in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[lo, hi)`.
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (usable as a seed to replay from here).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for rand::rngs::ThreadRng {
    fn next_u32(&mut self) -> u32 {
        rand::RngCore::next_u32(self)
    }

    fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        rand::Rng::gen_range(self, 0..max)
    }

    fn next_f32(&mut self) -> f32 {
        rand::Rng::gen::<f32>(self)
    }
}

impl RandomSource for rand::rngs::StdRng {
    fn next_u32(&mut self) -> u32 {
        rand::RngCore::next_u32(self)
    }

    fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        rand::Rng::gen_range(self, 0..max)
    }

    fn next_f32(&mut self) -> f32 {
        rand::Rng::gen::<f32>(self)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_below(&mut self, max: u32) -> u32 {
        (**self).next_below(max)
    }

    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for max in [1u32, 2, 3, 16, 28, 1000] {
            for _ in 0..500 {
                assert!(rng.next_below(max) < max);
            }
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn test_next_below_hits_every_bucket() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 16];
        for _ in 0..2000 {
            seen[rng.next_below(16) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "some palette index never drawn");
    }

    #[test]
    fn test_float_ranges() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
            let r = rng.range_f32(2.0, 5.0);
            assert!((2.0..=5.0).contains(&r));
        }
    }

    #[test]
    fn test_std_rng_source() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(RandomSource::next_below(&mut rng, 10) < 10);
            let f = RandomSource::next_f32(&mut rng);
            assert!((0.0..1.0).contains(&f));
        }
    }
}
