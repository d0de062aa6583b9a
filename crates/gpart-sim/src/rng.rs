//! Random source owned by each simulator

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform random draws for spawn attributes and shape sampling
///
/// Wraps a seedable generator so a simulator created with a fixed seed
/// replays the same particles frame for frame.
#[derive(Debug, Clone)]
pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    /// Create a deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform value in `[0, 1)`
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.inner.random::<f32>()
    }

    /// Uniform value between `a` and `b`; bound order does not matter
    #[inline]
    pub fn range(&mut self, a: f32, b: f32) -> f32 {
        a + (b - a) * self.unit()
    }

    /// Uniform integer in `min..=max`; swapped bounds are reordered
    pub fn count(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }
}
