//! Gaussian noise sources for sensor simulation.
//!
//! The ray caster never owns a random generator. Callers pass a
//! [`NoiseSource`] into every simulation call, so a fixed seed reproduces
//! the same scan and independent streams can be handed to worker threads.

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;

/// Mixing constant for deriving per-stream seeds.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Source of independent standard-normal samples.
pub trait NoiseSource {
    /// Draw one sample from N(0, 1).
    fn standard_normal(&mut self) -> f32;

    /// Draw one sample from N(0, stddev²).
    ///
    /// No sample is consumed when `stddev` is not positive.
    #[inline]
    fn gaussian(&mut self, stddev: f32) -> f32 {
        if stddev > 0.0 {
            self.standard_normal() * stddev
        } else {
            0.0
        }
    }
}

/// Noise generator with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: SmallRng,
    seed: u64,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng, seed }
    }

    /// Seed this generator was created with (0 = entropy).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator for stream `stream`.
    ///
    /// Forks of a seeded generator are deterministic per stream index, so a
    /// scan split across threads stays reproducible.
    pub fn fork(&self, stream: u64) -> Self {
        if self.seed == 0 {
            return Self::new(0);
        }
        let derived = self.seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_MIX);
        Self {
            rng: SmallRng::seed_from_u64(derived),
            seed: self.seed,
        }
    }
}

impl NoiseSource for NoiseGenerator {
    #[inline]
    fn standard_normal(&mut self) -> f32 {
        self.rng.sample(StandardNormal)
    }
}

/// Noise source that always returns zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    #[inline]
    fn standard_normal(&mut self) -> f32 {
        0.0
    }
}
