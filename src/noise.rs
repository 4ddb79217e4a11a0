//! White noise generator.

use crate::Signal;
use rand::Rng;

/// A white noise source.
///
/// Each sample is an independent random value uniformly distributed between
/// -1.0 and 1.0. The generator defaults to thread-local process entropy;
/// pass a seeded RNG via [`WhiteNoise::with_rng`] when byte-identical output
/// across runs is required.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a white noise source drawing from the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new();
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for WhiteNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise source with an explicit RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use waveforge::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
