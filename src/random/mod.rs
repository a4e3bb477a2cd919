//! Thread-safe random number generation.
//!
//! - [`SafeRandom`] - a `Mutex`-guarded PRNG that can be shared freely
//!
//! This module requires the `rng` feature to be enabled.

use std::sync::{Mutex, PoisonError};

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A thread-safe random number generator.
///
/// Wraps a [`StdRng`] behind a `Mutex` so one generator can be shared
/// across threads. The lock is held only for the nanoseconds a single
/// draw takes, which also makes it fine to call from async code
/// without a dedicated async guard.
///
/// # Example
///
/// ```
/// use sniffrs::random::SafeRandom;
///
/// let rng = SafeRandom::with_seed(7);
/// let roll = rng.random_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
pub struct SafeRandom {
    rng: Mutex<StdRng>,
}

impl SafeRandom {
    /// Creates a generator seeded from operating-system entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws a value of any type the standard distribution covers.
    ///
    /// ```
    /// use sniffrs::random::SafeRandom;
    ///
    /// let rng = SafeRandom::new();
    /// let p: f64 = rng.random();
    /// assert!((0.0..1.0).contains(&p));
    /// ```
    pub fn random<T>(&self) -> T
    where
        Standard: Distribution<T>,
    {
        let mut rng = self.lock();
        Standard.sample(&mut *rng)
    }

    /// Draws a value uniformly from `range`.
    pub fn random_range<T, R>(&self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        let mut rng = self.lock();
        rng.gen_range(range)
    }

    /// Returns true with probability `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside `0.0..=1.0`, as the underlying
    /// distribution does.
    pub fn random_bool(&self, p: f64) -> bool {
        let mut rng = self.lock();
        rng.gen_bool(p)
    }

    /// Fills `dest` with random bytes.
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        let mut rng = self.lock();
        rng.fill_bytes(dest);
    }

    /// Picks a random element from a slice, or `None` if it is empty.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> Option<&'a T> {
        if elements.is_empty() {
            return None;
        }
        let index = self.random_range(0..elements.len());
        elements.get(index)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        // A panicked holder cannot leave PRNG state half-written in any
        // way that matters; keep handing out numbers.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SafeRandom {
    fn default() -> Self {
        Self::new()
    }
}
