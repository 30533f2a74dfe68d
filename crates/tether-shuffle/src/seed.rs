//! Seed generation.
//!
//! Seeds for [`Shuffler::shuffle`](crate::Shuffler::shuffle) feed a
//! deterministic generator that is not cryptographically secure. When the
//! seed itself must be unpredictable, draw it from the operating system's
//! CSPRNG with [`generate_seed`].

use rand::rngs::OsRng;
use rand::TryRngCore;

use tether_core::SeedError;

/// Source of shuffle seeds.
pub trait SeedSource {
    /// Returns a fresh seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::RandomSource`] if the underlying source is
    /// unavailable or fails to produce data.
    fn next_seed(&self) -> Result<u64, SeedError>;
}

/// Seeds drawn from the operating system's secure random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn next_seed(&self) -> Result<u64, SeedError> {
        let mut rng = OsRng;
        rng.try_next_u64()
            .map_err(|err| SeedError::RandomSource(err.to_string()))
    }
}

/// Produces a seed from the operating system's secure random source.
///
/// # Examples
///
/// ```
/// use tether_shuffle::generate_seed;
///
/// let seed = generate_seed().expect("entropy available");
/// let _ = seed;
/// ```
pub fn generate_seed() -> Result<u64, SeedError> {
    generate_seed_from(&OsSeedSource)
}

/// Produces a seed from the given source. Failures are not retried.
pub fn generate_seed_from<S: SeedSource + ?Sized>(source: &S) -> Result<u64, SeedError> {
    source.next_seed()
}
