//! Random short code generation.
//!
//! Codes are ten characters drawn uniformly from a fixed 63-symbol alphabet,
//! giving 63^10 (about 9.8 * 10^17) possible codes. Collisions are rare but
//! possible, so the allocator retries on a taken code.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Number of characters in every generated code.
pub const CODE_LENGTH: usize = 10;

/// Symbols a code is built from, in the order the original table used.
pub const ALPHABET: &[u8; 63] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Owned, seedable source of short codes.
///
/// The RNG is locked only while a single code is produced and never across
/// an `.await`, so concurrent requests do not serialize on it in practice.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Creates a generator seeded from the operating system's entropy source.
    ///
    /// # Errors
    ///
    /// Returns an error if the system random number generator is unavailable.
    pub fn from_os_rng() -> Result<Self, getrandom::Error> {
        let mut seed = <StdRng as SeedableRng>::Seed::default();
        getrandom::fill(&mut seed)?;
        Ok(Self::from_rng(StdRng::from_seed(seed)))
    }

    /// Creates a deterministic generator. Two generators with the same seed
    /// produce the same sequence of codes.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Produces the next candidate code.
    pub fn generate(&self) -> String {
        // A panic mid-generation cannot leave the RNG in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..CODE_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

impl std::fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGenerator").finish_non_exhaustive()
    }
}
