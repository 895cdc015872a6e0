//! Test data generators shared by the log chunk crates.

use arbitrary::{Arbitrary, Unstructured};
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRngCore, OsRng, SeedableRng};

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 65_536;

/// Returns a deterministic cryptographic RNG for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Generates `count` byte payloads with lengths in `0..=max_len`.
pub fn random_payloads<R: CryptoRngCore>(
    rng: &mut R,
    count: usize,
    max_len: usize,
) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = (rng.next_u64() % (max_len as u64 + 1)) as usize;
            let mut buf = vec![0u8; len];
            rng.fill_bytes(&mut buf);
            buf
        })
        .collect()
}

#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>, // Persistent buffer
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    /// Creates a new `ArbitraryGenerator` with a default buffer size.
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    /// Creates a new `ArbitraryGenerator` with a specified buffer size.
    ///
    /// The buffer size bounds how much entropy a single generated value can
    /// draw on, so it caps the size of generated byte payloads.
    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an arbitrary instance of type `T` using [`OsRng`].
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        self.generate_with_rng::<T, OsRng>(&mut OsRng)
    }

    /// Generates an arbitrary instance of type `T` from the given RNG.
    ///
    /// # Panics
    ///
    /// If `T` cannot be built from the generated entropy after several
    /// attempts.
    pub fn generate_with_rng<T, R>(&mut self, rng: &mut R) -> T
    where
        T: for<'a> Arbitrary<'a>,
        R: CryptoRngCore,
    {
        const MAX_ATTEMPTS: usize = 16;
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            rng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("Failed to generate arbitrary instance: {error_msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = random_payloads(&mut seeded_rng(7), 8, 64);
        let b = random_payloads(&mut seeded_rng(7), 8, 64);
        assert_eq!(a, b);

        let c = random_payloads(&mut seeded_rng(8), 8, 64);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_payloads_respects_bounds() {
        let payloads = random_payloads(&mut seeded_rng(1), 100, 16);
        assert_eq!(payloads.len(), 100);
        assert!(payloads.iter().all(|p| p.len() <= 16));
    }

    #[test]
    fn test_generate_with_seeded_rng() {
        let mut generator = ArbitraryGenerator::new_with_size(256);
        let a: Vec<Vec<u8>> = generator.generate_with_rng(&mut seeded_rng(3));
        let b: Vec<Vec<u8>> = generator.generate_with_rng(&mut seeded_rng(3));
        assert_eq!(a, b);
    }
}
