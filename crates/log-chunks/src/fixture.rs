//! Random log chunk fixtures for tests and benchmarks.

use rand_core::CryptoRngCore;

use crate::{LogChunk, LogChunks};

/// Length of each chunk produced by [`random_fixture`], roughly the size of
/// one encrypted note preimage.
pub const RANDOM_CHUNK_LEN: usize = 144;

/// Generates `chunk_count` chunks of [`RANDOM_CHUNK_LEN`] random bytes each.
///
/// Not part of the wire format.  The RNG is passed in so tests can use a
/// seeded one.
pub fn random_fixture<R: CryptoRngCore + ?Sized>(rng: &mut R, chunk_count: usize) -> LogChunks {
    (0..chunk_count)
        .map(|_| {
            let mut buf = vec![0u8; RANDOM_CHUNK_LEN];
            rng.fill_bytes(&mut buf);
            LogChunk::new(buf)
        })
        .collect()
}
