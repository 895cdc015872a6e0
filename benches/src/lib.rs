//! Benchmarks for log chunk encoding.
//!
//! Fixtures are built from a seeded RNG so runs are comparable.

#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used for benchmarking"
)]
use criterion as _;
use logchunk_test_utils::seeded_rng;
use logchunk_types::{LogChunks, random_fixture};

/// Chunk counts to test across benchmarks.
pub const CHUNK_COUNTS: &[usize] = &[1, 4, 16, 64, 256, 1_024];

/// Seed used for every benchmark fixture.
const FIXTURE_SEED: u64 = 0x1095;

/// Builds a fixture of `count` random 144 byte chunks.
pub fn fixture(count: usize) -> LogChunks {
    random_fixture(&mut seeded_rng(FIXTURE_SEED), count)
}
