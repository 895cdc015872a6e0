//! Benchmarks for log chunk encode, decode, and join.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use logchunk_benchmarks::{CHUNK_COUNTS, fixture};
#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used for benchmarking"
)]
use logchunk_test_utils as _;
use logchunk_types::{decode, encode, join, serialized_length};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_chunks_encode");

    for &count in CHUNK_COUNTS {
        let chunks = fixture(count);
        group.throughput(Throughput::Bytes(serialized_length(&chunks) as u64));

        group.bench_with_input(BenchmarkId::new("chunks", count), &chunks, |b, chunks| {
            b.iter(|| encode(black_box(chunks)).expect("fixture chunks are encodable"))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_chunks_decode");

    for &count in CHUNK_COUNTS {
        let encoded = encode(&fixture(count)).expect("fixture chunks are encodable");
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("chunks", count), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).expect("fixture blob decodes"))
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_chunks_join");

    for &count in CHUNK_COUNTS {
        let parts = vec![fixture(count); 4];
        group.throughput(Throughput::Elements((count * parts.len()) as u64));

        group.bench_with_input(BenchmarkId::new("chunks", count), &parts, |b, parts| {
            b.iter(|| join(black_box(parts)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_join);
criterion_main!(benches);
