//! Performance benchmarks for oxitune-lz
//!
//! This benchmark suite evaluates:
//! - Pack/unpack speed for both wire formats
//! - Throughput across register-dump-like data patterns
//! - The impact of the search window on speed and ratio
//! - Paired-unit (interleaved) packing overhead

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxitune_lz::{FormatKind, pack, unpack};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Silence - one value held for the whole capture (best compression)
    pub fn silence(size: usize) -> Vec<u8> {
        vec![0x00; size]
    }

    /// Register-like data - long holds with occasional new values
    pub fn register_stream(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut value = 0x1Fu8;
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            if (seed >> 32) & 0xF == 0 {
                value = ((seed >> 40) & 0x1F) as u8;
            }
            data.push(value);
        }
        data
    }

    /// Looped data - a short phrase repeated, the shape of a chip loop
    pub fn looped(size: usize) -> Vec<u8> {
        let phrase: Vec<u8> = (0u8..64).map(|i| (i.wrapping_mul(37)) & 0x1F).collect();
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(phrase.len());
            data.extend_from_slice(&phrase[..chunk_size]);
        }
        data
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Interleaved fine/coarse register pairs for paired-unit benchmarks
    pub fn interleaved(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut fine = 0x40u8;
        let mut seed: u64 = 0xDEADBEEFCAFE1234;
        for frame in 0..size / 2 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            if frame % 64 == 0 {
                fine = (seed >> 32) as u8;
            }
            data.push(fine);
            data.push(0x0B);
        }
        data
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const SHORT: usize = 3 * 1024; // one minute of one register at 50 Hz
    pub const MEDIUM: usize = 32 * 1024;
    pub const LARGE: usize = 256 * 1024;
}

const ALL_PATTERNS: [(&str, PatternGenerator); 5] = [
    ("silence", test_data::silence as PatternGenerator),
    ("register", test_data::register_stream as PatternGenerator),
    ("looped", test_data::looped as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("interleaved", test_data::interleaved as PatternGenerator),
];

/// Benchmark pack speed for both formats
fn bench_pack_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_formats");

    let size = data_sizes::MEDIUM;
    let data = test_data::register_stream(size);

    for kind in [FormatKind::V1, FormatKind::V2] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}", kind)),
            &data,
            |b, data| {
                b.iter(|| {
                    let packed = pack(black_box(data), 1, 512, kind).unwrap();
                    black_box(packed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark pack speed across data patterns
fn bench_pack_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_data_types");

    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in ALL_PATTERNS {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let packed = pack(black_box(data), 1, 512, FormatKind::V1).unwrap();
                    black_box(packed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark pack speed for different input sizes
fn bench_pack_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_sizes");

    let sizes = [
        ("3KB", data_sizes::SHORT),
        ("32KB", data_sizes::MEDIUM),
        ("256KB", data_sizes::LARGE),
    ];

    for (size_name, size) in sizes {
        let data = test_data::register_stream(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let packed = pack(black_box(data), 1, 512, FormatKind::V1).unwrap();
                black_box(packed);
            });
        });
    }

    group.finish();
}

/// Benchmark search window impact on pack speed
fn bench_search_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_distance");

    let size = data_sizes::MEDIUM;
    let data = test_data::register_stream(size);

    for distance in [64, 256, 512, 2048, 8192] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("win_{}", distance)),
            &data,
            |b, data| {
                b.iter(|| {
                    let packed = pack(black_box(data), 1, distance, FormatKind::V1).unwrap();
                    black_box(packed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark unpack speed for both formats
fn bench_unpack_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_formats");

    let size = data_sizes::MEDIUM;
    let data = test_data::register_stream(size);

    for kind in [FormatKind::V1, FormatKind::V2] {
        let packed = pack(&data, 1, 512, kind).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}", kind)),
            &packed,
            |b, packed| {
                b.iter(|| {
                    let unpacked = unpack(black_box(packed), 1, kind).unwrap();
                    black_box(unpacked);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark unpack speed across data patterns
fn bench_unpack_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_data_types");

    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in ALL_PATTERNS {
        let original = generator(size);
        let packed = pack(&original, 1, 512, FormatKind::V1).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &packed,
            |b, packed| {
                b.iter(|| {
                    let unpacked = unpack(black_box(packed), 1, FormatKind::V1).unwrap();
                    black_box(unpacked);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark paired-unit packing against single-byte packing
fn bench_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("granularity");

    let size = data_sizes::MEDIUM;
    let data = test_data::interleaved(size);

    for multiple in [1usize, 2] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("multiple_{}", multiple)),
            &data,
            |b, data| {
                b.iter(|| {
                    let packed = pack(black_box(data), multiple, 512, FormatKind::V1).unwrap();
                    black_box(packed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark compression ratios
fn bench_pack_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_ratio");
    group.sample_size(10);

    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in ALL_PATTERNS {
        let data = generator(size);

        for kind in [FormatKind::V1, FormatKind::V2] {
            let id = format!("{}/{}", pattern_name, kind);

            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let packed = pack(black_box(data), 1, 512, kind).unwrap();
                    let ratio = data.len() as f64 / packed.len() as f64;
                    black_box((packed, ratio));
                });
            });
        }
    }

    group.finish();
}

/// Benchmark roundtrip (pack + unpack)
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in ALL_PATTERNS {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let packed = pack(black_box(data), 1, 512, FormatKind::V1).unwrap();
                    let unpacked = unpack(&packed, 1, FormatKind::V1).unwrap();
                    black_box(unpacked);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pack_formats,
    bench_pack_data_types,
    bench_pack_sizes,
    bench_search_distance,
    bench_unpack_formats,
    bench_unpack_data_types,
    bench_granularity,
    bench_pack_ratio,
    bench_roundtrip,
);

criterion_main!(benches);
