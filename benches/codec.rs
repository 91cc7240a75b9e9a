//! Encode/decode throughput on text-like and uniform ASCII input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use static_huffman::HuffmanCodec;

fn make_pattern(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    while out.len() < len {
        out.extend_from_slice(pattern);
    }
    out.truncate(len);
    out
}

fn make_random_ascii(len: usize, mut seed: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
        out.push(((seed >> 16) & 0x7f) as u8);
    }
    out
}

fn bench_codec(c: &mut Criterion) {
    let codec = HuffmanCodec::new();
    let mut group = c.benchmark_group("huffman");

    for (name, data) in [
        ("pattern_64k", make_pattern(64 * 1024)),
        ("random_64k", make_random_ascii(64 * 1024, 7)),
    ] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)).unwrap())
        });

        let compressed = codec.encode(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", name), &compressed, |b, compressed| {
            b.iter(|| {
                codec
                    .decode(black_box(&compressed.packed), &compressed.code_book)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
