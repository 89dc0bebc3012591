// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for the APC40 driver
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Wire codec encode/parse throughput
//! - Address map classification cost
//! - Grid coordinate transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use apc40::protocol::{
    encode_control_change, encode_initialize, encode_note_on, parse_controller_message,
    parse_note_message, Apc40Mode,
};
use apc40::surface::{button_type, controller_type, from_grid, to_grid};

/// Benchmark channel-voice message encoding (hot path for LED updates)
fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_note_on", |b| {
        b.iter(|| encode_note_on(black_box(0x35), black_box(1), black_box(5)))
    });

    c.bench_function("encode_control_change", |b| {
        b.iter(|| encode_control_change(black_box(0x07), black_box(100), black_box(3)))
    });

    c.bench_function("encode_initialize", |b| {
        b.iter(|| {
            encode_initialize(
                black_box(Apc40Mode::AlternateAbleton),
                black_box(1),
                black_box(0),
                black_box(0),
            )
        })
    });
}

/// Benchmark inbound message parsing (runs on the MIDI delivery thread)
fn bench_parse(c: &mut Criterion) {
    let note_message = [0x95u8, 0x35, 0x64];
    let cc_message = [0xB3u8, 0x07, 0x40];

    c.bench_function("parse_note_message", |b| {
        b.iter(|| parse_note_message(black_box(&note_message)))
    });

    c.bench_function("parse_controller_message", |b| {
        b.iter(|| parse_controller_message(black_box(&cc_message)))
    });
}

/// Benchmark address map lookups across the full note/controller space
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    group.bench_function("button_type_full_range", |b| {
        b.iter(|| {
            let mut mapped = 0usize;
            for note in 0u8..128 {
                if button_type(black_box(note)).is_some() {
                    mapped += 1;
                }
            }
            black_box(mapped)
        })
    });

    group.bench_function("controller_type_full_range", |b| {
        b.iter(|| {
            let mut mapped = 0usize;
            for id in 0u8..128 {
                if controller_type(black_box(id)).is_some() {
                    mapped += 1;
                }
            }
            black_box(mapped)
        })
    });

    group.finish();
}

/// Benchmark grid transforms at increasing batch sizes (full-surface
/// LED refresh is 40 cells)
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for cells in [1usize, 40, 400].iter() {
        group.bench_with_input(BenchmarkId::new("round_trip", cells), cells, |b, &cells| {
            b.iter(|| {
                let mut checksum = 0u32;
                for i in 0..cells {
                    let x = (i % 8) as u8;
                    let y = (i % 5) as u8;
                    let (note, channel) = from_grid(black_box(x), black_box(y));
                    if let Some(coord) = to_grid(note, channel) {
                        checksum += (coord.x + coord.y) as u32;
                    }
                }
                black_box(checksum)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_parse,
    bench_classification,
    bench_grid
);
criterion_main!(benches);
