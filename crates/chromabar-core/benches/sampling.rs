//! Criterion benchmarks for chromabar-core
//!
//! Run with: cargo bench -p chromabar-core

use chromabar_core::{ColorSequence, DisplayColor, Gradient, Palette, PaletteMode, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn rainbow() -> Vec<DisplayColor> {
    [
        Rgb::RED,
        Rgb::new(255, 165, 0),
        Rgb::new(255, 255, 0),
        Rgb::GREEN,
        Rgb::BLUE,
        Rgb::new(75, 0, 130),
    ]
    .into_iter()
    .map(DisplayColor::from)
    .collect()
}

// =============================================================================
// SAMPLE BENCHMARKS
// =============================================================================

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    group.sample_size(1000);
    group.throughput(Throughput::Elements(1));

    let gradient = Gradient::new(rainbow()).unwrap();
    let palette = Palette::new(rainbow()).unwrap();

    group.bench_function("gradient", |b| {
        b.iter(|| gradient.sample(black_box(0.37)));
    });

    group.bench_function("palette", |b| {
        b.iter(|| palette.sample(black_box(0.37)));
    });

    group.finish();
}

// =============================================================================
// SEQUENCE BENCHMARKS
// =============================================================================

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    group.sample_size(100);

    for count in [50usize, 200, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        let gradient =
            ColorSequence::gradient(Gradient::new(rainbow()).unwrap(), count).unwrap();
        group.bench_function(format!("gradient_{count}"), |b| {
            b.iter(|| black_box(gradient.to_vec()));
        });

        let spread =
            ColorSequence::palette(Palette::new(rainbow()).unwrap(), PaletteMode::Spread, count)
                .unwrap();
        group.bench_function(format!("palette_spread_{count}"), |b| {
            b.iter(|| black_box(spread.to_vec()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample, bench_sequence);
criterion_main!(benches);
