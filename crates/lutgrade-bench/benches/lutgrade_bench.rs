//! Benchmarks for LUT parsing, sampling and image filtering.
//!
//! Run with: `cargo bench -p lutgrade-bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use lutgrade_core::PixelBuffer;
use lutgrade_lut::{cube, Color, CubeLut, TrilinearSampler};
use lutgrade_ops::{apply, FilterOptions};

/// A smooth non-identity table, so interpolation does real work.
fn warm_lut(size: usize) -> CubeLut {
    let id = CubeLut::identity(size).unwrap();
    let samples = id
        .samples()
        .iter()
        .map(|c| Color::new(c.r.powf(0.9), c.g, c.b * 0.9 + 0.05))
        .collect();
    CubeLut::new(size, samples).unwrap()
}

/// Benchmark single-color trilinear sampling.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    let colors: Vec<Color> = (0..10_000)
        .map(|i| {
            let t = i as f32 / 10_000.0;
            Color::new(t, (t * 3.0).fract(), (t * 7.0).fract())
        })
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    for size in [17, 33, 65] {
        let lut = warm_lut(size);
        let sampler = TrilinearSampler::new(&lut).unwrap();
        group.bench_with_input(BenchmarkId::new("trilinear", size), &colors, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| sampler.sample(black_box(x)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark `.cube` text parsing.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [17, 33, 65] {
        let mut text = Vec::new();
        cube::write_to(&mut text, &warm_lut(size)).unwrap();
        let text = String::from_utf8(text).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("cube", size), &text, |b, t| {
            b.iter(|| cube::parse_str(black_box(t)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark whole-buffer filtering, serial against parallel.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let (w, h) = (1920u32, 1080u32);
    let data: Vec<u8> = (0..(w * h * 3) as usize).map(|i| (i * 31 % 256) as u8).collect();
    let image = PixelBuffer::from_u8(w, h, 3, data).unwrap();
    let lut = warm_lut(33);
    group.throughput(Throughput::Elements(image.pixel_count() as u64));

    for parallel in [false, true] {
        let options = FilterOptions::default().with_parallel(parallel);
        let name = if parallel { "parallel" } else { "serial" };
        group.bench_function(BenchmarkId::new("u8_1080p", name), |b| {
            b.iter(|| apply(black_box(&image), &lut, &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample, bench_parse, bench_filter);
criterion_main!(benches);
