//! Criterion benchmarks for isosurface extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use isomarch::prelude::*;

/// Sphere distance field sampled on a unit lattice.
fn sphere_sample(x: usize, y: usize, z: usize, center: f32, radius: f32) -> f32 {
    let dx = x as f32 - center;
    let dy = y as f32 - center;
    let dz = z as f32 - center;
    radius - (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Dense buffer over a cubic grid of `n` samples per axis.
fn make_dense(n: usize) -> (Vec<f32>, Dims3) {
    let dims = Dims3::new(n, n, n);
    let center = n as f32 / 2.0;
    let radius = n as f32 / 3.0;
    let mut values = vec![0.0f32; dims.volume()];
    for i in 0..dims.volume() {
        let p = dims.pos_from_linear(i);
        values[i] = sphere_sample(p.x, p.y, p.z, center, radius);
    }
    (values, dims)
}

/// Fully-resident slot buffer over a cubic grid of `n` blocks per
/// axis, sampling the same sphere.
fn make_blocks(n: usize) -> (Vec<f32>, Dims3, Vec<i32>) {
    let blocks = Dims3::new(n, n, n);
    let samples = n * BLOCK_DIMS.x;
    let center = samples as f32 / 2.0;
    let radius = samples as f32 / 3.0;

    let mut values = vec![0.0f32; blocks.volume() * BLOCK_VOLUME];
    let mut locations = vec![0i32; blocks.volume()];
    for id in 0..blocks.volume() {
        let bpos = blocks.pos_from_linear(id);
        locations[id] = id as i32;
        for s in 0..BLOCK_VOLUME {
            let local = BLOCK_DIMS.pos_from_linear(s);
            values[id * BLOCK_VOLUME + s] = sphere_sample(
                bpos.x * BLOCK_DIMS.x + local.x,
                bpos.y * BLOCK_DIMS.y + local.y,
                bpos.z * BLOCK_DIMS.z + local.z,
                center,
                radius,
            );
        }
    }
    (values, blocks, locations)
}

fn bench_coarse(c: &mut Criterion) {
    let mut group = c.benchmark_group("coarse_extract");

    for n in [16, 32, 64] {
        let (values, dims) = make_dense(n);
        group.throughput(Throughput::Elements(dims.volume() as u64));

        group.bench_with_input(BenchmarkId::new("sphere", n), &values, |b, values| {
            let field = CoarseField::new(values, dims).unwrap();
            b.iter(|| black_box(extract(&field, CoordMode::unit(), black_box(0.0)).unwrap()))
        });
    }

    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked_extract");

    for n in [4, 8, 16] {
        let (values, blocks, locations) = make_blocks(n);
        let active: Vec<u32> = (0..blocks.volume() as u32).collect();
        group.throughput(Throughput::Elements((blocks.volume() * BLOCK_VOLUME) as u64));

        group.bench_with_input(BenchmarkId::new("serial", n), &active, |b, active| {
            let field = BlockField::new(&values, blocks, &locations).unwrap();
            b.iter(|| {
                black_box(extract_blocks(&field, active, CoordMode::unit(), black_box(0.0)).unwrap())
            })
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", n), &active, |b, active| {
            let field = BlockField::new(&values, blocks, &locations).unwrap();
            b.iter(|| {
                black_box(
                    extract_blocks_parallel(&field, active, CoordMode::unit(), black_box(0.0))
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_coarse, bench_chunked);
criterion_main!(benches);
