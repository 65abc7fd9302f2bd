//! Criterion benchmarks for fate_core draws.
//!
//! Measures uniform primitives against the shaped distributions built on
//! them, to show how many underlying draws each shape costs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fate_core::{Distributions, Generator, Roller, UniformSource};

/// Benchmark the uniform core primitives.
fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    let mut rng = Generator::from_seed(42);

    group.bench_function("int", |b| b.iter(|| rng.int(black_box(100)).unwrap()));
    group.bench_function("int_inclusive_range", |b| {
        b.iter(|| rng.int_inclusive_range(black_box(-50), black_box(50)).unwrap())
    });
    group.bench_function("float", |b| b.iter(|| rng.float(black_box(1.0)).unwrap()));

    group.finish();
}

/// Benchmark shaped distributions across parameter sizes.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let mut rng = Generator::from_seed(42);

    for dice in [1, 3, 10] {
        group.bench_with_input(BenchmarkId::new("roll_d6", dice), &dice, |b, &dice| {
            b.iter(|| rng.roll(black_box(dice), 6).unwrap());
        });
    }

    group.bench_function("triangle_int", |b| {
        b.iter(|| rng.triangle_int(black_box(10), black_box(4)).unwrap())
    });

    for odds in [2, 4, 10] {
        group.bench_with_input(BenchmarkId::new("walk_both", odds), &odds, |b, &odds| {
            b.iter(|| rng.walk(0, black_box(odds), black_box(odds)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("taper", odds), &odds, |b, &odds| {
            b.iter(|| rng.taper(0, 1, 1, black_box(odds)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark notation parsing and rolling.
fn bench_roller(c: &mut Criterion) {
    let mut group = c.benchmark_group("roller");

    group.bench_function("parse", |b| {
        b.iter(|| black_box("3d6^1:4").parse::<Roller>().unwrap())
    });

    let roller: Roller = "3d6^1:4".parse().unwrap();
    let mut rng = Generator::from_seed(42);
    group.bench_function("roll", |b| b.iter(|| roller.roll(&mut rng).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_distributions, bench_roller);
criterion_main!(benches);
