//! Criterion benchmarks for the CPU baseline add loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use clbench::cpu;

fn bench_cpu_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_add");

    for size in [1_000usize, 10_000, 100_000].iter() {
        let (a, b) = cpu::make_vectors(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| cpu::time_add(black_box(&a), black_box(&b), 1))
        });
    }

    group.finish();
}

fn bench_cpu_add_iterated(c: &mut Criterion) {
    let (a, b) = cpu::make_vectors(10_000);
    let mut group = c.benchmark_group("cpu_add_iterated");

    for iterations in [1usize, 10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            iterations,
            |bench, &iterations| bench.iter(|| cpu::time_add(black_box(&a), black_box(&b), iterations)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cpu_add, bench_cpu_add_iterated);
criterion_main!(benches);
