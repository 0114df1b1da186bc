use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqkit::prelude::*;
use seqkit::seq::{from_vec, range};
use seqkit::try_seq;

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.iter(|| {
                let result = range(0, size)
                    .map(|x| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0))
                    .collect();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), size, |b, &size| {
            b.iter(|| {
                let result = range(0, size).reduce(0i64, |acc, x| black_box(acc + x as i64));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("chunk_and_process", size), size, |b, &size| {
            b.iter(|| {
                let result = range(0, size)
                    .partition(100)
                    .map(|chunk| black_box(chunk.len()))
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_buffered_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffered_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        let data: Vec<u32> = (0..*size).rev().collect();
        let seq = from_vec(data);

        group.bench_with_input(BenchmarkId::new("sort", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.clone().sort().count()));
        });

        group.bench_with_input(BenchmarkId::new("group_by", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.clone().group_by(|x| x % 16).count()));
        });

        group.bench_with_input(BenchmarkId::new("uniq", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.clone().map(|x| x % 1_000).uniq().count()));
        });
    }

    group.finish();
}

fn bench_error_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_propagation");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("try_map_collect", size), size, |b, &size| {
            b.iter(|| {
                let result = try_seq::from_seq::<_, String>(range(0u32, size))
                    .try_map(Plain(|x: u32| black_box(x + 1)))
                    .try_filter(Plain(|x: &u32| x % 3 != 0))
                    .try_collect();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("early_error", size), size, |b, &size| {
            b.iter(|| {
                let result = try_seq::from_seq::<_, String>(range(0u32, size))
                    .try_map(Fallible(|x: u32| {
                        if x == size / 2 {
                            Err(format!("failed at {x}"))
                        } else {
                            Ok(x)
                        }
                    }))
                    .try_count();
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_basic_operations,
    bench_buffered_operations,
    bench_error_propagation
);
criterion_main!(benches);
