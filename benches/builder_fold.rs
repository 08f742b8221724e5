use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use riverbed::{HashMapBuilder, ImmutableHashMapBuilder};

fn immutable_chain(depth: usize) -> ImmutableHashMapBuilder<u32, u64> {
    let mut builder = ImmutableHashMapBuilder::<u32, u64>::create();
    for i in 0..depth {
        let key = (i % 64) as u32;
        builder = match i % 4 {
            0 => builder.with_default(key, i as u64),
            1 => builder.with_value(key, i as u64),
            2 => builder.with_update(key, |v| v + 1),
            _ => builder.without_key(key),
        }
        .unwrap_or_else(|e| panic!("bench keys are always valid: {}", e));
    }
    builder
}

fn bench_immutable_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("immutable_replay");
    for &depth in &[16usize, 256, 4096] {
        let builder = immutable_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &builder, |b, builder| {
            b.iter(|| black_box(builder.build()));
        });
    }
    group.finish();
}

fn bench_immutable_extend(c: &mut Criterion) {
    let base = immutable_chain(1024);
    c.bench_function("immutable_extend", |b| {
        b.iter(|| black_box(base.with_value(black_box(7), 1)))
    });
}

fn bench_mutable_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutable_merge");
    for &keys in &[16u32, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(keys), &keys, |b, &keys| {
            b.iter_batched(
                || {
                    let builder = HashMapBuilder::<u32, u64>::create();
                    for k in 0..keys {
                        let _ = builder.default_entry(k, u64::from(k));
                        if k % 2 == 0 {
                            let _ = builder.value(k, 0);
                        }
                    }
                    builder
                },
                |builder| black_box(builder.merge()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_immutable_replay, bench_immutable_extend, bench_mutable_merge);
criterion_main!(benches);
