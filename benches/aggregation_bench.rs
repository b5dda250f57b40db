use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gc_pressure::pipeline::{generate, process_data};
use gc_pressure::records::{generate_records, total_value};
use std::hint::black_box;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("generate", size), &size, |b, &size| {
            b.iter(|| generate(black_box(size)))
        });

        let data = generate(size);
        group.bench_with_input(BenchmarkId::new("process", size), &data, |b, data| {
            b.iter(|| process_data(black_box(data)))
        });
    }

    group.finish();
}

fn bench_record_batch(c: &mut Criterion) {
    c.bench_function("record_batch_10k", |b| {
        b.iter(|| total_value(&generate_records(black_box(10_000))))
    });

    let records = generate_records(10_000);
    c.bench_function("record_total_10k", |b| b.iter(|| total_value(black_box(&records))));
}

criterion_group!(benches, bench_pipeline, bench_record_batch);
criterion_main!(benches);
