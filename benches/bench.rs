// Criterion benchmarks for Mockmint record generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mockmint::{FakeDataGenerator, Locale};

fn bench_single_records(c: &mut Criterion) {
    let generator = FakeDataGenerator::new(Locale::En);

    c.bench_function("generate_user", |b| {
        b.iter(|| black_box(generator.user()));
    });

    c.bench_function("generate_product", |b| {
        b.iter(|| black_box(generator.product()));
    });

    c.bench_function("generate_company", |b| {
        b.iter(|| black_box(generator.company()));
    });

    c.bench_function("generate_address", |b| {
        b.iter(|| black_box(generator.address()));
    });

    c.bench_function("generate_bank_account", |b| {
        b.iter(|| black_box(generator.bank_account()));
    });
}

fn bench_user_batches(c: &mut Criterion) {
    let generator = FakeDataGenerator::new(Locale::En);

    let mut group = c.benchmark_group("batches");

    for count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("generate_users", count),
            count,
            |b, &count| {
                b.iter(|| black_box(generator.users(count)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_records, bench_user_batches);
criterion_main!(benches);
