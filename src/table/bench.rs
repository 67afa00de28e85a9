use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

// Reference the main crate
extern crate framestore;

use framestore::csv::write_table;
use framestore::{Table, TableBuilder};

// Generate `rows` random values
fn generate_column(rows: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..rows).map(|_| rng.gen_range(0.0..1000.0)).collect()
}

// Build a table of `rows` x `cols` random values
fn generate_table(rows: usize, cols: usize) -> Table {
    let mut builder = TableBuilder::new();
    for c in 0..cols {
        builder = builder.column(format!("c{}", c), generate_column(rows));
    }
    builder.build().unwrap()
}

// Benchmark column mutations, which rebuild every row
pub fn bench_column_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ColumnMutations");

    for &(rows, cols) in &[(1_000, 4), (10_000, 16)] {
        let table = generate_table(rows, cols);
        let extra = generate_column(rows);

        group.bench_function(format!("append_column_{}x{}", rows, cols), |b| {
            b.iter_batched(
                || table.clone(),
                |mut t| t.append_column(black_box(&extra), "extra").unwrap(),
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("drop_column_{}x{}", rows, cols), |b| {
            b.iter_batched(
                || table.clone(),
                |mut t| t.drop_column(black_box("c0")).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

// Benchmark row mutations, which copy the buffer verbatim
pub fn bench_row_mutations(c: &mut Criterion) {
    let table = generate_table(10_000, 8);
    let row = generate_column(8);

    let mut group = c.benchmark_group("RowMutations");

    group.bench_function("append_row", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| t.append_row(black_box(&row)).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("drop_row", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| t.drop_row(black_box(5_000)).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

// Benchmark reductions and CSV encoding
pub fn bench_consumers(c: &mut Criterion) {
    let table = generate_table(10_000, 8);

    let mut group = c.benchmark_group("Consumers");

    group.bench_function("col_var", |b| b.iter(|| table.col_var(black_box("c3")).unwrap()));
    group.bench_function("col_div", |b| b.iter(|| table.col_div(black_box("c1"), "c2").unwrap()));
    group.bench_function("write_table", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_table(&mut out, black_box(&table), 6).unwrap();
            out
        })
    });

    group.finish();
}

criterion_group!(benches, bench_column_mutations, bench_row_mutations, bench_consumers);
criterion_main!(benches);
