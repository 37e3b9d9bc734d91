//! Analysis performance benchmarks.
//!
//! Measures the individual analysis functions and the full exploration
//! report over tables of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tablescope::analysis::{
    classify, correlation_matrix, describe_continuous, frequency_table, missing_counts,
};
use tablescope::{Column, Explorer, SourceMetadata, Table};

/// Build a table with `numeric` continuous columns, a coded column and a text column.
fn generate_table(rows: usize, numeric: usize) -> Table {
    let mut columns: Vec<Column> = (0..numeric)
        .map(|c| {
            let values = (0..rows)
                .map(|r| {
                    if (r + c) % 13 == 0 {
                        None
                    } else {
                        Some(((r * (c + 3)) as f64).sqrt() + c as f64)
                    }
                })
                .collect();
            Column::numeric(format!("measure_{}", c), values)
        })
        .collect();

    columns.push(Column::numeric(
        "grade",
        (0..rows).map(|r| Some((r % 5) as f64)).collect(),
    ));
    columns.push(Column::text(
        "site",
        (0..rows).map(|r| Some(format!("site_{}", r % 8))).collect(),
    ));

    Table::new(columns).unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for rows in [1_000, 10_000, 100_000].iter() {
        let table = generate_table(*rows, 8);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(classify(table)))
        });
    }

    group.finish();
}

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");
    let table = generate_table(50_000, 4);

    group.bench_function("describe_continuous", |b| {
        b.iter(|| black_box(describe_continuous(&table, "measure_0").unwrap()))
    });
    group.bench_function("frequency_table", |b| {
        b.iter(|| black_box(frequency_table(&table, "site").unwrap()))
    });
    group.bench_function("missing_counts", |b| {
        b.iter(|| black_box(missing_counts(&table)))
    });

    group.finish();
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for cols in [2, 8, 16].iter() {
        let table = generate_table(10_000, *cols);
        let names: Vec<String> = (0..*cols).map(|i| format!("measure_{}", i)).collect();
        group.bench_with_input(BenchmarkId::new("columns", cols), &names, |b, names| {
            b.iter(|| black_box(correlation_matrix(&table, names).unwrap()))
        });
    }

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let explorer = Explorer::new();

    for rows in [1_000, 10_000].iter() {
        let table = generate_table(*rows, 8);
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| {
                let source = SourceMetadata::in_memory("bench", table.row_count(), table.column_count());
                black_box(explorer.explore_table(table, source).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_summaries,
    bench_correlation,
    bench_full_report
);
criterion_main!(benches);
