//! FILENAME: core/pivot-engine/benches/pivot_projection.rs
//! Benchmarks for pivot projection on wide and tall datasets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engine::ResultValue;
use pivot_engine::{project_pivot, FieldLabels, PivotData, PivotValueType};

/// Two header levels (status x metric), two index levels, `rows` x `cols` values.
fn build_dataset(rows: usize, cols: usize) -> PivotData {
    let metrics = ["orders_count", "orders_total"];

    let status_row = (0..cols)
        .map(|c| Some(ResultValue::text(format!("status_{}", c / metrics.len()))))
        .collect();
    let metric_row = (0..cols)
        .map(|c| Some(ResultValue::text(metrics[c % metrics.len()])))
        .collect();

    PivotData {
        header_value_types: vec![
            PivotValueType::dimension("orders_status"),
            PivotValueType::metric(),
        ],
        header_values: vec![status_row, metric_row],
        index_value_types: vec![
            PivotValueType::dimension("orders_region"),
            PivotValueType::dimension("orders_month"),
        ],
        index_values: (0..rows)
            .map(|r| {
                vec![
                    Some(ResultValue::text(format!("region_{}", r / 12))),
                    Some(ResultValue::text(format!("2024-{:02}", r % 12 + 1))),
                ]
            })
            .collect(),
        title_fields: vec![
            vec![Some("orders_region".to_string()), None],
            vec![None, Some("orders_month".to_string())],
        ],
        data_values: (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| Some(ResultValue::number((r * cols + c) as f64)))
                    .collect()
            })
            .collect(),
    }
}

fn bench_projection(c: &mut Criterion) {
    let mut labels = FieldLabels::new();
    labels.insert("orders_count", "Count");
    labels.insert("orders_total", "Total");
    labels.insert("orders_region", "Region");
    labels.insert("orders_month", "Month");

    let mut group = c.benchmark_group("project_pivot");
    for &(rows, cols) in &[(100, 10), (1_000, 20), (10_000, 8)] {
        let data = build_dataset(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &data,
            |b, data| b.iter(|| project_pivot(black_box(data), Some(&labels))),
        );
    }
    group.finish();
}

fn bench_to_grid(c: &mut Criterion) {
    let data = build_dataset(1_000, 20);
    let view = project_pivot(&data, None);
    c.bench_function("to_grid_1000x20", |b| b.iter(|| black_box(&view).to_grid()));
}

criterion_group!(benches, bench_projection, bench_to_grid);
criterion_main!(benches);
