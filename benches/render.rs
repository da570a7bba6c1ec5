//! Benchmarks for table rendering performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tabgrid::{GridRange, RenderOptions, Table, TableLayout};

/// Build a fully populated grid with short per-cell labels.
fn grid(columns: i64, rows: i64) -> Table {
    let mut table = Table::new();
    for x in 0..columns {
        for y in 0..rows {
            table.set((x, y), format!("{x}:{y}"));
        }
    }
    table
}

/// Benchmark rendering a small grid at natural size
fn bench_render_small(c: &mut Criterion) {
    let table = grid(4, 4);

    c.bench_function("render_4x4", |b| {
        b.iter(|| black_box(&table).render(RenderOptions::default()))
    });
}

/// Benchmark rendering with every sizing option engaged
fn bench_render_stretched(c: &mut Criterion) {
    let table = grid(10, 10);
    let options = RenderOptions::default()
        .even_columns(true)
        .even_rows(true)
        .stretch_width(200)
        .stretch_height(80);

    c.bench_function("render_10x10_stretched", |b| {
        b.iter(|| black_box(&table).render(options))
    });
}

/// Benchmark rendering rows that carry multiline cells
fn bench_render_multiline(c: &mut Criterion) {
    let mut table = grid(8, 8);
    for x in 0..8 {
        table.set((x, 3), "first\nsecond\nthird");
    }

    c.bench_function("render_8x8_multiline", |b| {
        b.iter(|| black_box(&table).render(RenderOptions::default()))
    });
}

/// Benchmark measuring a grid without assembling the output text
fn bench_measure(c: &mut Criterion) {
    let table = grid(50, 50);

    c.bench_function("measure_50x50", |b| {
        b.iter(|| TableLayout::measure(black_box(&table), RenderOptions::default()))
    });
}

/// Compare rendering cost across grid sizes
fn bench_grid_sizes(c: &mut Criterion) {
    let sizes = [(5_i64, 5_i64), (20, 20), (50, 20), (100, 40)];

    let mut group = c.benchmark_group("grid_size_comparison");

    for (columns, rows) in sizes {
        let table = grid(columns, rows);
        let cells = u64::try_from(columns * rows).unwrap_or(0);

        group.throughput(Throughput::Elements(cells));
        group.bench_with_input(
            BenchmarkId::new("render", format!("{columns}x{rows}")),
            &table,
            |b, table| b.iter(|| table.render(RenderOptions::default())),
        );
    }

    group.finish();
}

/// Benchmark copying a strided window out of a large grid
fn bench_slice(c: &mut Criterion) {
    let table = grid(100, 100);
    let range = GridRange::bounded((10, 10), (90, 90)).with_step((2, 2));

    c.bench_function("slice_100x100_strided", |b| {
        b.iter(|| black_box(&table).slice(range))
    });
}

/// Benchmark mirroring a large grid on both axes
fn bench_reverse(c: &mut Criterion) {
    let table = grid(100, 100);

    c.bench_function("reverse_100x100", |b| {
        b.iter(|| black_box(&table).reverse(true, true))
    });
}

criterion_group!(
    benches,
    bench_render_small,
    bench_render_stretched,
    bench_render_multiline,
    bench_measure,
    bench_grid_sizes,
    bench_slice,
    bench_reverse,
);

criterion_main!(benches);
