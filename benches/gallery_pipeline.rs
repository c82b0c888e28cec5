// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::domain::gallery::{
    build_records, filter_and_sort, FilterOptions, GalleryEntry, SelectionPolicy, SortBy,
    SortOrder,
};
use iced_gallery::domain::layout::{visible_rows, GridLayout, GridParams};
use std::hint::black_box;

fn entries(count: usize) -> Vec<GalleryEntry> {
    (0..count)
        .map(|k| {
            GalleryEntry::new(
                format!("Gallery {k:05}"),
                (0..3)
                    .map(|j| format!("https://brave.photos/g{k}/{j}.jpg"))
                    .collect(),
            )
        })
        .collect()
}

fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");

    for size in [1_000usize, 10_000] {
        let records = build_records(&entries(size), SelectionPolicy::All);

        group.bench_with_input(BenchmarkId::new("no_search", size), &records, |b, records| {
            let options = FilterOptions::default();
            b.iter(|| black_box(filter_and_sort(records, &options)));
        });

        group.bench_with_input(BenchmarkId::new("search_url_desc", size), &records, |b, records| {
            let options = FilterOptions {
                search_term: "/1.JPG".to_string(),
                sort_by: SortBy::Url,
                sort_order: SortOrder::Desc,
            };
            b.iter(|| black_box(filter_and_sort(records, &options)));
        });
    }

    group.finish();
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");
    let params = GridParams::default();

    group.bench_function("compute_widths", |b| {
        b.iter(|| {
            for width in (0..4000u32).step_by(37) {
                black_box(GridLayout::compute(black_box(width), &params));
            }
        });
    });

    group.bench_function("scroll_window", |b| {
        let layout = GridLayout::compute(1280, &params);
        let rows = layout.row_count(30_000);
        b.iter(|| {
            let mut offset = 0.0;
            while offset < layout.content_height(30_000) {
                let window = visible_rows(offset, 900.0, layout.row_height as f32, rows, 2);
                black_box(layout.item_range(window.rows, 30_000));
                offset += 250.0;
            }
        });
    });

    group.finish();
}

criterion_group!(benches, filter_benchmark, layout_benchmark);
criterion_main!(benches);
