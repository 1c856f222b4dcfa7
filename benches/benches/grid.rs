// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hexdock::{Dock, DockConfig};
use hexdock_grid::GridBuilder;
use hexdock_layout::LayoutSettings;
use kurbo::Size;

fn bench_layout_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/rebuild");
    let settings = LayoutSettings::default();
    let items: Vec<String> = (0..62).map(|i| format!("company-{i}")).collect();

    group.bench_function("compute_layout", |b| {
        b.iter(|| black_box(settings.compute(black_box(Size::new(1920.0, 1080.0)))));
    });

    let layout = settings.compute(Size::new(1920.0, 1080.0));
    let builder = GridBuilder::from_metrics(&layout.grid);

    group.bench_function("build_positional", |b| {
        b.iter(|| black_box(builder.build()));
    });

    group.bench_function("build_with_items", |b| {
        b.iter(|| black_box(builder.build_with(&items, String::as_str)));
    });

    // Resize between orientations: layout, cells and plane all rebuilt.
    group.bench_function("dock_resize", |b| {
        b.iter_batched(
            || {
                let mut dock = Dock::new(Size::new(1920.0, 1080.0), DockConfig::default());
                dock.set_content(items.iter().cloned());
                dock
            },
            |mut dock| {
                dock.resize(Size::new(1080.0, 1920.0));
                black_box(dock);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_layout_and_build);
criterion_main!(benches);
