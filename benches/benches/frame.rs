// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hexdock::{Dock, DockConfig};
use kurbo::{Point, Size};

const VIEWPORTS: [(&str, Size); 3] = [
    ("phone", Size::new(390.0, 844.0)),
    ("tablet", Size::new(1024.0, 1366.0)),
    ("kiosk", Size::new(1920.0, 1080.0)),
];

fn bench_frame_scales(c: &mut Criterion) {
    let mut group = c.benchmark_group("dock/frame");

    // One frame: every cell re-scaled against the live offset.
    for (name, viewport) in VIEWPORTS {
        let mut dock = Dock::new(viewport, DockConfig::default());
        dock.set_content((0..62).map(|i| format!("company-{i}")));
        group.throughput(Throughput::Elements(dock.cell_count() as u64));

        group.bench_function(BenchmarkId::new("all_cells", name), |b| {
            b.iter(|| {
                let sum: f64 = dock.cells().map(|cell| cell.scale).sum();
                black_box(sum);
            });
        });

        group.bench_function(BenchmarkId::new("visible_cells", name), |b| {
            b.iter(|| black_box(dock.visible_cells().count()));
        });
    }

    group.finish();
}

fn bench_drag_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("dock/drag");
    let viewport = Size::new(1920.0, 1080.0);
    let mut dock = Dock::new(viewport, DockConfig::default());
    dock.set_content((0..62).map(|i| format!("company-{i}")));
    dock.on_drag_start(Point::new(960.0, 540.0));

    let mut step = 0.0_f64;
    group.bench_function("move_and_rescale", |b| {
        b.iter(|| {
            step = (step + 7.0) % 400.0;
            dock.on_drag_move(Point::new(960.0 - step, 540.0 + step / 2.0));
            let sum: f64 = dock.cells().map(|cell| cell.scale).sum();
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_frame_scales, bench_drag_frame);
criterion_main!(benches);
