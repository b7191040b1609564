// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use understory_zoom_view::{ZoomPanView, fit_within};

fn zoomed_view() -> ZoomPanView {
    let mut view = ZoomPanView::new();
    view.set_viewport(Size::new(1080.0, 1920.0));
    view.set_image(Some(Size::new(4032.0, 3024.0)));
    view.zoom_to(2.5, Point::new(540.0, 960.0));
    view
}

fn bench_fit_within(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_view/fit_within");
    let viewports: Vec<Size> = (1..=64)
        .map(|i| Size::new(120.0 * f64::from(i), 2000.0 - 25.0 * f64::from(i)))
        .collect();
    group.throughput(Throughput::Elements(viewports.len() as u64));

    group.bench_function("portrait_photo", |b| {
        b.iter(|| {
            for viewport in &viewports {
                black_box(fit_within(*viewport, Size::new(3024.0, 4032.0)));
            }
        });
    });

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_view/pinch");

    // A long pinch oscillating around the fitted size exercises the clamp
    // at both ends and the exact-reset path.
    for steps in [64usize, 1_024] {
        let factors: Vec<f64> = (0..steps)
            .map(|i| if i % 16 < 8 { 1.25 } else { 0.8 })
            .collect();
        group.throughput(Throughput::Elements(steps as u64));

        group.bench_with_input(BenchmarkId::new("oscillate", steps), &factors, |b, factors| {
            b.iter_batched(
                zoomed_view,
                |mut view| {
                    for (i, factor) in factors.iter().enumerate() {
                        let focus = Point::new((i % 1080) as f64, 960.0);
                        view.pinch(*factor, focus);
                    }
                    black_box(view);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_view/pan");

    for steps in [64usize, 1_024] {
        let deltas: Vec<Vec2> = (0..steps)
            .map(|i| {
                let sign = if (i / 32) % 2 == 0 { 1.0 } else { -1.0 };
                Vec2::new(sign * 37.0, sign * -21.0)
            })
            .collect();
        group.throughput(Throughput::Elements(steps as u64));

        group.bench_with_input(BenchmarkId::new("clamped", steps), &deltas, |b, deltas| {
            b.iter_batched(
                zoomed_view,
                |mut view| {
                    for delta in deltas {
                        view.pan(*delta);
                    }
                    black_box(view);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit_within, bench_pinch, bench_pan);
criterion_main!(benches);
