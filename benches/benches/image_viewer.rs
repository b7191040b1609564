// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_gesture::{GestureClassifier, PointerEvent, PointerPhase, PointerSample};
use understory_image_viewer::{ImageViewer, ViewerEvent, ViewerQueue};

/// Alternating drags and pinches, roughly what a user browsing a photo produces.
fn pointer_stream(frames: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(frames + 8);
    let mut t = 0_u64;
    let mut frame = 0;
    while frame < frames {
        // Pinch out.
        events.push(PointerEvent::new(
            PointerPhase::Down,
            &[
                PointerSample::new(1, 500.0, 900.0),
                PointerSample::new(2, 580.0, 900.0),
            ],
            t,
        ));
        for i in 0..32 {
            t += 16;
            let spread = 40.0 + 6.0 * f64::from(i);
            events.push(PointerEvent::new(
                PointerPhase::Move,
                &[
                    PointerSample::new(1, 540.0 - spread, 900.0),
                    PointerSample::new(2, 540.0 + spread, 900.0),
                ],
                t,
            ));
        }
        t += 16;
        events.push(PointerEvent::new(
            PointerPhase::Up,
            &[
                PointerSample::new(1, 300.0, 900.0),
                PointerSample::new(2, 780.0, 900.0),
            ],
            t,
        ));

        // Drag around.
        t += 400;
        events.push(PointerEvent::down(1, Point::new(540.0, 960.0), t));
        for i in 0..32 {
            t += 16;
            let x = 540.0 + 12.0 * f64::from(i);
            events.push(PointerEvent::moved(1, Point::new(x, 960.0 - x / 4.0), t));
        }
        t += 16;
        events.push(PointerEvent::up(1, Point::new(924.0, 729.0), t));
        t += 400;
        frame += 68;
    }
    events
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/classify");

    for frames in [256usize, 4_096] {
        let stream = pointer_stream(frames);
        group.throughput(Throughput::Elements(stream.len() as u64));

        group.bench_with_input(BenchmarkId::new("mixed", frames), &stream, |b, stream| {
            b.iter_batched(
                GestureClassifier::default,
                |mut gestures| {
                    for event in stream {
                        black_box(gestures.handle(event));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn fresh_viewer() -> ImageViewer<()> {
    let mut viewer = ImageViewer::new(());
    viewer.on_viewport_resized(Size::new(1080.0, 1920.0));
    viewer.on_image_loaded(Size::new(4032.0, 3024.0));
    viewer
}

fn bench_viewer(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_viewer/pointer");

    for frames in [256usize, 4_096] {
        let stream = pointer_stream(frames);
        group.throughput(Throughput::Elements(stream.len() as u64));

        group.bench_with_input(BenchmarkId::new("direct", frames), &stream, |b, stream| {
            b.iter_batched(
                fresh_viewer,
                |mut viewer| {
                    for event in stream {
                        black_box(viewer.on_pointer_event(event));
                    }
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });

        // Same stream routed through the queue, to see what the hand-off costs.
        group.bench_with_input(BenchmarkId::new("queued", frames), &stream, |b, stream| {
            b.iter_batched(
                || {
                    let mut queue = ViewerQueue::new();
                    queue.extend(stream.iter().cloned().map(ViewerEvent::Pointer));
                    (fresh_viewer(), queue)
                },
                |(mut viewer, mut queue)| {
                    viewer.drain(&mut queue);
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classifier, bench_viewer);
criterion_main!(benches);
