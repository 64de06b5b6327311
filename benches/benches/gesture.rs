// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_gesture::clock::ManualClock;
use understory_gesture::driver::{GestureCallbacks, ListenerHandle, ListenerRegistry, TouchDriver};
use understory_gesture::sample::PointerSample;
use understory_gesture::tracker::GestureTracker;

struct NoopRegistry;

impl ListenerRegistry for NoopRegistry {
    fn add(&mut self, _handle: ListenerHandle) {}
    fn remove(&mut self, _handle: ListenerHandle) {}
}

fn samples(len: usize) -> Vec<PointerSample> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            PointerSample::mouse(Point::new(120.0 + t * 1.5, 70.0 + (t * 0.1).sin() * 40.0))
        })
        .collect()
}

fn bench_tracker_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/tracker_update");
    let surface = Rect::new(100.0, 50.0, 1100.0, 850.0);

    for len in [64usize, 1_024, 16_384] {
        let moves = samples(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &moves, |b, moves| {
            let mut tracker = GestureTracker::new();
            b.iter(|| {
                tracker.start(&PointerSample::mouse(Point::new(110.0, 60.0)), surface, 0);
                for sample in moves {
                    black_box(tracker.update(sample, surface));
                }
                black_box(tracker.end());
            });
        });
    }

    group.finish();
}

fn bench_driver_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/driver");
    let surface = Rect::new(100.0, 50.0, 1100.0, 850.0);
    let moves = samples(1_024);
    group.throughput(Throughput::Elements(moves.len() as u64));

    group.bench_function("with_callbacks", |b| {
        let callbacks = GestureCallbacks::new()
            .on_move_xy(|coord| {
                black_box(coord.shift_x);
            })
            .on_move_end(|coord| {
                black_box(coord.shift_y);
            });
        let mut driver = TouchDriver::new(NoopRegistry, ManualClock::new(0)).with_callbacks(callbacks);
        driver.mount();
        b.iter(|| {
            driver.pointer_down(&PointerSample::mouse(Point::new(110.0, 60.0)), surface);
            for sample in &moves {
                driver.pointer_move(sample, surface);
            }
            black_box(driver.pointer_up());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tracker_update, bench_driver_gesture);
criterion_main!(benches);
