// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_sheet_motion::{
    GestureConfig, GestureDismissCoordinator, PanSample, SpringAnimation, SpringParams,
    SurfaceHandle, TransitionContext, TransitionMachine,
};

const FRAME: Duration = Duration::from_micros(16_667);

fn ctx() -> TransitionContext {
    TransitionContext::new(
        Some(SurfaceHandle(1)),
        Some(SurfaceHandle(2)),
        Rect::new(0.0, 0.0, 375.0, 812.0),
    )
}

fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");
    group.bench_function("present_dismiss_60fps", |b| {
        b.iter(|| {
            let ctx = ctx();
            let mut m = TransitionMachine::default();
            m.present(&ctx);
            while !m.accepts_gestures() {
                black_box(m.advance(FRAME));
                black_box(m.frame());
            }
            m.dismiss(true, &ctx);
            while m.state().is_animating() {
                black_box(m.advance(FRAME));
                black_box(m.frame());
            }
        });
    });
    group.bench_function("spring_settle_60fps", |b| {
        b.iter(|| {
            let mut spring = SpringAnimation::new(600.0, 400.0, SpringParams::default());
            while !spring.advance(FRAME) {
                black_box(spring.value());
            }
        });
    });
    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    let ctx = ctx();
    let mut m = TransitionMachine::default();
    m.present(&ctx);
    m.finish();
    let samples: Vec<PanSample> = (0..120)
        .map(|i| PanSample::changed(Vec2::new(0.0, f64::from(i) * 2.0 - 60.0)))
        .collect();
    group.bench_function("drag_120_samples", |b| {
        b.iter(|| {
            let mut coord =
                GestureDismissCoordinator::new(GestureConfig::sheet(), Point::new(0.0, 400.0));
            coord.handle(PanSample::began(), &m);
            for &sample in &samples {
                black_box(coord.handle(sample, &m));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_lifecycle, bench_gesture);
criterion_main!(benches);
