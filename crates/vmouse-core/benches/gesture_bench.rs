//! Criterion benchmarks for the per-frame gesture path.
//!
//! Every camera frame with a hand runs one screen conversion, one smoothing
//! step, one distance computation and one click evaluation.  At 30 fps that
//! path has a 33 ms budget shared with capture and inference, so it must stay
//! in the nanosecond range.
//!
//! Run with:
//! ```bash
//! cargo bench --package vmouse-core --bench gesture_bench
//! ```

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vmouse_core::{
    distance, to_pixel_distance, to_screen_point, ClickDetector, MotionSmoother, NormalizedPoint,
};

// ── Benchmarks: geometry ──────────────────────────────────────────────────────

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let index_tip = NormalizedPoint::new(0.5, 0.5);
    let thumb_tip = NormalizedPoint::new(0.51, 0.5);

    group.bench_function("to_screen_point_1080p", |b| {
        b.iter(|| to_screen_point(black_box(index_tip), black_box(1920), black_box(1080)))
    });

    group.bench_function("pinch_distance_px", |b| {
        b.iter(|| to_pixel_distance(distance(black_box(thumb_tip), black_box(index_tip)), 640))
    });

    group.finish();
}

// ── Benchmarks: smoother ──────────────────────────────────────────────────────

fn bench_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoother");

    for &factor in &[1.0f64, 7.0, 20.0] {
        group.bench_with_input(BenchmarkId::new("smooth", factor), &factor, |b, &f| {
            let mut smoother = MotionSmoother::new(f);
            b.iter(|| smoother.smooth(black_box(960), black_box(540)))
        });
    }

    group.finish();
}

// ── Benchmarks: click detector ────────────────────────────────────────────────

fn bench_click_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("click_detector");
    let t0 = Instant::now();

    // Open hand: the early-return path taken on most frames.
    group.bench_function("open_hand", |b| {
        let mut detector = ClickDetector::new(40.0, Duration::from_millis(500));
        b.iter(|| detector.evaluate(black_box(120.0), black_box(t0)))
    });

    // Held pinch inside the cooldown window.
    group.bench_function("held_pinch_in_cooldown", |b| {
        let mut detector = ClickDetector::new(40.0, Duration::from_millis(500));
        detector.evaluate(5.0, t0);
        b.iter(|| detector.evaluate(black_box(5.0), black_box(t0)))
    });

    group.finish();
}

// ── Benchmarks: full frame ────────────────────────────────────────────────────

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let index_tip = NormalizedPoint::new(0.42, 0.37);
    let thumb_tip = NormalizedPoint::new(0.40, 0.41);
    let t0 = Instant::now();

    group.bench_function("hand_present", |b| {
        let mut smoother = MotionSmoother::new(7.0);
        let mut detector = ClickDetector::new(40.0, Duration::from_millis(500));
        b.iter(|| {
            let target = to_screen_point(black_box(index_tip), 1920, 1080);
            let cursor = smoother.smooth(target.x, target.y);
            let pinch = to_pixel_distance(distance(black_box(thumb_tip), index_tip), 640);
            (cursor, detector.evaluate(pinch, t0))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_geometry,
    bench_smoother,
    bench_click_detector,
    bench_full_frame,
);
criterion_main!(benches);
