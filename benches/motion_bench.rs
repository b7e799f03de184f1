//! Hot-path benchmarks for the camera rig.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use vantage::camera::{CameraCompositor, Smoothing};
use vantage::options::Options;
use vantage::util::easing::ease;
use vantage::Session;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    c.bench_function("swoop_blend_easing", |b| {
        b.iter(|| black_box(ease(black_box(0.73))))
    });
}

fn compositor_benchmark(c: &mut Criterion) {
    let compositor = CameraCompositor::new(Smoothing::TimeBased {
        factor: 0.1,
        reference_hz: 60.0,
    });
    c.bench_function("compositor_step", |b| {
        b.iter(|| {
            black_box(compositor.step(
                black_box(Vec3::new(-5.0, 2.0, 8.0)),
                black_box(Vec3::new(-3.75, 1.5, 8.0)),
                black_box(Vec3::new(0.4, -0.2, 0.0)),
                black_box(1.0 / 60.0),
            ))
        })
    });
}

fn session_frame_benchmark(c: &mut Criterion) {
    let t0 = Instant::now();
    let mut session = Session::new(Options::default(), Vec2::new(1920.0, 1080.0), t0);
    let _ = session.on_asset_loaded(Vec3::ZERO, t0);
    let mut now = t0 + Duration::from_secs(10);
    let _ = session.frame(now);

    c.bench_function("session_frame_following", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            session.on_scroll(black_box(640.0));
            black_box(session.frame(now))
        })
    });
}

criterion_group!(benches, easing_benchmark, compositor_benchmark, session_frame_benchmark);
criterion_main!(benches);
