// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for pushing synthetic gesture streams through an image viewport.
//!
//! The streams are deterministic: a zig-zag one-finger pan and a breathing
//! two-finger pinch, each rendered frame by frame the way a host event loop
//! would drive the viewport.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pinchview_gesture::sample::{PointerPhase, PointerSample};
use pinchview_viewport::{Image, ImageViewport};

const VIEW: Size = Size::new(1280.0, 800.0);
const IMAGE: Size = Size::new(4096.0, 3072.0);

fn fitted_viewport() -> ImageViewport {
    let mut vp = ImageViewport::with_view_size(VIEW);
    vp.bind_image(Image::new(IMAGE, ()));
    vp.render().unwrap();
    vp
}

/// Zoomed in a bit so panning has room to move on both axes.
fn zoomed_viewport() -> ImageViewport {
    let mut vp = fitted_viewport();
    let down = [Point::new(600.0, 400.0), Point::new(680.0, 400.0)];
    vp.handle_sample(PointerSample::new(PointerPhase::SecondaryDown, &down));
    let spread = [Point::new(520.0, 400.0), Point::new(760.0, 400.0)];
    vp.handle_sample(PointerSample::new(PointerPhase::Moved, &spread));
    vp.render().unwrap();
    vp
}

fn pan_positions(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new(640.0 + (t * 0.7).sin() * 90.0, 400.0 + (t * 0.3).cos() * 60.0)
        })
        .collect()
}

fn pinch_pairs(n: usize) -> Vec<(Point, Point)> {
    (0..n)
        .map(|i| {
            let half = 60.0 + (i as f64 * 0.2).sin() * 40.0;
            (
                Point::new(640.0 - half, 400.0),
                Point::new(640.0 + half, 400.0),
            )
        })
        .collect()
}

fn bench_pan_stream(c: &mut Criterion) {
    let positions = pan_positions(256);
    c.bench_function("pan_stream_256", |b| {
        b.iter(|| {
            let mut vp = zoomed_viewport();
            for pos in &positions {
                let points = [*pos];
                if vp.handle_sample(PointerSample::new(PointerPhase::Moved, &points)) {
                    black_box(vp.render());
                }
            }
            black_box(vp.transform())
        });
    });
}

fn bench_pinch_stream(c: &mut Criterion) {
    let pairs = pinch_pairs(256);
    c.bench_function("pinch_stream_256", |b| {
        b.iter(|| {
            let mut vp = fitted_viewport();
            let down = [pairs[0].0, pairs[0].1];
            vp.handle_sample(PointerSample::new(PointerPhase::SecondaryDown, &down));
            for (a, b2) in &pairs[1..] {
                let points = [*a, *b2];
                if vp.handle_sample(PointerSample::new(PointerPhase::Moved, &points)) {
                    black_box(vp.render());
                }
            }
            black_box(vp.transform())
        });
    });
}

fn bench_settled_repaint(c: &mut Criterion) {
    let mut vp = fitted_viewport();
    c.bench_function("settled_repaint", |b| {
        b.iter(|| black_box(vp.render().map(|frame| frame.transform)));
    });
}

criterion_group!(
    benches,
    bench_pan_stream,
    bench_pinch_stream,
    bench_settled_repaint
);
criterion_main!(benches);
