#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the line, circle and fill rasterizers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_line");

    for length in [10.0, 100.0, 1_000.0, 10_000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| {
                rasterize_line(
                    black_box(Point::new(0.0, 0.0)),
                    black_box(Point::new(length, length * 0.37)),
                )
            });
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_circle");

    for radius in [5.0, 50.0, 500.0] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| rasterize_circle(black_box(Point::new(400.0, 300.0)), black_box(radius)));
        });
    }

    group.finish();
}

fn polygon_fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_polygon");

    for sides in [3, 8, 32] {
        let polygon: Vec<Point> = (0..sides)
            .map(|i| {
                let theta = i as f32 / sides as f32 * std::f32::consts::TAU;
                Point::new(200.0 + 150.0 * theta.cos(), 200.0 + 150.0 * theta.sin())
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(sides), &polygon, |b, polygon| {
            b.iter(|| fill_polygon(black_box(polygon), Rgba::BLACK));
        });
    }

    group.finish();
}

fn framebuffer_draw_benchmark(c: &mut Criterion) {
    let mut fb = Framebuffer::new(800, 600).expect("framebuffer creation should succeed");
    let batch = fill_triangle(
        Point::new(10.0, 10.0),
        Point::new(790.0, 50.0),
        Point::new(400.0, 590.0),
        Rgba::new(255, 0, 0, 128),
    );

    c.bench_function("draw_batch_triangle", |b| {
        b.iter(|| fb.draw_batch(black_box(&batch)).expect("draw should succeed"));
    });
}

criterion_group!(
    benches,
    line_benchmark,
    circle_benchmark,
    polygon_fill_benchmark,
    framebuffer_draw_benchmark
);
criterion_main!(benches);
