use criterion::{black_box, criterion_group, criterion_main, Criterion};
use escapetime::escape::{iterate, Variant};
use escapetime::planes::View;
use escapetime::render::{render, Scene};
use num::Complex;

fn escape_kernel(c: &mut Criterion) {
    c.bench_function("iterate interior point", |b| {
        b.iter(|| iterate(&Variant::Mandelbrot, black_box(Complex::new(-0.5, 0.0)), 1000))
    });
    c.bench_function("iterate escaping point", |b| {
        b.iter(|| iterate(&Variant::Mandelbrot, black_box(Complex::new(0.4, 0.4)), 1000))
    });
    c.bench_function("iterate burning ship", |b| {
        b.iter(|| {
            iterate(
                &Variant::BurningShip,
                black_box(Complex::new(-1.75, -0.03)),
                1000,
            )
        })
    });
}

fn small_frame(c: &mut Criterion) {
    let view = View {
        center_x: -0.5,
        center_y: 0.0,
        zoom: 1.0,
    };
    let scene = Scene::new(Variant::Mandelbrot, view, 160, 90, 250).unwrap();
    c.bench_function("render 160x90 mandelbrot", move |b| b.iter(|| render(&scene)));
}

criterion_group!(benches, escape_kernel, small_frame);
criterion_main!(benches);
