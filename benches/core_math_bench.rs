use candle_viewport::api::{RenderStyle, build_render_frame, create_viewport, on_resize, on_zoom_pan};
use candle_viewport::core::{Bar, CoordinateMapper, ViewportModel};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.05;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let high = base.max(close) + 0.75;
            let low = base.min(close) - 0.75;
            Bar::new(base, close, high, low, i as i64 * 60_000).expect("valid generated bar")
        })
        .collect()
}

fn laid_out_model(count: usize) -> ViewportModel {
    on_resize(&create_viewport(generated_bars(count)), 1920.0, 1080.0)
}

fn bench_gesture_reduction(c: &mut Criterion) {
    let model = laid_out_model(10_000);

    c.bench_function("zoom_pan_reduce_10k", |b| {
        b.iter(|| {
            let zoomed = on_zoom_pan(black_box(&model), black_box(1.07), black_box(12.5));
            black_box(zoomed.visible_bars_count())
        })
    });
}

fn bench_visible_extrema(c: &mut Criterion) {
    let model = on_zoom_pan(&laid_out_model(10_000), 0.01, 4_000.0);

    c.bench_function("visible_price_extrema_10k", |b| {
        b.iter(|| black_box(black_box(&model).price_extrema()))
    });
}

fn bench_price_mapping(c: &mut Criterion) {
    let model = laid_out_model(2_000);
    let mapper = CoordinateMapper::from_model(&model).expect("laid out");

    c.bench_function("price_to_y", |b| {
        b.iter(|| black_box(mapper).price_to_y(black_box(123.456)))
    });
}

fn bench_render_frame_10k(c: &mut Criterion) {
    let model = laid_out_model(10_000);
    let style = RenderStyle::default();

    c.bench_function("render_frame_10k", |b| {
        b.iter(|| {
            let frame = build_render_frame(black_box(&model), black_box(style));
            black_box(frame.line_count())
        })
    });
}

criterion_group!(
    benches,
    bench_gesture_reduction,
    bench_visible_extrema,
    bench_price_mapping,
    bench_render_frame_10k
);
criterion_main!(benches);
