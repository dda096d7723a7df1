use candle_viewport::api::{create_viewport, on_resize, on_zoom_pan};
use candle_viewport::core::{Bar, MIN_VISIBLE_BARS_COUNT, ViewportModel, index_to_x};
use proptest::prelude::*;

fn series(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let base = 50.0 + ((i * 37) % 101) as f64;
            let close = if i % 3 == 0 { base + 1.5 } else { base - 1.5 };
            Bar::new(base, close, base.max(close) + 2.0, base.min(close) - 2.0, i as i64)
                .expect("valid generated bar")
        })
        .collect()
}

/// Builds a reachable model through the public reducers.
fn reachable_model(
    bar_count: usize,
    width: f32,
    height: f32,
    gestures: &[(f32, f32)],
) -> ViewportModel {
    let mut model = on_resize(&create_viewport(series(bar_count)), width, height);
    for (zoom, pan) in gestures {
        model = on_zoom_pan(&model, *zoom, *pan);
    }
    model
}

fn scroll_upper_bound(model: &ViewportModel) -> f32 {
    let bar_width = model.bar_width().expect("laid out");
    (model.bars().len() as f32 * bar_width - model.viewport_width()).max(0.0)
}

fn gesture_strategy() -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((0.05f32..8.0, -5_000.0f32..5_000.0), 0..12)
}

proptest! {
    #[test]
    fn visible_count_stays_clamped(
        bar_count in 0usize..600,
        width in 10.0f32..4_000.0,
        gestures in gesture_strategy(),
        zoom in 0.001f32..1_000.0
    ) {
        let model = reachable_model(bar_count, width, 300.0, &gestures);
        let zoomed = on_zoom_pan(&model, zoom, 0.0);
        let upper = bar_count.max(MIN_VISIBLE_BARS_COUNT);
        prop_assert!(zoomed.visible_bars_count() >= MIN_VISIBLE_BARS_COUNT);
        prop_assert!(zoomed.visible_bars_count() <= upper);
    }

    #[test]
    fn scroll_stays_within_bound(
        bar_count in 1usize..600,
        width in 10.0f32..4_000.0,
        gestures in gesture_strategy(),
        pan in prop::num::f32::NORMAL
    ) {
        let model = reachable_model(bar_count, width, 300.0, &gestures);
        let panned = on_zoom_pan(&model, 1.0, pan);
        prop_assert!(panned.scrolled_by() >= 0.0);
        prop_assert!(panned.scrolled_by() <= scroll_upper_bound(&panned));
    }

    #[test]
    fn visible_window_is_non_empty_and_in_bounds(
        bar_count in 1usize..600,
        width in 10.0f32..4_000.0,
        gestures in gesture_strategy()
    ) {
        let model = reachable_model(bar_count, width, 300.0, &gestures);
        let range = model.visible_range().expect("non-empty laid-out series");
        prop_assert!(range.start < range.end);
        prop_assert!(range.end <= bar_count);
        prop_assert!(!model.visible_bars().is_empty());
    }

    #[test]
    fn resize_is_idempotent(
        bar_count in 0usize..400,
        gestures in gesture_strategy(),
        width in -10.0f32..3_000.0,
        height in -10.0f32..3_000.0
    ) {
        let model = reachable_model(bar_count, 1_200.0, 600.0, &gestures);
        let once = on_resize(&model, width, height);
        let twice = on_resize(&once, width, height);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn newest_bar_maps_to_right_edge(
        bar_count in 0usize..600,
        width in 1.0f32..4_000.0,
        gestures in gesture_strategy()
    ) {
        let model = reachable_model(bar_count, width, 300.0, &gestures);
        prop_assert_eq!(index_to_x(&model, 0), Some(f64::from(width)));
    }
}
