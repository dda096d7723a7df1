use std::ops::Range;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Bar, Viewport};

/// Smallest number of bar slots a zoom gesture may reach.
pub const MIN_VISIBLE_BARS_COUNT: usize = 20;

/// Bar slots shown when a new series is loaded.
pub const DEFAULT_VISIBLE_BARS_COUNT: usize = 100;

/// Highest `high` and lowest `low` over the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceExtrema {
    pub min: f64,
    pub max: f64,
}

impl PriceExtrema {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.span() <= 0.0
    }
}

/// Immutable view snapshot over a bar series.
///
/// Only the four view scalars and the shared series are stored. Bar width,
/// visible window, price extrema and vertical scale are derived on demand so
/// they can never go stale. Gestures and resizes produce a new snapshot through
/// [`crate::interaction`]; cloning is cheap because the series is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportModel {
    bars: Arc<[Bar]>,
    visible_bars_count: usize,
    scrolled_by: f32,
    viewport: Viewport,
}

impl ViewportModel {
    /// Creates the default view for a freshly loaded series.
    ///
    /// The default bar count is clamped to the series length (never below
    /// [`MIN_VISIBLE_BARS_COUNT`]), scroll starts at the newest bar and the
    /// viewport uses the [`Viewport::UNINITIALIZED`] sentinel.
    #[must_use]
    pub fn new(bars: impl Into<Arc<[Bar]>>) -> Self {
        Self::with_viewport(bars, Viewport::UNINITIALIZED)
    }

    /// Same as [`ViewportModel::new`] with an already known surface size.
    #[must_use]
    pub fn with_viewport(bars: impl Into<Arc<[Bar]>>, viewport: Viewport) -> Self {
        let bars = bars.into();
        let visible_bars_count =
            clamp_visible_bars_count(DEFAULT_VISIBLE_BARS_COUNT as f64, bars.len());
        Self {
            bars,
            visible_bars_count,
            scrolled_by: 0.0,
            viewport: viewport.sanitized(),
        }
    }

    /// Returns a copy with new view scalars. Callers are responsible for clamping.
    #[must_use]
    pub(crate) fn replace_view(&self, visible_bars_count: usize, scrolled_by: f32) -> Self {
        Self {
            bars: Arc::clone(&self.bars),
            visible_bars_count,
            scrolled_by,
            viewport: self.viewport,
        }
    }

    #[must_use]
    pub(crate) fn replace_viewport(&self, viewport: Viewport, scrolled_by: f32) -> Self {
        Self {
            bars: Arc::clone(&self.bars),
            visible_bars_count: self.visible_bars_count,
            scrolled_by,
            viewport,
        }
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn shared_bars(&self) -> Arc<[Bar]> {
        Arc::clone(&self.bars)
    }

    #[must_use]
    pub fn visible_bars_count(&self) -> usize {
        self.visible_bars_count
    }

    #[must_use]
    pub fn scrolled_by(&self) -> f32 {
        self.scrolled_by
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport.width
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport.height
    }

    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.viewport.is_valid()
    }

    /// Pixels per bar slot, `None` until the viewport has a positive width.
    #[must_use]
    pub fn bar_width(&self) -> Option<f32> {
        bar_width_for(self.viewport, self.visible_bars_count)
    }

    /// Upper bound of `scrolled_by` for the current zoom and size.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        scroll_bound(self.bars.len(), self.visible_bars_count, self.viewport)
    }

    /// Index range of the visible window.
    ///
    /// `None` for an empty series or a viewport without width. Otherwise the
    /// range is non-empty and inside `0..bars.len()`.
    #[must_use]
    pub fn visible_range(&self) -> Option<Range<usize>> {
        let last_index = self.bars.len().checked_sub(1)?;
        let bar_width = self.bar_width()?;

        let start = (self.scrolled_by / bar_width).round();
        let start = if start.is_finite() && start > 0.0 {
            (start as usize).min(last_index)
        } else {
            0
        };
        let end = start
            .saturating_add(self.visible_bars_count)
            .min(self.bars.len());
        Some(start..end)
    }

    #[must_use]
    pub fn visible_bars(&self) -> &[Bar] {
        match self.visible_range() {
            Some(range) => &self.bars[range],
            None => &[],
        }
    }

    #[must_use]
    pub fn price_extrema(&self) -> Option<PriceExtrema> {
        let visible = self.visible_bars();
        let max = visible.iter().map(|bar| OrderedFloat(bar.high)).max()?;
        let min = visible.iter().map(|bar| OrderedFloat(bar.low)).min()?;
        Some(PriceExtrema {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    /// Vertical scale in pixels per price unit.
    ///
    /// `None` when the viewport is not laid out, nothing is visible, or the
    /// visible price range is flat.
    #[must_use]
    pub fn px_per_price(&self) -> Option<f64> {
        if !self.viewport.is_valid() {
            return None;
        }
        let extrema = self.price_extrema()?;
        if extrema.is_flat() {
            return None;
        }
        Some(f64::from(self.viewport.height) / extrema.span())
    }

    /// Close of the newest bar (index 0).
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.bars.first().map(|bar| bar.close)
    }
}

pub(crate) fn bar_width_for(viewport: Viewport, visible_bars_count: usize) -> Option<f32> {
    if !viewport.width.is_finite() || viewport.width <= 0.0 || visible_bars_count == 0 {
        return None;
    }
    Some(viewport.width / visible_bars_count as f32)
}

/// `max(0, bar_count * bar_width - viewport_width)`, or `0` without a width.
pub(crate) fn scroll_bound(bar_count: usize, visible_bars_count: usize, viewport: Viewport) -> f32 {
    let Some(bar_width) = bar_width_for(viewport, visible_bars_count) else {
        return 0.0;
    };
    let bound = bar_count as f32 * bar_width - viewport.width;
    if bound.is_finite() { bound.max(0.0) } else { 0.0 }
}

/// Rounds and clamps a raw bar count into
/// `[MIN_VISIBLE_BARS_COUNT, max(bar_count, MIN_VISIBLE_BARS_COUNT)]`.
pub(crate) fn clamp_visible_bars_count(raw: f64, bar_count: usize) -> usize {
    let upper = bar_count.max(MIN_VISIBLE_BARS_COUNT);
    let rounded = raw.round();
    if rounded.is_nan() || rounded <= MIN_VISIBLE_BARS_COUNT as f64 {
        return MIN_VISIBLE_BARS_COUNT;
    }
    if rounded >= upper as f64 {
        return upper;
    }
    rounded as usize
}

#[cfg(test)]
mod tests {
    use super::{
        MIN_VISIBLE_BARS_COUNT, ViewportModel, clamp_visible_bars_count, scroll_bound,
    };
    use crate::core::{Bar, Viewport};

    fn ramp(count: usize) -> Vec<Bar> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64;
                Bar::new(base, base + 0.5, base + 1.0, base - 1.0, i as i64).expect("valid bar")
            })
            .collect()
    }

    #[test]
    fn default_count_is_clamped_to_series_length() {
        let model = ViewportModel::new(ramp(30));
        assert_eq!(model.visible_bars_count(), 30);
        assert_eq!(model.scrolled_by(), 0.0);

        let model = ViewportModel::new(ramp(500));
        assert_eq!(model.visible_bars_count(), 100);
    }

    #[test]
    fn short_series_keeps_minimum_bar_slots() {
        let model = ViewportModel::with_viewport(ramp(5), Viewport::new(200.0, 100.0));
        assert_eq!(model.visible_bars_count(), MIN_VISIBLE_BARS_COUNT);
        assert_eq!(model.visible_range(), Some(0..5));
        assert_eq!(model.max_scroll(), 0.0);
    }

    #[test]
    fn empty_series_has_no_window() {
        let model = ViewportModel::new(Vec::<Bar>::new());
        assert!(model.visible_range().is_none());
        assert!(model.visible_bars().is_empty());
        assert!(model.price_extrema().is_none());
        assert!(model.px_per_price().is_none());
        assert!(model.last_close().is_none());
    }

    #[test]
    fn zero_width_disables_derivations() {
        let model = ViewportModel::with_viewport(ramp(50), Viewport::new(0.0, 100.0));
        assert!(model.bar_width().is_none());
        assert!(model.visible_range().is_none());
        assert!(model.px_per_price().is_none());
    }

    #[test]
    fn extrema_cover_only_visible_window() {
        let model = ViewportModel::with_viewport(ramp(200), Viewport::new(1000.0, 500.0));
        let extrema = model.price_extrema().expect("visible bars");
        // Window 0..100 spans lows 99..198 and highs 101..200.
        assert_eq!(extrema.min, 99.0);
        assert_eq!(extrema.max, 200.0);
    }

    #[test]
    fn clamp_handles_degenerate_counts() {
        assert_eq!(clamp_visible_bars_count(f64::NAN, 50), MIN_VISIBLE_BARS_COUNT);
        assert_eq!(clamp_visible_bars_count(f64::INFINITY, 50), 50);
        assert_eq!(clamp_visible_bars_count(3.0, 50), MIN_VISIBLE_BARS_COUNT);
        assert_eq!(clamp_visible_bars_count(37.4, 50), 37);
    }

    #[test]
    fn scroll_bound_is_never_negative() {
        assert_eq!(scroll_bound(10, 20, Viewport::new(300.0, 100.0)), 0.0);
        assert_eq!(scroll_bound(40, 20, Viewport::new(300.0, 100.0)), 300.0);
        assert_eq!(scroll_bound(40, 20, Viewport::new(0.0, 100.0)), 0.0);
    }
}
