//! Gesture reduction.
//!
//! Every gesture or resize turns the current [`ViewportModel`] into a new,
//! clamped snapshot. Nothing here fails: degenerate input is neutralised so a
//! continuously redrawn chart recovers on the next valid event.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::viewport::{clamp_visible_bars_count, scroll_bound};
use crate::core::{Viewport, ViewportModel};

/// One decoded pinch/pan step.
///
/// `zoom_factor > 1` zooms in (fewer, wider bars). `pan_delta_x` is in pixels;
/// positive values scroll toward older bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPanGesture {
    pub zoom_factor: f32,
    pub pan_delta_x: f32,
}

impl Default for ZoomPanGesture {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            pan_delta_x: 0.0,
        }
    }
}

impl ZoomPanGesture {
    #[must_use]
    pub const fn new(zoom_factor: f32, pan_delta_x: f32) -> Self {
        Self {
            zoom_factor,
            pan_delta_x,
        }
    }

    #[must_use]
    pub const fn zoom(zoom_factor: f32) -> Self {
        Self::new(zoom_factor, 0.0)
    }

    #[must_use]
    pub const fn pan(pan_delta_x: f32) -> Self {
        Self::new(1.0, pan_delta_x)
    }

    /// Zoom factors that are non-positive or non-finite become `1.0`;
    /// non-finite pan deltas become `0.0`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let zoom_factor = if self.zoom_factor.is_finite() && self.zoom_factor > 0.0 {
            self.zoom_factor
        } else {
            warn!(zoom_factor = self.zoom_factor, "ignoring degenerate zoom factor");
            1.0
        };
        let pan_delta_x = if self.pan_delta_x.is_finite() {
            self.pan_delta_x
        } else {
            warn!(pan_delta_x = self.pan_delta_x, "ignoring non-finite pan delta");
            0.0
        };
        Self {
            zoom_factor,
            pan_delta_x,
        }
    }
}

/// Applies one zoom/pan step.
///
/// The new bar count is `round(count / zoom_factor)` clamped to
/// `[MIN_VISIBLE_BARS_COUNT, max(bars, MIN_VISIBLE_BARS_COUNT)]`. Scroll is
/// clamped against the bound of the *new* bar width.
#[must_use]
pub fn reduce(model: &ViewportModel, zoom_factor: f32, pan_delta_x: f32) -> ViewportModel {
    apply_gesture(model, ZoomPanGesture::new(zoom_factor, pan_delta_x))
}

#[must_use]
pub fn apply_gesture(model: &ViewportModel, gesture: ZoomPanGesture) -> ViewportModel {
    let gesture = gesture.sanitized();
    let bar_count = model.bars().len();

    let raw_count = model.visible_bars_count() as f64 / f64::from(gesture.zoom_factor);
    let visible_bars_count = clamp_visible_bars_count(raw_count, bar_count);

    let bound = scroll_bound(bar_count, visible_bars_count, model.viewport());
    let scrolled_by = clamp_scroll(model.scrolled_by() + gesture.pan_delta_x, bound);

    trace!(
        zoom_factor = gesture.zoom_factor,
        pan_delta_x = gesture.pan_delta_x,
        visible_bars_count,
        scrolled_by,
        "reduce zoom/pan gesture"
    );
    model.replace_view(visible_bars_count, scrolled_by)
}

/// Stores a new surface size and re-clamps scroll against it.
///
/// Negative or non-finite sizes are stored as `0.0`, which marks the model as
/// not laid out until a positive size arrives. Applying the same size twice
/// yields the same model.
#[must_use]
pub fn resize(model: &ViewportModel, width: f32, height: f32) -> ViewportModel {
    let viewport = Viewport::new(width, height).sanitized();
    let bound = scroll_bound(model.bars().len(), model.visible_bars_count(), viewport);
    let scrolled_by = clamp_scroll(model.scrolled_by(), bound);
    debug!(
        width = viewport.width,
        height = viewport.height,
        scrolled_by,
        "resize viewport"
    );
    model.replace_viewport(viewport, scrolled_by)
}

fn clamp_scroll(scrolled_by: f32, bound: f32) -> f32 {
    if scrolled_by.is_nan() {
        return 0.0;
    }
    scrolled_by.clamp(0.0, bound)
}
