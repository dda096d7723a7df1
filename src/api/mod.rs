//! Host-facing entry points.
//!
//! The free functions are the pure snapshot API: create a viewport when a
//! series arrives, reduce it on every gesture or resize, and render it every
//! frame. [`Terminal`] wraps the same calls with the load lifecycle and a
//! [`crate::render::Renderer`].

mod bar_payload;
mod candlestick_frame_builder;
mod price_line_frame_builder;
mod render_frame_builder;
mod render_style;
mod terminal;
mod terminal_config;

use std::sync::Arc;

use tracing::debug;

use crate::core::{Bar, ViewportModel};
use crate::interaction;
use crate::render::{DrawCommand, RenderFrame};

pub use bar_payload::BarsPayload;
pub use candlestick_frame_builder::{CandlePrimitives, build_candle_primitives};
pub use price_line_frame_builder::{
    PriceLineKind, PriceReferenceLine, PriceReferenceLines, build_price_line_primitives,
    format_price_label, resolve_price_lines,
};
pub use render_frame_builder::{build_draw_commands, build_render_frame};
pub use render_style::RenderStyle;
pub use terminal::{Terminal, TerminalState};
pub use terminal_config::TerminalConfig;

/// Default view for a newly loaded series.
#[must_use]
pub fn create_viewport(bars: impl Into<Arc<[Bar]>>) -> ViewportModel {
    let model = ViewportModel::new(bars);
    debug!(
        bars = model.bars().len(),
        visible_bars_count = model.visible_bars_count(),
        "create viewport"
    );
    model
}

#[must_use]
pub fn on_zoom_pan(model: &ViewportModel, zoom_factor: f32, pan_delta_x: f32) -> ViewportModel {
    interaction::reduce(model, zoom_factor, pan_delta_x)
}

#[must_use]
pub fn on_resize(model: &ViewportModel, width: f32, height: f32) -> ViewportModel {
    interaction::resize(model, width, height)
}

#[must_use]
pub fn render(model: &ViewportModel, style: RenderStyle) -> RenderFrame {
    build_render_frame(model, style)
}

#[must_use]
pub fn render_commands(model: &ViewportModel, style: RenderStyle) -> Vec<DrawCommand> {
    build_draw_commands(model, style)
}
