use tracing::trace;

use crate::core::{CoordinateMapper, ViewportModel};
use crate::render::{CanvasLayerKind, DrawCommand, RenderFrame};

use super::candlestick_frame_builder::build_candle_primitives;
use super::price_line_frame_builder::{build_price_line_primitives, resolve_price_lines};
use super::RenderStyle;

/// Builds the frame for one snapshot.
///
/// The series layer holds every candle and is translated by `scrolled_by`;
/// the overlay layer holds the three price references and is never
/// translated. An empty series or a viewport that is not laid out yields an
/// empty frame.
#[must_use]
pub fn build_render_frame(model: &ViewportModel, style: RenderStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(model.viewport());
    let Some(mapper) = CoordinateMapper::from_model(model) else {
        trace!(
            bars = model.bars().len(),
            laid_out = model.is_laid_out(),
            "skip frame without drawable window"
        );
        return frame;
    };

    frame.set_translate_x(CanvasLayerKind::Series, f64::from(model.scrolled_by()));
    for candle in build_candle_primitives(model.bars(), mapper, style) {
        frame.push_line(CanvasLayerKind::Series, candle.wick);
        frame.push_line(CanvasLayerKind::Series, candle.body);
    }

    let price_lines = resolve_price_lines(model, mapper);
    let (strokes, labels) = build_price_line_primitives(&price_lines, mapper, style);
    frame.extend_lines(CanvasLayerKind::Overlay, strokes);
    for label in labels {
        frame.push_text(CanvasLayerKind::Overlay, label);
    }

    trace!(
        lines = frame.line_count(),
        texts = frame.text_count(),
        "built render frame"
    );
    frame
}

/// Flat command list with the scroll translation baked into x.
#[must_use]
pub fn build_draw_commands(model: &ViewportModel, style: RenderStyle) -> Vec<DrawCommand> {
    build_render_frame(model, style).to_draw_commands()
}
