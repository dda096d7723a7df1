use smallvec::SmallVec;

use crate::core::{CoordinateMapper, ViewportModel};
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive};

use super::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLineKind {
    VisibleMax,
    LastClose,
    VisibleMin,
}

/// One horizontal price reference with its resolved pixel row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceReferenceLine {
    pub kind: PriceLineKind,
    pub price: f64,
    pub y: f64,
}

pub type PriceReferenceLines = SmallVec<[PriceReferenceLine; 3]>;

/// Resolves the max, last-close and min reference lines.
///
/// The max line sits on the top edge and the min line on the bottom edge.
/// The last close (bar 0) is placed with the visible-window scale, so it may
/// fall outside the viewport when the newest bar is scrolled away. A flat
/// visible range puts all three lines at mid-height.
#[must_use]
pub fn resolve_price_lines(model: &ViewportModel, mapper: CoordinateMapper) -> PriceReferenceLines {
    let extrema = mapper.price_extrema();
    let (top, bottom) = if extrema.is_flat() {
        let mid = mapper.viewport_height() / 2.0;
        (mid, mid)
    } else {
        (0.0, mapper.viewport_height())
    };

    let mut lines = PriceReferenceLines::new();
    lines.push(PriceReferenceLine {
        kind: PriceLineKind::VisibleMax,
        price: extrema.max,
        y: top,
    });
    if let Some(last_close) = model.last_close() {
        lines.push(PriceReferenceLine {
            kind: PriceLineKind::LastClose,
            price: last_close,
            y: mapper.price_to_y(last_close),
        });
    }
    lines.push(PriceReferenceLine {
        kind: PriceLineKind::VisibleMin,
        price: extrema.min,
        y: bottom,
    });
    lines
}

/// Builds the dashed line and right-aligned label for each reference.
#[must_use]
pub fn build_price_line_primitives(
    lines: &[PriceReferenceLine],
    mapper: CoordinateMapper,
    style: RenderStyle,
) -> (Vec<LinePrimitive>, Vec<TextPrimitive>) {
    let width = mapper.viewport_width();
    let label_x = width - style.price_label_padding_px;

    let strokes = lines
        .iter()
        .map(|line| {
            LinePrimitive::new(
                0.0,
                line.y,
                width,
                line.y,
                style.price_line_width_px,
                style.price_line_color,
            )
            .with_stroke_style(style.price_line_stroke_style())
        })
        .collect();
    let labels = lines
        .iter()
        .map(|line| {
            TextPrimitive::new(
                format_price_label(line.price),
                label_x,
                line.y,
                style.price_label_font_size_px,
                style.price_label_color,
                TextHAlign::Right,
            )
        })
        .collect();
    (strokes, labels)
}

/// Plain decimal rendering; whole prices keep one fractional digit.
#[must_use]
pub fn format_price_label(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{price:.1}")
    } else {
        format!("{price}")
    }
}
