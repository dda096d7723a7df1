#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bar, CoordinateMapper};
use crate::render::LinePrimitive;

use super::RenderStyle;

/// Wick and body strokes of one bar, in unscrolled pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandlePrimitives {
    pub wick: LinePrimitive,
    pub body: LinePrimitive,
}

/// Projects every bar of the series, not just the visible window.
///
/// The series layer is translated by the scroll offset and clipped by the
/// surface, so off-screen candles cost strokes but never wrong pixels.
#[must_use]
pub fn build_candle_primitives(
    bars: &[Bar],
    mapper: CoordinateMapper,
    style: RenderStyle,
) -> Vec<CandlePrimitives> {
    #[cfg(feature = "parallel-projection")]
    {
        bars.par_iter()
            .enumerate()
            .map(|(index, bar)| project_candle(index, *bar, mapper, style))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        bars.iter()
            .enumerate()
            .map(|(index, bar)| project_candle(index, *bar, mapper, style))
            .collect()
    }
}

fn project_candle(
    index: usize,
    bar: Bar,
    mapper: CoordinateMapper,
    style: RenderStyle,
) -> CandlePrimitives {
    let x = mapper.index_to_x(index);
    let wick = LinePrimitive::new(
        x,
        mapper.price_to_y(bar.low),
        x,
        mapper.price_to_y(bar.high),
        style.wick_width_px,
        style.wick_color,
    );
    let body_color = if bar.is_bullish() {
        style.bullish_color
    } else {
        style.bearish_color
    };
    let body = LinePrimitive::new(
        x,
        mapper.price_to_y(bar.open),
        x,
        mapper.price_to_y(bar.close),
        mapper.bar_width() * style.body_width_ratio,
        body_color,
    );
    CandlePrimitives { wick, body }
}

#[cfg(test)]
mod tests {
    use super::build_candle_primitives;
    use crate::api::RenderStyle;
    use crate::core::{Bar, CoordinateMapper, Viewport, ViewportModel};

    #[test]
    fn body_width_is_half_the_slot() {
        let bars: Vec<Bar> = (0..40)
            .map(|i| Bar::new(10.0, 11.0, 12.0, 9.0, i).expect("valid bar"))
            .collect();
        let model = ViewportModel::with_viewport(bars, Viewport::new(400.0, 30.0));
        let mapper = CoordinateMapper::from_model(&model).expect("laid out");

        let candles = build_candle_primitives(model.bars(), mapper, RenderStyle::default());
        assert_eq!(candles.len(), 40);
        assert_eq!(candles[0].body.stroke_width, 5.0);
        assert_eq!(candles[0].wick.stroke_width, 1.0);
        assert_eq!(candles[3].wick.x1, 370.0);
        // high = 12 sits on the top edge, low = 9 on the bottom edge.
        assert_eq!(candles[0].wick.y2, 0.0);
        assert_eq!(candles[0].wick.y1, 30.0);
    }
}
