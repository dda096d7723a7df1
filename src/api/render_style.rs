use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Style contract for candle and price-line frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub wick_color: Color,
    pub wick_width_px: f64,
    pub bullish_color: Color,
    pub bearish_color: Color,
    /// Body stroke width as a fraction of the bar slot width.
    pub body_width_ratio: f64,
    pub price_line_color: Color,
    pub price_line_width_px: f64,
    pub price_line_dash_px: f64,
    pub price_line_gap_px: f64,
    pub price_label_color: Color,
    pub price_label_font_size_px: f64,
    /// Distance between a price label's right edge and the viewport edge.
    pub price_label_padding_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            wick_color: Color::WHITE,
            wick_width_px: 1.0,
            bullish_color: Color::GREEN,
            bearish_color: Color::RED,
            body_width_ratio: 0.5,
            price_line_color: Color::WHITE,
            price_line_width_px: 1.0,
            price_line_dash_px: 4.0,
            price_line_gap_px: 4.0,
            price_label_color: Color::WHITE,
            price_label_font_size_px: 12.0,
            price_label_padding_px: 4.0,
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn with_candle_colors(mut self, bullish: Color, bearish: Color) -> Self {
        self.bullish_color = bullish;
        self.bearish_color = bearish;
        self
    }

    #[must_use]
    pub fn with_price_line_dash(mut self, dash_px: f64, gap_px: f64) -> Self {
        self.price_line_dash_px = dash_px;
        self.price_line_gap_px = gap_px;
        self
    }

    #[must_use]
    pub fn with_price_label_font_size(mut self, font_size_px: f64) -> Self {
        self.price_label_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn price_line_stroke_style(self) -> LineStrokeStyle {
        LineStrokeStyle::Dashed {
            on_px: self.price_line_dash_px,
            off_px: self.price_line_gap_px,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.wick_color,
            self.bullish_color,
            self.bearish_color,
            self.price_line_color,
            self.price_label_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("wick width", self.wick_width_px),
            ("body width ratio", self.body_width_ratio),
            ("price line width", self.price_line_width_px),
            ("price label font size", self.price_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.price_label_padding_px.is_finite() || self.price_label_padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "price label padding must be finite and >= 0".to_owned(),
            ));
        }

        self.price_line_stroke_style().validate()
    }
}
