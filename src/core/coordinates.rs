use crate::core::{PriceExtrema, ViewportModel};

/// Pixel mapping for one [`ViewportModel`] snapshot.
///
/// X is the unscrolled position: bar 0 sits on the right edge and older bars
/// move left. Scrolling is applied by translating the whole series layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport_width: f64,
    viewport_height: f64,
    bar_width: f64,
    extrema: PriceExtrema,
}

impl CoordinateMapper {
    /// Returns `None` for an empty series or a viewport that is not laid out.
    #[must_use]
    pub fn from_model(model: &ViewportModel) -> Option<Self> {
        if !model.is_laid_out() {
            return None;
        }
        let extrema = model.price_extrema()?;
        let viewport_width = f64::from(model.viewport_width());
        Some(Self {
            viewport_width,
            viewport_height: f64::from(model.viewport_height()),
            bar_width: viewport_width / model.visible_bars_count() as f64,
            extrema,
        })
    }

    #[must_use]
    pub fn viewport_width(self) -> f64 {
        self.viewport_width
    }

    #[must_use]
    pub fn viewport_height(self) -> f64 {
        self.viewport_height
    }

    #[must_use]
    pub fn bar_width(self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub fn price_extrema(self) -> PriceExtrema {
        self.extrema
    }

    /// `None` when the visible range is flat.
    #[must_use]
    pub fn px_per_price(self) -> Option<f64> {
        if self.extrema.is_flat() {
            None
        } else {
            Some(self.viewport_height / self.extrema.span())
        }
    }

    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        self.viewport_width - index as f64 * self.bar_width
    }

    /// Maps a price to pixel y (growing downward).
    ///
    /// A flat visible range maps every price to mid-height.
    #[must_use]
    pub fn price_to_y(self, price: f64) -> f64 {
        match self.px_per_price() {
            Some(px_per_price) => {
                self.viewport_height - (price - self.extrema.min) * px_per_price
            }
            None => self.viewport_height / 2.0,
        }
    }
}

/// Unscrolled x of bar `index`; needs only a laid-out width.
#[must_use]
pub fn index_to_x(model: &ViewportModel, index: usize) -> Option<f64> {
    let bar_width = f64::from(model.bar_width()?);
    Some(f64::from(model.viewport_width()) - index as f64 * bar_width)
}

#[must_use]
pub fn price_to_y(model: &ViewportModel, price: f64) -> Option<f64> {
    CoordinateMapper::from_model(model).map(|mapper| mapper.price_to_y(price))
}
