use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, unix_millis_to_datetime};
use crate::error::{ChartError, ChartResult};

/// One OHLC price record for a fixed interval.
///
/// Series are ordered newest first: index 0 is the most recent bar. The
/// serde names match the aggregate-bar wire shape (`o`, `c`, `h`, `l`, `t`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "t")]
    pub time_open_millis: i64,
}

impl Bar {
    /// Builds a validated bar from raw floating values.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(
        open: f64,
        close: f64,
        high: f64,
        low: f64,
        time_open_millis: i64,
    ) -> ChartResult<Self> {
        let bar = Self {
            open,
            close,
            high,
            low,
            time_open_millis,
        };
        bar.validate()?;
        Ok(bar)
    }

    /// Converts decimal prices into a validated bar.
    pub fn from_decimal(
        open: Decimal,
        close: Decimal,
        high: Decimal,
        low: Decimal,
        time_open_millis: i64,
    ) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(close, "close")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            time_open_millis,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.open.is_finite()
            || !self.close.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
        {
            return Err(ChartError::InvalidData(
                "bar prices must be finite".to_owned(),
            ));
        }

        if self.low > self.high {
            return Err(ChartError::InvalidData("bar low must be <= high".to_owned()));
        }

        if self.open < self.low
            || self.open > self.high
            || self.close < self.low
            || self.close > self.high
        {
            return Err(ChartError::InvalidData(
                "bar open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(())
    }

    /// Returns `true` only when close is strictly above open.
    ///
    /// A doji (`open == close`) is not bullish.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close > self.open
    }

    #[must_use]
    pub fn open_time(self) -> Option<DateTime<Utc>> {
        unix_millis_to_datetime(self.time_open_millis)
    }
}
