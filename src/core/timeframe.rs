use serde::{Deserialize, Serialize};

/// Aggregation interval of a loaded bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFrame {
    Min5,
    Min15,
    #[default]
    Min30,
    Hour1,
    Day1,
}

impl TimeFrame {
    /// Selector order, shortest interval first.
    pub const ALL: [Self; 5] = [
        Self::Min5,
        Self::Min15,
        Self::Min30,
        Self::Hour1,
        Self::Day1,
    ];

    /// Aggregation key in `multiplier/timespan` form used by bar sources.
    #[must_use]
    pub const fn aggregation_key(self) -> &'static str {
        match self {
            Self::Min5 => "5/minute",
            Self::Min15 => "15/minute",
            Self::Min30 => "30/minute",
            Self::Hour1 => "1/hour",
            Self::Day1 => "1/day",
        }
    }

    #[must_use]
    pub const fn duration_millis(self) -> i64 {
        const MINUTE: i64 = 60_000;
        match self {
            Self::Min5 => 5 * MINUTE,
            Self::Min15 => 15 * MINUTE,
            Self::Min30 => 30 * MINUTE,
            Self::Hour1 => 60 * MINUTE,
            Self::Day1 => 24 * 60 * MINUTE,
        }
    }
}
