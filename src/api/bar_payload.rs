use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Bar;
use crate::error::{ChartError, ChartResult};

/// Aggregate-bars response body as delivered by the data layer.
///
/// Only `results` is read; bars are expected newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarsPayload {
    #[serde(default)]
    pub results: Vec<Bar>,
}

impl BarsPayload {
    /// Decodes an already fetched JSON body and validates every bar.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse bars payload: {e}"))
        })?;
        for (index, bar) in payload.results.iter().enumerate() {
            bar.validate().map_err(|err| {
                ChartError::InvalidData(format!("bar {index} rejected: {err}"))
            })?;
        }
        debug!(count = payload.results.len(), "decoded bars payload");
        Ok(payload)
    }

    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.results
    }
}
