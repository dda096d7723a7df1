use serde::{Deserialize, Serialize};

use crate::core::{TimeFrame, Viewport};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Bootstrap configuration of a [`super::Terminal`].
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub default_time_frame: TimeFrame,
    /// Surface size known up front; otherwise the first resize provides it.
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

impl TerminalConfig {
    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_default_time_frame(mut self, time_frame: TimeFrame) -> Self {
        self.default_time_frame = time_frame;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Some(Viewport::new(width, height));
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.style.validate()?;
        if let Some(viewport) = self.viewport {
            if !viewport.is_valid() {
                return Err(ChartError::InvalidViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalConfig;
    use crate::core::TimeFrame;

    #[test]
    fn empty_json_uses_defaults() {
        let config: TerminalConfig = serde_json::from_str("{}").expect("defaults");
        assert_eq!(config, TerminalConfig::default());
        assert_eq!(config.default_time_frame, TimeFrame::Min30);
    }

    #[test]
    fn rejects_zero_sized_viewport() {
        assert!(TerminalConfig::default()
            .with_viewport(0.0, 100.0)
            .validate()
            .is_err());
    }
}
