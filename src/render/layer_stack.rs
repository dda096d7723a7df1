use serde::{Deserialize, Serialize};

/// Drawing layers of one chart frame, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Candles. Translated horizontally by the scroll offset.
    Series,
    /// Price reference lines and labels. Never translated.
    Overlay,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 2] = [Self::Series, Self::Overlay];

    #[must_use]
    pub fn follows_scroll(self) -> bool {
        matches!(self, Self::Series)
    }
}
