use serde::{Deserialize, Serialize};

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Size used before the host reports a layout. Non-zero so that derived
    /// scales stay finite.
    pub const UNINITIALIZED: Self = Self {
        width: 1.0,
        height: 1.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replaces negative or non-finite dimensions with `0.0` ("not laid out").
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            width: sanitize_dimension(self.width),
            height: sanitize_dimension(self.height),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::UNINITIALIZED
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
