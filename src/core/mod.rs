pub mod bar;
pub mod coordinates;
pub mod primitives;
pub mod timeframe;
pub mod types;
pub mod viewport;

pub use bar::Bar;
pub use coordinates::{CoordinateMapper, index_to_x, price_to_y};
pub use timeframe::TimeFrame;
pub use types::Viewport;
pub use viewport::{
    DEFAULT_VISIBLE_BARS_COUNT, MIN_VISIBLE_BARS_COUNT, PriceExtrema, ViewportModel,
};
