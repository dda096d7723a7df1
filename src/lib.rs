//! candle-viewport: scrollable, zoomable candlestick viewport engine.
//!
//! The crate turns a newest-first bar series and a stream of decoded
//! zoom/pan/resize events into immutable view snapshots, pixel mappings and
//! backend-agnostic draw frames. Fetching bars and wiring platform input are
//! left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    RenderStyle, Terminal, TerminalConfig, create_viewport, on_resize, on_zoom_pan, render,
    render_commands,
};
pub use error::{ChartError, ChartResult};
