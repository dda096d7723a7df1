use std::mem;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{Bar, TimeFrame, Viewport, ViewportModel};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{self, ZoomPanGesture};
use crate::render::{DrawCommand, RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{RenderStyle, TerminalConfig};

/// Screen-level lifecycle of the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalState {
    Initial,
    Loading {
        time_frame: TimeFrame,
    },
    Ready {
        time_frame: TimeFrame,
        viewport: ViewportModel,
    },
    Error {
        message: String,
    },
}

/// Host facade driving one chart surface.
///
/// Owns the current [`TerminalState`], forwards gestures and resizes to the
/// reducers while a series is loaded, and hands frames to the renderer.
/// Loading a new series (for example after a time-frame switch) always starts
/// from the default zoom and scroll.
pub struct Terminal<R: Renderer> {
    renderer: R,
    style: RenderStyle,
    default_time_frame: TimeFrame,
    surface: Option<Viewport>,
    state: TerminalState,
    state_before_load: TerminalState,
}

impl<R: Renderer> Terminal<R> {
    pub fn new(renderer: R, config: TerminalConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            style: config.style,
            default_time_frame: config.default_time_frame,
            surface: config.viewport,
            state: TerminalState::Initial,
            state_before_load: TerminalState::Initial,
        })
    }

    #[must_use]
    pub fn state(&self) -> &TerminalState {
        &self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, TerminalState::Ready { .. })
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&ViewportModel> {
        match &self.state {
            TerminalState::Ready { viewport, .. } => Some(viewport),
            _ => None,
        }
    }

    /// Time frame being shown or loaded.
    #[must_use]
    pub fn selected_time_frame(&self) -> Option<TimeFrame> {
        match self.state {
            TerminalState::Loading { time_frame } | TerminalState::Ready { time_frame, .. } => {
                Some(time_frame)
            }
            TerminalState::Initial | TerminalState::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn default_time_frame(&self) -> TimeFrame {
        self.default_time_frame
    }

    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.viewport().and_then(ViewportModel::last_close)
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Enters `Loading`, remembering the current state for [`Self::fail_loading`].
    pub fn begin_loading(&mut self, time_frame: TimeFrame) {
        debug!(time_frame = time_frame.aggregation_key(), "begin loading bars");
        let previous = mem::replace(&mut self.state, TerminalState::Loading { time_frame });
        if !matches!(previous, TerminalState::Loading { .. }) {
            self.state_before_load = previous;
        }
    }

    pub fn begin_default_load(&mut self) {
        self.begin_loading(self.default_time_frame);
    }

    /// Installs a freshly loaded series with the default view.
    ///
    /// The new viewport adopts the last reported surface size.
    pub fn finish_loading(&mut self, bars: impl Into<Arc<[Bar]>>) -> ChartResult<()> {
        let TerminalState::Loading { time_frame } = self.state else {
            return Err(ChartError::InvalidData(
                "finish_loading called without a load in progress".to_owned(),
            ));
        };

        let viewport = match self.surface {
            Some(surface) => ViewportModel::with_viewport(bars, surface),
            None => ViewportModel::new(bars),
        };
        debug!(
            time_frame = time_frame.aggregation_key(),
            bars = viewport.bars().len(),
            visible_bars_count = viewport.visible_bars_count(),
            "bars loaded"
        );
        self.state = TerminalState::Ready {
            time_frame,
            viewport,
        };
        self.state_before_load = TerminalState::Initial;
        Ok(())
    }

    /// Abandons the current load.
    ///
    /// A previously shown series is restored, re-clamped to the last reported
    /// surface size; otherwise the terminal enters `Error`. Returns `false`
    /// and leaves the state alone when no load is in progress.
    pub fn fail_loading(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if !matches!(self.state, TerminalState::Loading { .. }) {
            debug!(error = %message, "ignoring load failure outside of loading");
            return false;
        }

        warn!(error = %message, "loading bars failed");
        let previous = mem::replace(&mut self.state_before_load, TerminalState::Initial);
        self.state = match previous {
            TerminalState::Ready {
                time_frame,
                viewport,
            } => {
                let viewport = match self.surface {
                    Some(surface) => interaction::resize(&viewport, surface.width, surface.height),
                    None => viewport,
                };
                TerminalState::Ready {
                    time_frame,
                    viewport,
                }
            }
            _ => TerminalState::Error { message },
        };
        true
    }

    /// Shortcut for `begin_loading` followed by `finish_loading`.
    pub fn load_bars(
        &mut self,
        time_frame: TimeFrame,
        bars: impl Into<Arc<[Bar]>>,
    ) -> ChartResult<()> {
        self.begin_loading(time_frame);
        self.finish_loading(bars)
    }

    /// Applies a zoom/pan step. Returns `false` when no series is shown.
    pub fn zoom_pan(&mut self, zoom_factor: f32, pan_delta_x: f32) -> bool {
        self.apply_gesture(ZoomPanGesture::new(zoom_factor, pan_delta_x))
    }

    pub fn apply_gesture(&mut self, gesture: ZoomPanGesture) -> bool {
        let TerminalState::Ready { viewport, .. } = &mut self.state else {
            return false;
        };
        *viewport = interaction::apply_gesture(viewport, gesture);
        true
    }

    /// Records the surface size and re-clamps the shown viewport, if any.
    pub fn resize(&mut self, width: f32, height: f32) {
        let surface = Viewport::new(width, height).sanitized();
        self.surface = Some(surface);
        if let TerminalState::Ready { viewport, .. } = &mut self.state {
            *viewport = interaction::resize(viewport, surface.width, surface.height);
        }
    }

    /// Frame for the current state; empty unless a series is shown.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        match &self.state {
            TerminalState::Ready { viewport, .. } => build_render_frame(viewport, self.style),
            _ => RenderFrame::new(self.surface.unwrap_or(Viewport::UNINITIALIZED)),
        }
    }

    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.build_frame().to_draw_commands()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
