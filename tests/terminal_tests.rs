use candle_viewport::api::{BarsPayload, Terminal, TerminalConfig, TerminalState};
use candle_viewport::core::{Bar, DEFAULT_VISIBLE_BARS_COUNT, TimeFrame};
use candle_viewport::render::NullRenderer;

fn series(count: usize, close_shift: f64) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let base = 200.0 + (i % 13) as f64;
            let close = base + close_shift;
            Bar::new(base, close, base.max(close) + 1.0, base.min(close) - 1.0, i as i64)
                .expect("valid bar")
        })
        .collect()
}

fn terminal() -> Terminal<NullRenderer> {
    Terminal::new(NullRenderer::default(), TerminalConfig::default()).expect("terminal init")
}

#[test]
fn starts_initial_and_renders_empty_frame() {
    let mut terminal = terminal();
    assert_eq!(terminal.state(), &TerminalState::Initial);
    assert!(terminal.selected_time_frame().is_none());

    terminal.render().expect("empty render");
    assert_eq!(terminal.renderer().frames_rendered, 1);
    assert_eq!(terminal.renderer().last_line_count, 0);
}

#[test]
fn default_load_uses_configured_time_frame() {
    let config = TerminalConfig::default().with_default_time_frame(TimeFrame::Hour1);
    let mut terminal = Terminal::new(NullRenderer::default(), config).expect("terminal init");
    terminal.begin_default_load();
    assert_eq!(
        terminal.state(),
        &TerminalState::Loading {
            time_frame: TimeFrame::Hour1
        }
    );
    assert_eq!(terminal.selected_time_frame(), Some(TimeFrame::Hour1));
}

#[test]
fn loaded_series_adopts_reported_surface_size() {
    let mut terminal = terminal();
    terminal.resize(800.0, 400.0);
    terminal
        .load_bars(TimeFrame::Min30, series(300, 1.0))
        .expect("load bars");

    let viewport = terminal.viewport().expect("ready");
    assert_eq!(viewport.viewport_width(), 800.0);
    assert_eq!(viewport.viewport_height(), 400.0);
    assert_eq!(viewport.visible_bars_count(), DEFAULT_VISIBLE_BARS_COUNT);

    terminal.render().expect("render");
    // 300 wicks + 300 bodies + 3 price lines.
    assert_eq!(terminal.renderer().last_line_count, 603);
    assert_eq!(terminal.renderer().last_text_count, 3);
}

#[test]
fn gestures_only_apply_while_ready() {
    let mut terminal = terminal();
    assert!(!terminal.zoom_pan(2.0, 10.0));

    terminal.resize(1_000.0, 500.0);
    terminal
        .load_bars(TimeFrame::Min5, series(300, 1.0))
        .expect("load bars");
    assert!(terminal.zoom_pan(2.0, 100.0));

    let viewport = terminal.viewport().expect("ready");
    assert_eq!(viewport.visible_bars_count(), 50);
    assert_eq!(viewport.scrolled_by(), 100.0);

    terminal.render().expect("render");
    assert_eq!(terminal.renderer().last_series_translate_x, 100.0);
}

#[test]
fn switching_time_frame_resets_zoom_and_scroll() {
    let mut terminal = terminal();
    terminal.resize(1_000.0, 500.0);
    terminal
        .load_bars(TimeFrame::Min15, series(300, 1.0))
        .expect("load bars");
    terminal.zoom_pan(2.0, 400.0);

    terminal
        .load_bars(TimeFrame::Day1, series(300, -1.0))
        .expect("reload");
    let viewport = terminal.viewport().expect("ready");
    assert_eq!(viewport.visible_bars_count(), DEFAULT_VISIBLE_BARS_COUNT);
    assert_eq!(viewport.scrolled_by(), 0.0);
    assert_eq!(terminal.selected_time_frame(), Some(TimeFrame::Day1));
}

#[test]
fn failed_load_restores_previous_series() {
    let mut terminal = terminal();
    terminal.resize(1_000.0, 500.0);
    terminal
        .load_bars(TimeFrame::Min30, series(300, 1.0))
        .expect("load bars");
    terminal.zoom_pan(1.0, 250.0);
    let before = terminal.state().clone();

    terminal.begin_loading(TimeFrame::Day1);
    assert!(terminal.viewport().is_none());
    assert!(terminal.fail_loading("timeout"));
    assert_eq!(terminal.state(), &before);
}

#[test]
fn failed_first_load_enters_error() {
    let mut terminal = terminal();
    terminal.begin_default_load();
    assert!(terminal.fail_loading("network unreachable"));
    assert_eq!(
        terminal.state(),
        &TerminalState::Error {
            message: "network unreachable".to_owned()
        }
    );
}

#[test]
fn failed_load_reclamps_restored_series_to_new_surface() {
    let mut terminal = terminal();
    terminal.resize(1_000.0, 500.0);
    terminal
        .load_bars(TimeFrame::Min30, series(300, 1.0))
        .expect("load bars");
    terminal.zoom_pan(1.0, 10_000.0);
    assert_eq!(terminal.viewport().expect("ready").scrolled_by(), 2_000.0);

    terminal.begin_loading(TimeFrame::Hour1);
    terminal.resize(500.0, 500.0);
    assert!(terminal.fail_loading("timeout"));

    let viewport = terminal.viewport().expect("restored");
    assert_eq!(viewport.viewport_width(), 500.0);
    assert_eq!(viewport.scrolled_by(), 1_000.0);
    assert_eq!(viewport.max_scroll(), 1_000.0);
    assert_eq!(terminal.selected_time_frame(), Some(TimeFrame::Min30));
}

#[test]
fn stray_failure_keeps_shown_series() {
    let mut terminal = terminal();
    terminal.resize(1_000.0, 500.0);
    terminal
        .load_bars(TimeFrame::Min30, series(300, 1.0))
        .expect("load bars");
    let before = terminal.state().clone();

    assert!(!terminal.fail_loading("late error"));
    assert_eq!(terminal.state(), &before);
    assert!(terminal.is_ready());
}

#[test]
fn failure_without_load_keeps_initial() {
    let mut terminal = terminal();
    assert!(!terminal.fail_loading("late error"));
    assert_eq!(terminal.state(), &TerminalState::Initial);
}

#[test]
fn finish_without_begin_is_rejected() {
    let mut terminal = terminal();
    assert!(terminal.finish_loading(series(10, 1.0)).is_err());
}

#[test]
fn resize_while_ready_reclamps_scroll() {
    let mut terminal = terminal();
    terminal.resize(1_000.0, 500.0);
    terminal
        .load_bars(TimeFrame::Min30, series(300, 1.0))
        .expect("load bars");
    terminal.zoom_pan(1.0, 10_000.0);
    assert_eq!(terminal.viewport().expect("ready").scrolled_by(), 2_000.0);

    terminal.resize(500.0, 500.0);
    assert_eq!(terminal.viewport().expect("ready").scrolled_by(), 1_000.0);
}

#[test]
fn decoded_payload_feeds_terminal() {
    let json = r#"{"results":[
        {"o": 10.0, "c": 12.0, "h": 13.0, "l": 9.0, "t": 1700001800000},
        {"o": 11.0, "c": 10.0, "h": 11.5, "l": 9.5, "t": 1700000000000}
    ]}"#;
    let bars = BarsPayload::from_json_str(json).expect("payload").into_bars();

    let mut terminal = terminal();
    terminal.resize(300.0, 120.0);
    terminal.load_bars(TimeFrame::Min30, bars).expect("load bars");
    assert_eq!(terminal.last_close(), Some(12.0));

    let commands = terminal.draw_commands();
    assert_eq!(commands.len(), 4 + 3 + 3);
}
