use series_chart::api::{StaticDataProvider, SteppedSeriesResponse};
use series_chart::core::Viewport;
use series_chart::render::{NullRenderer, SvgRenderer};
use series_chart::{ChartConfig, ChartEngine, ChartError, ChartRequest};

#[test]
fn engine_renders_line_chart_from_provider() {
    let provider = StaticDataProvider::new()
        .with_line_payload(
            "requests",
            r#"[{"target": "requests", "datapoints": [[3, 1700000000], [null, 1700000060], [8, 1700000120]]}]"#,
        )
        .expect("payload");
    let renderer = SvgRenderer::new(640, 320).expect("svg renderer");
    let config = ChartConfig::line_chart(renderer.viewport());
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    let frame = engine
        .render(&provider, &ChartRequest::line("requests"))
        .expect("render");

    assert!(!frame.is_empty());
    let stats = engine.renderer().last_stats();
    assert_eq!(stats.lines_drawn, frame.lines.len());
    let stems = engine.renderer().document().matches(r#"class="v""#);
    assert_eq!(stems.count(), 2);
}

#[test]
fn engine_renders_bar_chart_from_provider() {
    let provider = StaticDataProvider::new().with_stepped_series(SteppedSeriesResponse {
        points: vec![Some(4.0), Some(2.0), None, Some(9.0)],
        from: 1_700_000_000.0,
        step: 300.0,
        until: 1_700_000_900.0,
        min: Some(0.0),
        max: None,
    });
    let config = ChartConfig::bar_chart(Viewport::new(800, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let frame = engine
        .render(&provider, &ChartRequest::Bar)
        .expect("render");

    assert_eq!(frame.rects.len(), 3);
    assert!(frame.rects.iter().all(|rect| rect.width == 155.0));
    assert_eq!(engine.renderer().last_rect_count, 3);
}

#[test]
fn provider_failure_is_surfaced_and_renderer_untouched() {
    let provider = StaticDataProvider::new();
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartConfig::line_chart(Viewport::new(800, 600)),
    )
    .expect("engine init");

    let err = engine
        .render(&provider, &ChartRequest::line("missing"))
        .expect_err("no data");
    assert!(matches!(err, ChartError::Provider(_)));
    assert_eq!(engine.renderer().last_line_count, 0);
}

#[test]
fn engine_rejects_invalid_config_updates() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartConfig::line_chart(Viewport::new(800, 600)),
    )
    .expect("engine init");

    let bad = ChartConfig::line_chart(Viewport::new(10, 10));
    assert!(engine.set_config(bad).is_err());
    let unchanged = ChartConfig::line_chart(Viewport::new(800, 600));
    assert_eq!(engine.config(), unchanged);
}
