use series_chart::api::{ChartConfig, ChartData, ChartEngine, ChartMode, SteppedSeriesResponse};
use series_chart::core::{Sample, Viewport};
use series_chart::render::{ElementClass, NullRenderer, TextHAlign};

const T0: f64 = 1_700_000_000.0;

fn line_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartConfig::line_chart(Viewport::new(800, 600)),
    )
    .expect("engine init")
}

fn bar_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartConfig::bar_chart(Viewport::new(800, 400)),
    )
    .expect("engine init")
}

fn stepped_example() -> SteppedSeriesResponse {
    SteppedSeriesResponse {
        points: vec![Some(10.0), None, Some(30.0)],
        from: 0.0,
        step: 60.0,
        until: 120.0,
        min: None,
        max: None,
    }
}

#[test]
fn line_frame_contains_axes_then_stems() {
    let data = ChartData::from_samples(&[
        Sample::new(Some(10.0), T0),
        Sample::new(None, T0 + 60.0),
        Sample::new(Some(30.0), T0 + 120.0),
    ]);
    let mut engine = line_engine();

    let frame = engine.render_data(&data).expect("render");

    assert_eq!(frame.plot.left, 60.0);
    assert_eq!(frame.plot.top, 20.0);
    // 15 second ticks over two minutes plus three value ticks.
    assert_eq!(frame.texts.len(), 8 + 3);
    assert_eq!(frame.lines.len(), 8 + 3 + 2);
    assert!(frame.rects.is_empty());

    let stems: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.class == ElementClass::ValueMark)
        .collect();
    assert_eq!(stems.len(), 2);
    let ends: Vec<_> = stems.iter().map(|s| (s.x1, s.y1, s.y2)).collect();
    assert_eq!(ends, vec![(720.0, 540.0, 540.0), (0.0, 540.0, 0.0)]);

    let renderer = engine.renderer();
    assert_eq!(renderer.last_line_count, 13);
    assert_eq!(renderer.last_text_count, 11);
    assert_eq!(renderer.last_mark_count, 2);
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn axis_labels_follow_line_layout_offsets() {
    let data = ChartData::from_samples(&[
        Sample::new(Some(10.0), T0),
        Sample::new(Some(30.0), T0 + 120.0),
    ]);
    let frame = line_engine().build_render_frame(&data).expect("frame");

    let time_labels: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.class == ElementClass::TimeAxis)
        .collect();
    assert!(!time_labels.is_empty());
    assert!(time_labels.iter().all(|text| text.y == 540.0 + 3.0 + 6.0));
    assert!(time_labels.iter().all(|t| t.h_align == TextHAlign::Center));
    assert!(time_labels.iter().all(|t| t.text.starts_with("Tue 22:1")));

    let value_labels: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.class == ElementClass::ValueAxis)
        .collect();
    let texts: Vec<&str> = value_labels.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["10", "20", "30"]);
    assert!(value_labels.iter().all(|text| text.x == -10.0));
    assert!(value_labels.iter().all(|t| t.h_align == TextHAlign::Right));
    assert_eq!(value_labels[1].y, 270.0 + 3.0);

    let time_grid = frame
        .lines
        .iter()
        .find(|line| line.class == ElementClass::TimeAxis)
        .expect("time gridline");
    assert_eq!((time_grid.y1, time_grid.y2), (543.0, 0.0));

    let value_grid = frame
        .lines
        .iter()
        .find(|line| line.class == ElementClass::ValueAxis)
        .expect("value gridline");
    assert_eq!((value_grid.x1, value_grid.x2), (0.0, 721.0));
}

#[test]
fn zero_gridline_is_distinguished() {
    let data = ChartData::from_samples(&[
        Sample::new(Some(-5.0), T0),
        Sample::new(Some(15.0), T0 + 60.0),
    ]);
    let frame = line_engine().build_render_frame(&data).expect("frame");

    let zero_lines: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.class == ElementClass::ZeroLine)
        .collect();
    assert_eq!(zero_lines.len(), 1);
    assert_eq!(frame.count_class(ElementClass::ZeroLine), 1);
    assert_eq!(ElementClass::ZeroLine.class_name(), Some("y axis"));
}

#[test]
fn stepped_bar_example_renders_two_bars() {
    let data = ChartData::from_stepped(&stepped_example());
    assert_eq!(data.mode, ChartMode::Bar);

    let mut engine = bar_engine();
    let frame = engine.render_data(&data).expect("render");

    assert_eq!(frame.plot.width, 620.0);
    assert_eq!(frame.plot.height, 340.0);
    assert_eq!(frame.rects.len(), 2);
    assert!(frame.rects.iter().all(|rect| rect.width == 207.0));
    assert!(frame.rects.iter().all(|r| r.class == ElementClass::Bar));
    assert_eq!((frame.rects[0].x, frame.rects[0].height), (620.0, 0.0));
    let tall = frame.rects[1];
    assert_eq!((tall.x, tall.y, tall.height), (0.0, 0.0, 340.0));

    // Nine 15 second ticks over [0s, 120s] plus three value ticks.
    assert_eq!(frame.texts.len(), 9 + 3);
    assert_eq!(frame.lines.len(), 9 + 3);
    assert_eq!(engine.renderer().last_rect_count, 2);
    assert_eq!(engine.renderer().last_mark_count, 2);
    assert_eq!(frame.primitive_count(), 12 + 12 + 2);
}

#[test]
fn explicit_min_max_override_value_domain() {
    let mut response = stepped_example();
    response.min = Some(0.0);
    response.max = Some(100.0);
    let data = ChartData::from_stepped(&response);

    assert_eq!(data.domain.value_range(), (0.0, 100.0));
    let frame = bar_engine().build_render_frame(&data).expect("frame");
    let labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.class == ElementClass::ValueAxis)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["0", "50", "100"]);
}

#[test]
fn empty_series_renders_axes_without_marks() {
    let data = ChartData::from_samples(&[]);
    let frame = line_engine().build_render_frame(&data).expect("frame");

    assert!(frame.rects.is_empty());
    assert_eq!(frame.count_class(ElementClass::TimeAxis), 0);
    // Three labels plus the 0.5 and 1.0 gridlines; 0.0 is the zero line.
    assert_eq!(frame.count_class(ElementClass::ValueAxis), 5);
    assert_eq!(frame.count_class(ElementClass::ZeroLine), 1);
    assert_eq!(frame.count_class(ElementClass::ValueMark), 0);
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "0.5", "1.0"]);
}

#[test]
fn all_absent_bar_series_draws_no_bars() {
    let data = ChartData::from_stepped(&SteppedSeriesResponse {
        points: vec![None, None, None],
        from: 0.0,
        step: 60.0,
        until: 120.0,
        min: None,
        max: None,
    });
    let frame = bar_engine().build_render_frame(&data).expect("frame");

    assert!(frame.rects.is_empty());
    assert!(!frame.texts.is_empty());
}

#[test]
fn frame_building_is_deterministic() {
    let data = ChartData::from_stepped(&stepped_example()).with_mode(ChartMode::Line);
    let engine = bar_engine();

    let first = engine.build_render_frame(&data).expect("first");
    let second = engine.build_render_frame(&data).expect("second");
    assert_eq!(first, second);
    assert!(first.rects.is_empty());
}
