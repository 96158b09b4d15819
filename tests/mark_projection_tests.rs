use series_chart::ChartError;
use series_chart::core::{
    DataPoint, TimeScale, ValueScale, bar_slot_width, project_bars, project_stems,
};

fn scales() -> (TimeScale, ValueScale) {
    let time_scale = TimeScale::new(0.0, 120_000.0, 620.0).expect("time scale");
    let value_scale = ValueScale::new(10.0, 30.0, 340.0).expect("value scale");
    (time_scale, value_scale)
}

#[test]
fn stems_rise_from_baseline_to_value() {
    let (time_scale, value_scale) = scales();
    let points = [DataPoint::new(0.0, 10.0), DataPoint::new(120_000.0, 30.0)];

    let stems = project_stems(&points, time_scale, value_scale);

    assert_eq!(stems.len(), 2);
    let ends: Vec<_> = stems
        .iter()
        .map(|stem| (stem.x, stem.y_baseline, stem.y_value))
        .collect();
    assert_eq!(ends, vec![(620.0, 340.0, 340.0), (0.0, 340.0, 0.0)]);
}

#[test]
fn bar_slot_counts_absent_samples() {
    assert_eq!(bar_slot_width(620.0, 3), Some(207.0));
    assert_eq!(bar_slot_width(600.0, 3), Some(200.0));
    assert_eq!(bar_slot_width(620.0, 0), None);
}

#[test]
fn bars_span_baseline_to_value() {
    let (time_scale, value_scale) = scales();
    let points = [DataPoint::new(0.0, 10.0), DataPoint::new(120_000.0, 30.0)];

    let bars = project_bars(&points, time_scale, value_scale, 207.0).expect("bars");

    assert_eq!(bars.len(), 2);
    let spans: Vec<_> = bars
        .iter()
        .map(|bar| (bar.x, bar.y_top, bar.height))
        .collect();
    assert_eq!(spans, vec![(620.0, 340.0, 0.0), (0.0, 0.0, 340.0)]);
    assert!(bars.iter().all(|bar| bar.width == 207.0));
}

#[test]
fn bar_width_must_be_positive() {
    let (time_scale, value_scale) = scales();
    let points = [DataPoint::new(0.0, 10.0)];

    let err = project_bars(&points, time_scale, value_scale, 0.0).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(project_bars(&points, time_scale, value_scale, f64::NAN).is_err());
}
