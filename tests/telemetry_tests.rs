use series_chart::telemetry::{init_default_tracing, init_tracing_with_fallback};

#[test]
fn tracing_installs_at_most_once() {
    let first = init_default_tracing();
    let second = init_tracing_with_fallback("series_chart=debug");

    assert_eq!(first, cfg!(feature = "telemetry"));
    assert!(!second);
}
