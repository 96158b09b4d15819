use criterion::{Criterion, criterion_group, criterion_main};
use series_chart::api::{ChartConfig, ChartData, ChartEngine, SteppedSeriesResponse};
use series_chart::core::{LinearScale, Sample, Viewport, normalize_samples, time_ticks};
use series_chart::render::SvgRenderer;
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 1_920.0, 0.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123));
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_normalize_10k(c: &mut Criterion) {
    let samples: Vec<Sample> = (0..10_000)
        .map(|i| {
            let value = if i % 7 == 0 {
                None
            } else {
                Some((i % 113) as f64)
            };
            Sample::new(value, 1_700_000_000.0 + f64::from(i) * 60.0)
        })
        .collect();

    c.bench_function("normalize_samples_10k", |b| {
        b.iter(|| {
            let _ = normalize_samples(black_box(&samples));
        })
    });
}

fn bench_time_ticks_week(c: &mut Criterion) {
    let start = 1_700_000_000_000.0;
    let end = start + 7.0 * 86_400_000.0;

    c.bench_function("time_ticks_week", |b| {
        b.iter(|| {
            let _ = time_ticks(black_box(start), black_box(end), black_box(10));
        })
    });
}

fn bench_svg_bar_render_2k(c: &mut Criterion) {
    let renderer = SvgRenderer::new(1600, 900).expect("svg renderer");
    let config = ChartConfig::bar_chart(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    let points: Vec<Option<f64>> = (0..2_000)
        .map(|i| (i % 9 != 0).then_some(f64::from(i % 250) * 4.0))
        .collect();
    let data = ChartData::from_stepped(&SteppedSeriesResponse {
        points,
        from: 1_700_000_000.0,
        step: 60.0,
        until: 1_700_000_000.0 + 1_999.0 * 60.0,
        min: None,
        max: None,
    });

    c.bench_function("svg_bar_render_2k", |b| {
        b.iter(|| {
            let _ = engine
                .render_data(black_box(&data))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_normalize_10k,
    bench_time_ticks_week,
    bench_svg_bar_render_2k
);
criterion_main!(benches);
