use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Deterministic rectangle geometry for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
}

/// Bar width that tiles the plot with one slot per sample, absent ones included.
///
/// Returns `None` when there are no samples.
#[must_use]
pub fn bar_slot_width(plot_width: f64, sample_count: usize) -> Option<f64> {
    if sample_count == 0 || !plot_width.is_finite() || plot_width <= 0.0 {
        return None;
    }
    Some((plot_width / sample_count as f64).ceil())
}

/// Projects points into bars spanning from the value to the baseline.
///
/// Each bar starts at the mapped time (`x`) and extends `bar_width_px` to the
/// right. Values below the domain minimum still yield a non-negative height.
pub fn project_bars(
    points: &[DataPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
    bar_width_px: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !bar_width_px.is_finite() || bar_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "bar width must be finite and > 0".to_owned(),
        ));
    }

    let baseline = value_scale.height();
    let mut bars = Vec::with_capacity(points.len());
    for point in points {
        let y_value = value_scale.value_to_pixel(point.y);
        bars.push(BarGeometry {
            x: time_scale.time_to_pixel(point.x),
            y_top: y_value.min(baseline),
            width: bar_width_px,
            height: (baseline - y_value).abs(),
        });
    }

    Ok(bars)
}
