use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, TimeScale, ValueScale};

/// Vertical stem from the baseline up to one sample value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StemGeometry {
    pub x: f64,
    pub y_baseline: f64,
    pub y_value: f64,
}

/// Projects points into stems anchored on the plot baseline.
///
/// Points are drawn independently; neighbouring samples are never connected.
#[must_use]
pub fn project_stems(
    points: &[DataPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> Vec<StemGeometry> {
    let y_baseline = value_scale.height();
    points
        .iter()
        .map(|point| StemGeometry {
            x: time_scale.time_to_pixel(point.x),
            y_baseline,
            y_value: value_scale.value_to_pixel(point.y),
        })
        .collect()
}
