use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{TimeScale, ValueScale, linear_ticks, nice_tick_step, time_ticks};

use super::axis_label_format::{
    format_time_label, format_value_label, value_label_precision, value_label_precision_for_value,
};

/// One axis tick: domain value, formatted label and pixel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    pub position: f64,
}

impl AxisTick {
    /// The tick sits exactly on value zero (`-0.0` included).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

/// Time-axis ticks over the scale's domain, ascending in time.
///
/// Because the scale is most-recent-first, positions are descending.
#[must_use]
pub fn time_axis_ticks(scale: TimeScale, hint: usize) -> Vec<AxisTick> {
    let (oldest, newest) = scale.domain();
    let ticks: Vec<AxisTick> = time_ticks(oldest, newest, hint)
        .into_iter()
        .map(|time_ms| AxisTick {
            value: time_ms,
            label: format_time_label(time_ms),
            position: scale.time_to_pixel(time_ms),
        })
        .collect();
    trace!(hint, tick_count = ticks.len(), "time axis ticks");
    ticks
}

/// Value-axis ticks over the scale's domain, ascending in value.
#[must_use]
pub fn value_axis_ticks(scale: ValueScale, hint: usize) -> Vec<AxisTick> {
    let (min, max) = scale.domain();
    let values = linear_ticks(min, max, hint);
    let precision = match nice_tick_step(min, max, hint) {
        Some(step) => value_label_precision(step),
        None => values
            .first()
            .copied()
            .map_or(0, value_label_precision_for_value),
    };

    let ticks: Vec<AxisTick> = values
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: format_value_label(value, precision),
            position: scale.value_to_pixel(value),
        })
        .collect();
    trace!(
        hint,
        precision,
        tick_count = ticks.len(),
        "value axis ticks"
    );
    ticks
}
