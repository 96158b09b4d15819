use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::DataPoint;

/// Raw provider sample: `value` is `None` for missing data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub value: Option<f64>,
    pub time_seconds: f64,
}

impl Sample {
    #[must_use]
    pub fn new(value: Option<f64>, time_seconds: f64) -> Self {
        Self {
            value,
            time_seconds,
        }
    }
}

/// Present points of one series plus the extents needed for scaling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub points: Vec<DataPoint>,
    /// Number of input samples, absent ones included.
    pub sample_count: usize,
    /// First and last sample time in milliseconds, absent samples included.
    pub time_range: Option<(f64, f64)>,
    /// Min/max over present values only.
    pub value_extrema: Option<(f64, f64)>,
}

impl NormalizedSeries {
    /// Value domain with the `[0, 1]` fallback for series without values.
    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_extrema.unwrap_or((0.0, 1.0))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Normalizes samples carrying explicit epoch-second timestamps.
#[must_use]
pub fn normalize_samples(samples: &[Sample]) -> NormalizedSeries {
    normalize_timed(
        samples
            .iter()
            .map(|sample| (sample.value, sample.time_seconds * 1_000.0)),
        samples.len(),
    )
}

/// Normalizes values whose timestamps are `from + step * index` seconds.
///
/// Absent values are skipped but still advance the clock by one `step`.
#[must_use]
pub fn normalize_stepped(
    values: &[Option<f64>],
    from_seconds: f64,
    step_seconds: f64,
) -> NormalizedSeries {
    normalize_timed(
        values.iter().enumerate().map(|(index, value)| {
            let time_seconds = from_seconds + step_seconds * index as f64;
            (*value, time_seconds * 1_000.0)
        }),
        values.len(),
    )
}

fn normalize_timed(
    samples: impl Iterator<Item = (Option<f64>, f64)>,
    sample_count: usize,
) -> NormalizedSeries {
    let mut points = Vec::with_capacity(sample_count);
    let mut first_time = None;
    let mut last_time = None;
    let mut extrema: Option<(f64, f64)> = None;

    for (value, time_ms) in samples {
        if first_time.is_none() {
            first_time = Some(time_ms);
        }
        last_time = Some(time_ms);

        let Some(value) = value else {
            continue;
        };
        if !value.is_finite() {
            trace!(time_ms, "skipping non-finite sample value");
            continue;
        }

        // Strict comparisons keep the first occurrence on ties.
        extrema = Some(match extrema {
            None => (value, value),
            Some((min, max)) => (
                if value < min { value } else { min },
                if value > max { value } else { max },
            ),
        });
        points.push(DataPoint::new(time_ms, value));
    }

    let time_range = first_time.zip(last_time);
    debug!(
        sample_count,
        point_count = points.len(),
        has_values = extrema.is_some(),
        "normalized samples"
    );

    NormalizedSeries {
        points,
        sample_count,
        time_range,
        value_extrema: extrema,
    }
}

#[cfg(test)]
mod tests {
    use super::{Sample, normalize_samples};

    #[test]
    fn time_range_uses_first_and_last_sample_even_when_absent() {
        let series = normalize_samples(&[
            Sample::new(None, 10.0),
            Sample::new(Some(4.0), 20.0),
            Sample::new(None, 30.0),
        ]);
        assert_eq!(series.time_range, Some((10_000.0, 30_000.0)));
        assert_eq!(series.points.len(), 1);
    }

    #[test]
    fn nan_values_are_treated_as_absent() {
        let series = normalize_samples(&[Sample::new(Some(f64::NAN), 1.0)]);
        assert!(series.points.is_empty());
        assert_eq!(series.value_extrema, None);
        assert_eq!(series.sample_count, 1);
    }
}
