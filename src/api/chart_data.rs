use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Domain, NormalizedSeries, Sample, normalize_samples, normalize_stepped};

use super::data_provider::{LineSeriesResult, SteppedSeriesResponse};

/// Mark style used for the data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartMode {
    /// One vertical stem per sample.
    #[default]
    Line,
    /// One rectangle per sample slot.
    Bar,
}

/// Normalized series plus the domain used for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub mode: ChartMode,
    pub series: NormalizedSeries,
    pub domain: Domain,
}

impl ChartData {
    /// Stem chart from explicit-timestamp samples.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Self {
        let series = normalize_samples(samples);
        let (value_min, value_max) = series.value_domain();
        let domain = Domain::new(series.time_range, value_min, value_max);
        Self {
            mode: ChartMode::Line,
            series,
            domain,
        }
    }

    /// Stem chart from a `/render` response; only the first result is used.
    #[must_use]
    pub fn from_line_results(results: &[LineSeriesResult]) -> Self {
        match results.first() {
            Some(first) => {
                debug!(
                    series_target = %first.target,
                    result_count = results.len(),
                    "charting first line result"
                );
                Self::from_samples(&first.samples())
            }
            None => Self::from_samples(&[]),
        }
    }

    /// Bar chart from a `/data` response.
    ///
    /// The time domain is `[from, until]`; explicit `min`/`max` override the
    /// data extrema.
    #[must_use]
    pub fn from_stepped(response: &SteppedSeriesResponse) -> Self {
        let series = normalize_stepped(&response.points, response.from, response.step);
        let (data_min, data_max) = series.value_domain();
        let domain = Domain::new(
            Some((response.from * 1_000.0, response.until * 1_000.0)),
            response.min.unwrap_or(data_min),
            response.max.unwrap_or(data_max),
        );
        Self {
            mode: ChartMode::Bar,
            series,
            domain,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ChartMode) -> Self {
        self.mode = mode;
        self
    }
}
