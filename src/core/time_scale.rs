use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Horizontal scale laid out most-recent-first.
///
/// The newest time (`time_end`) sits at `x = 0` and the oldest (`time_start`)
/// at `x = width`, so x strictly decreases as time increases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Builds the scale from a `[time_start, time_end]` range in epoch milliseconds.
    pub fn new(time_start: f64, time_end: f64, width: f64) -> ChartResult<Self> {
        if !time_start.is_finite() || !time_end.is_finite() {
            return Err(ChartError::InvalidData(
                "time scale range must be finite".to_owned(),
            ));
        }

        let (oldest, newest) = (time_start.min(time_end), time_start.max(time_end));
        Ok(Self {
            linear: LinearScale::new(newest, oldest, 0.0, width)?,
        })
    }

    /// Time domain as `(oldest, newest)`.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        let (newest, oldest) = self.linear.domain();
        (oldest, newest)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.linear.range().1
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.linear.is_degenerate()
    }

    #[must_use]
    pub fn time_to_pixel(self, time_ms: f64) -> f64 {
        self.linear.domain_to_pixel(time_ms)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> Option<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
