use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::ChartResult;

/// Vertical scale mapped to an inverted pixel axis.
///
/// `value_min` lands on the baseline (`y = height`) and `value_max` on `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, height: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new(value_min, value_max, height, 0.0)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.linear.range().0
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.linear.is_degenerate()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> Option<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
