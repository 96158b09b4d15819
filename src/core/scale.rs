use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a numeric domain onto a pixel range.
///
/// A zero-width domain is allowed: every input then maps to the middle of the
/// range so degenerate data never produces NaN geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return (self.range_start + self.range_end) * 0.5;
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse mapping; `None` when the domain is degenerate or the range is flat.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> Option<f64> {
        let range_span = self.range_end - self.range_start;
        if self.is_degenerate() || range_span == 0.0 || !pixel.is_finite() {
            return None;
        }

        let normalized = (pixel - self.range_start) / range_span;
        let domain_span = self.domain_end - self.domain_start;
        Some(self.domain_start + normalized * domain_span)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new(5.0, 5.0, 0.0, 300.0).expect("scale");
        assert_eq!(scale.domain_to_pixel(5.0), 150.0);
        assert_eq!(scale.domain_to_pixel(-1e9), 150.0);
        assert_eq!(scale.pixel_to_domain(10.0), None);
    }

    #[test]
    fn reversed_range_is_supported() {
        let scale = LinearScale::new(0.0, 10.0, 100.0, 0.0).expect("scale");
        assert_eq!(scale.domain_to_pixel(0.0), 100.0);
        assert_eq!(scale.domain_to_pixel(10.0), 0.0);
        assert_eq!(scale.pixel_to_domain(25.0), Some(7.5));
    }

    #[test]
    fn non_finite_domain_is_rejected() {
        assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
    }
}
