use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Declared pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Resolves the plot area left after removing `margins`.
    pub fn plot_area(self, margins: Margins) -> ChartResult<PlotArea> {
        let width = f64::from(self.width) - margins.left - margins.right;
        let height = f64::from(self.height) - margins.top - margins.bottom;
        // NaN margins fail the `> 0.0` checks as well.
        if !self.is_valid() || !(width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        Ok(PlotArea {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }
}

/// Fixed pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner drawable region in pixels.
///
/// `left`/`top` locate the region inside the canvas; geometry produced by the
/// core is relative to that origin, so `(0, 0)` is the top-left plot corner and
/// `height` is the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.height
    }
}

/// One present sample in chart space: `x` is epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Time and value extents used to build the scales of one render pass.
///
/// `time` is `None` when the series has no samples at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub time: Option<(f64, f64)>,
    pub value_min: f64,
    pub value_max: f64,
}

impl Domain {
    #[must_use]
    pub fn new(time: Option<(f64, f64)>, value_min: f64, value_max: f64) -> Self {
        Self {
            time,
            value_min,
            value_max,
        }
    }

    #[must_use]
    pub fn value_range(self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }
}
