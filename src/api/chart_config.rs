use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TIME_TICK_HINT: usize = 10;
pub const DEFAULT_VALUE_TICK_HINT: usize = 3;

/// Stem chart layout: room for value labels on the left and time labels below.
pub const LINE_CHART_MARGINS: Margins = Margins::new(20.0, 20.0, 40.0, 60.0);
/// Bar chart layout: symmetric side margins.
pub const BAR_CHART_MARGINS: Margins = Margins::new(30.0, 90.0, 30.0, 90.0);

const LINE_CHART_TIME_LABEL_OFFSET: LabelOffset = LabelOffset::new(-10.0, 6.0);
const BAR_CHART_TIME_LABEL_OFFSET: LabelOffset = LabelOffset::new(-10.0, 16.0);
const VALUE_LABEL_OFFSET: LabelOffset = LabelOffset::new(-10.0, 3.0);

/// Pixel offset applied to an axis label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub dx: f64,
    pub dy: f64,
}

impl LabelOffset {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_time_tick_hint")]
    pub time_tick_hint: usize,
    #[serde(default = "default_value_tick_hint")]
    pub value_tick_hint: usize,
    /// Offset of time labels from `(x(t), baseline + overhang)`.
    #[serde(default = "default_time_label_offset")]
    pub time_label_offset: LabelOffset,
    /// Offset of value labels from `(0, y(v))`.
    #[serde(default = "default_value_label_offset")]
    pub value_label_offset: LabelOffset,
}

impl ChartConfig {
    /// Creates a config using the line-chart layout.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::line_chart(viewport)
    }

    #[must_use]
    pub fn line_chart(viewport: Viewport) -> Self {
        Self::with_layout(viewport, LINE_CHART_MARGINS, LINE_CHART_TIME_LABEL_OFFSET)
    }

    #[must_use]
    pub fn bar_chart(viewport: Viewport) -> Self {
        Self::with_layout(viewport, BAR_CHART_MARGINS, BAR_CHART_TIME_LABEL_OFFSET)
    }

    fn with_layout(viewport: Viewport, margins: Margins, time_label_offset: LabelOffset) -> Self {
        Self {
            viewport,
            margins,
            time_tick_hint: DEFAULT_TIME_TICK_HINT,
            value_tick_hint: DEFAULT_VALUE_TICK_HINT,
            time_label_offset,
            value_label_offset: VALUE_LABEL_OFFSET,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_hints(mut self, time_tick_hint: usize, value_tick_hint: usize) -> Self {
        self.time_tick_hint = time_tick_hint;
        self.value_tick_hint = value_tick_hint;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;
        if self.time_tick_hint == 0 || self.value_tick_hint == 0 {
            return Err(ChartError::InvalidData("tick hints must be > 0".to_owned()));
        }
        for (name, offset) in [
            ("time", self.time_label_offset),
            ("value", self.value_label_offset),
        ] {
            if !offset.dx.is_finite() || !offset.dy.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{name} label offset must be finite"
                )));
            }
        }
        self.plot_area()?;
        Ok(self)
    }

    pub fn plot_area(self) -> ChartResult<PlotArea> {
        self.viewport.plot_area(self.margins)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_margins() -> Margins {
    LINE_CHART_MARGINS
}

fn default_time_tick_hint() -> usize {
    DEFAULT_TIME_TICK_HINT
}

fn default_value_tick_hint() -> usize {
    DEFAULT_VALUE_TICK_HINT
}

fn default_time_label_offset() -> LabelOffset {
    LINE_CHART_TIME_LABEL_OFFSET
}

fn default_value_label_offset() -> LabelOffset {
    VALUE_LABEL_OFFSET
}
