mod axis_label_format;
mod axis_render_frame_builder;
mod axis_ticks;
mod chart_config;
mod chart_data;
mod data_provider;
#[cfg(feature = "http-provider")]
mod http_data_provider;
mod render_frame_builder;

pub use axis_label_format::{
    TIME_LABEL_PATTERN, format_time_label, format_value_label, value_label_precision,
    value_label_precision_for_value,
};
pub use axis_render_frame_builder::{TIME_GRID_OVERHANG_PX, VALUE_GRID_OVERHANG_PX};
pub use axis_ticks::{AxisTick, time_axis_ticks, value_axis_ticks};
pub use chart_config::{
    BAR_CHART_MARGINS, ChartConfig, DEFAULT_TIME_TICK_HINT, DEFAULT_VALUE_TICK_HINT,
    LINE_CHART_MARGINS, LabelOffset,
};
pub use chart_data::{ChartData, ChartMode};
pub use data_provider::{
    DataProvider, LineSeriesResult, StaticDataProvider, SteppedSeriesResponse,
    parse_line_payload, parse_stepped_payload,
};
#[cfg(feature = "http-provider")]
pub use http_data_provider::{DEFAULT_REQUEST_TIMEOUT, HttpDataProvider};

use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// What to fetch for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRequest {
    /// Stem chart of the first result returned for `target`.
    Line { target: String },
    /// Bar chart of the provider's stepped series.
    Bar,
}

impl ChartRequest {
    #[must_use]
    pub fn line(target: impl Into<String>) -> Self {
        Self::Line {
            target: target.into(),
        }
    }
}

/// Fetches and normalizes the data for `request`.
pub fn fetch_chart_data<P: DataProvider + ?Sized>(
    provider: &P,
    request: &ChartRequest,
) -> ChartResult<ChartData> {
    let data = match request {
        ChartRequest::Line { target } => {
            let results = provider.fetch_line_series(target).inspect_err(|err| {
                warn!(error = %err, series_target = %target, "line series fetch failed");
            })?;
            ChartData::from_line_results(&results)
        }
        ChartRequest::Bar => {
            let response = provider
                .fetch_stepped_series()
                .inspect_err(|err| warn!(error = %err, "stepped series fetch failed"))?;
            ChartData::from_stepped(&response)
        }
    };
    Ok(data)
}

/// Explicit render entry point: fetch, normalize, scale, draw axes and marks.
///
/// The engine owns its renderer and can be invoked repeatedly; each pass hands
/// a complete frame to the renderer, which replaces the previous one.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Builds a frame for `data`, hands it to the renderer and returns it.
    pub fn render_data(&mut self, data: &ChartData) -> ChartResult<RenderFrame> {
        let frame = self.build_render_frame(data)?;
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    /// Runs one full pass against `provider`.
    pub fn render<P: DataProvider + ?Sized>(
        &mut self,
        provider: &P,
        request: &ChartRequest,
    ) -> ChartResult<RenderFrame> {
        let data = fetch_chart_data(provider, request)?;
        debug!(
            request = ?request,
            samples = data.series.sample_count,
            points = data.series.points.len(),
            "rendering chart"
        );
        self.render_data(&data)
    }
}
