use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// One entry of a `/render?target=...` response.
///
/// Each datapoint is `[value | null, epoch_seconds]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesResult {
    pub target: String,
    pub datapoints: Vec<(Option<f64>, f64)>,
}

impl LineSeriesResult {
    #[must_use]
    pub fn new(target: impl Into<String>, datapoints: Vec<(Option<f64>, f64)>) -> Self {
        Self {
            target: target.into(),
            datapoints,
        }
    }

    #[must_use]
    pub fn samples(&self) -> Vec<Sample> {
        self.datapoints
            .iter()
            .map(|(value, time_seconds)| Sample::new(*value, *time_seconds))
            .collect()
    }
}

/// `/data` response: evenly spaced values starting at `from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteppedSeriesResponse {
    pub points: Vec<Option<f64>>,
    pub from: f64,
    pub step: f64,
    pub until: f64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Source of chart samples.
///
/// Implementations perform one request per call and report failures through
/// `ChartError::Provider` / `ChartError::Decode`; nothing is retried.
pub trait DataProvider {
    /// Fetches line results for `target`; only the first result is charted.
    fn fetch_line_series(&self, target: &str) -> ChartResult<Vec<LineSeriesResult>>;

    /// Fetches the stepped series used by bar charts.
    fn fetch_stepped_series(&self) -> ChartResult<SteppedSeriesResponse>;
}

pub fn parse_line_payload(input: &str) -> ChartResult<Vec<LineSeriesResult>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::Decode(format!("failed to parse line series payload: {e}")))
}

pub fn parse_stepped_payload(input: &str) -> ChartResult<SteppedSeriesResponse> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::Decode(format!("failed to parse stepped series payload: {e}")))
}

/// In-memory provider serving fixed payloads, keyed by target.
#[derive(Debug, Clone, Default)]
pub struct StaticDataProvider {
    line_series: IndexMap<String, Vec<LineSeriesResult>>,
    stepped_series: Option<SteppedSeriesResponse>,
}

impl StaticDataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_series(
        mut self,
        target: impl Into<String>,
        results: Vec<LineSeriesResult>,
    ) -> Self {
        self.line_series.insert(target.into(), results);
        self
    }

    pub fn with_line_payload(self, target: impl Into<String>, json: &str) -> ChartResult<Self> {
        let results = parse_line_payload(json)?;
        Ok(self.with_line_series(target, results))
    }

    #[must_use]
    pub fn with_stepped_series(mut self, response: SteppedSeriesResponse) -> Self {
        self.stepped_series = Some(response);
        self
    }

    pub fn with_stepped_payload(self, json: &str) -> ChartResult<Self> {
        let response = parse_stepped_payload(json)?;
        Ok(self.with_stepped_series(response))
    }

    /// Registered targets in insertion order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.line_series.keys().map(String::as_str)
    }
}

impl DataProvider for StaticDataProvider {
    fn fetch_line_series(&self, target: &str) -> ChartResult<Vec<LineSeriesResult>> {
        self.line_series
            .get(target)
            .cloned()
            .ok_or_else(|| ChartError::Provider(format!("no line series for target `{target}`")))
    }

    fn fetch_stepped_series(&self) -> ChartResult<SteppedSeriesResponse> {
        self.stepped_series
            .clone()
            .ok_or_else(|| ChartError::Provider("no stepped series configured".to_owned()))
    }
}
