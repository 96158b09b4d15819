use std::time::Duration;

use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::data_provider::{
    DataProvider, LineSeriesResult, SteppedSeriesResponse, parse_line_payload,
    parse_stepped_payload,
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Blocking HTTP provider for `GET {base}/render?target=...` and `GET {base}/data`.
#[derive(Debug, Clone)]
pub struct HttpDataProvider {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpDataProvider {
    pub fn new(base_url: impl Into<String>) -> ChartResult<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ChartResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChartError::Provider(format!("http client error: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_text(&self, path: &str, query: &[(&str, &str)]) -> ChartResult<String> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "data provider request");
        self.client
            .get(&url)
            .query(query)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| ChartError::Provider(format!("request to `{url}` failed: {e}")))
    }
}

impl DataProvider for HttpDataProvider {
    fn fetch_line_series(&self, target: &str) -> ChartResult<Vec<LineSeriesResult>> {
        let body = self.get_text("/render", &[("target", target)])?;
        parse_line_payload(&body)
    }

    fn fetch_stepped_series(&self) -> ChartResult<SteppedSeriesResponse> {
        let body = self.get_text("/data", &[])?;
        parse_stepped_payload(&body)
    }
}
