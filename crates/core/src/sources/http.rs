use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::nav::NavPoint;
use crate::models::period::NavPeriod;
use super::traits::NavSource;

const SOURCE_NAME: &str = "HTTP";

/// Reads NAV series from a running Barakah server.
///
/// - **Endpoint**: `GET {base}/api/nav-data/{fund}?period={token}`
/// - **Timeout**: 30 seconds per request
/// - Non-2xx responses surface as `CoreError::Api` with the server's message.
pub struct HttpNavSource {
    client: Client,
    base_url: Url,
}

impl HttpNavSource {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: &str) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::Network(format!("Invalid base URL {base_url:?}: {e}")))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Ok(Self { client, base_url })
    }

    fn nav_url(&self, fund_name: &str, period: NavPeriod) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::Network(format!("Base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "nav-data", fund_name]);
        url.query_pairs_mut().append_pair("period", period.token());
        Ok(url)
    }
}

// ── Server error body ───────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl NavSource for HttpNavSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch_nav_data(
        &self,
        fund_name: &str,
        period: NavPeriod,
    ) -> Result<Vec<NavPoint>, CoreError> {
        let url = self.nav_url(fund_name, period)?;
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(CoreError::Api {
                source_name: SOURCE_NAME.into(),
                status: status.as_u16(),
                message,
            });
        }

        let points: Vec<NavPoint> = serde_json::from_str(&body)?;
        tracing::debug!(fund = fund_name, %period, points = points.len(), "fetched NAV series over HTTP");
        Ok(points)
    }
}
