//! HTTP API Client
//!
//! Statistics source backed by gloo-net. Responses are decoded and validated
//! by the shared `outbreak::stats` boundary decoders.

use async_trait::async_trait;
use gloo_net::http::Request;

use outbreak::stats::{
    decode_countries, decode_historical, CaseTimeSeries, CountrySummary, Endpoint, StatsError,
    StatsResult, StatsSource, DEFAULT_API_BASE,
};

/// Fetches the two upstream endpoints with `fetch`
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    api_base: String,
}

impl HttpStatsSource {
    pub fn new(api_base: &str) -> Self {
        Self {
            // Normalize: remove trailing slash
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, endpoint: Endpoint) -> StatsResult<String> {
        let url = endpoint.url(&self.api_base);
        tracing::debug!(%url, "Fetching statistics");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| StatsError::Network {
                endpoint,
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(StatsError::Status {
                endpoint,
                status: response.status(),
            });
        }

        response.text().await.map_err(|e| StatsError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

impl Default for HttpStatsSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait(?Send)]
impl StatsSource for HttpStatsSource {
    async fn historical_cases(&self) -> StatsResult<CaseTimeSeries> {
        let endpoint = Endpoint::Historical;
        let body = self.fetch(endpoint).await?;
        let decoded = decode_historical(&body).map_err(|e| StatsError::Decode {
            endpoint,
            message: e.to_string(),
        })?;
        Ok(decoded.log_rejections(endpoint))
    }

    async fn countries(&self) -> StatsResult<Vec<CountrySummary>> {
        let endpoint = Endpoint::Countries;
        let body = self.fetch(endpoint).await?;
        let decoded = decode_countries(&body).map_err(|e| StatsError::Decode {
            endpoint,
            message: e.to_string(),
        })?;
        Ok(decoded.log_rejections(endpoint))
    }
}
