//! Native statistics client
//!
//! reqwest-backed [`StatsSource`] used by the CLI snapshot command.

use async_trait::async_trait;
use reqwest::Client;

use super::dto::{decode_countries, decode_historical};
use super::error::{StatsError, StatsResult};
use super::source::{Endpoint, StatsSource};
use super::types::{CaseTimeSeries, CountrySummary};
use crate::config::StatsConfig;

/// HTTP client for the public statistics service
pub struct HttpStatsClient {
    client: Client,
    api_base: String,
}

impl HttpStatsClient {
    /// Create a client from configuration
    pub fn new(config: &StatsConfig) -> StatsResult<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("outbreak/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StatsError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// GET an endpoint and return the body text
    async fn fetch(&self, endpoint: Endpoint) -> StatsResult<String> {
        let url = endpoint.url(&self.api_base);
        tracing::debug!(url = %url, "Fetching statistics");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                StatsError::Timeout { endpoint }
            } else {
                StatsError::Network {
                    endpoint,
                    message: e.to_string(),
                }
            }
        })?;

        if !response.status().is_success() {
            return Err(StatsError::Status {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                StatsError::Timeout { endpoint }
            } else {
                StatsError::Network {
                    endpoint,
                    message: e.to_string(),
                }
            }
        })
    }
}

#[async_trait(?Send)]
impl StatsSource for HttpStatsClient {
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    /// Serve canned upstream responses on an ephemeral port
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(api_base: String) -> HttpStatsClient {
        HttpStatsClient::new(&StatsConfig {
            api_base,
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetches_both_endpoints() {
        let router = Router::new()
            .route(
                "/historical/all",
                get(|| async { r#"{"cases":{"1/1/21":100,"1/2/21":150}}"# }),
            )
            .route(
                "/countries",
                get(|| async {
                    r#"[{"country":"X","countryInfo":{"lat":1,"long":2},"active":5,"recovered":3,"deaths":1}]"#
                }),
            );
        let client = client_for(spawn_upstream(router).await);

        let series = client.historical_cases().await.unwrap();
        assert_eq!(series.counts(), &[100, 150]);

        let countries = client.countries().await.unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country_name, "X");
    }

    #[tokio::test]
    async fn test_zero_timeout_still_fetches() {
        let router = Router::new().route(
            "/historical/all",
            get(|| async { r#"{"cases":{"1/1/21":7}}"# }),
        );
        let client = HttpStatsClient::new(&StatsConfig {
            api_base: spawn_upstream(router).await,
            request_timeout_secs: 0,
        })
        .unwrap();

        let series = client.historical_cases().await.unwrap();
        assert_eq!(series.counts(), &[7]);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/countries",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let client = client_for(spawn_upstream(router).await);

        let err = client.countries().await.unwrap_err();
        assert!(matches!(
            err,
            StatsError::Status {
                endpoint: Endpoint::Countries,
                status: 502
            }
        ));
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let router = Router::new().route("/historical/all", get(|| async { "[]" }));
        let client = client_for(spawn_upstream(router).await);

        let err = client.historical_cases().await.unwrap_err();
        assert!(matches!(err, StatsError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.historical_cases().await.unwrap_err();
        assert!(matches!(err, StatsError::Network { .. }));
    }
}
