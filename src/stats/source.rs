//! Data source seams
//!
//! The dashboard talks to the statistics service and to the host's
//! geolocation capability through these traits, so the browser (gloo-net,
//! `navigator.geolocation`) and native (reqwest, fixed coordinates) sides
//! share one loader.
//!
//! Traits are `?Send`: browser futures hold `JsValue`s and never cross
//! threads.

use async_trait::async_trait;
use std::fmt;

use super::error::{PositionError, StatsResult};
use super::types::{CaseTimeSeries, CountrySummary, UserPosition};

/// Default upstream base URL
pub const DEFAULT_API_BASE: &str = "https://disease.sh/v3/covid-19";

/// Upstream endpoints used by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Global cumulative cases keyed by date
    Historical,
    /// Current per-country statistics
    Countries,
}

impl Endpoint {
    /// Path relative to the API base
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Historical => "/historical/all?lastdays=all",
            Endpoint::Countries => "/countries",
        }
    }

    /// Absolute URL for this endpoint under `api_base`
    pub fn url(self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Remote statistics service
#[async_trait(?Send)]
pub trait StatsSource {
    /// Historical global cumulative case counts, in response order
    async fn historical_cases(&self) -> StatsResult<CaseTimeSeries>;

    /// Current statistics for every country
    async fn countries(&self) -> StatsResult<Vec<CountrySummary>>;
}

/// Host geolocation capability, asked at most once per load
#[async_trait(?Send)]
pub trait PositionSource {
    async fn current_position(&self) -> Result<UserPosition, PositionError>;
}

/// Position source that always reports the same coordinates
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait(?Send)]
impl PositionSource for FixedPosition {
    async fn current_position(&self) -> Result<UserPosition, PositionError> {
        Ok(UserPosition::geolocated(self.latitude, self.longitude))
    }
}

/// Position source for hosts without geolocation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait(?Send)]
impl PositionSource for NoGeolocation {
    async fn current_position(&self) -> Result<UserPosition, PositionError> {
        Err(PositionError::Unsupported)
    }
}
