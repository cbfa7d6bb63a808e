//! Dashboard Data Loader
//!
//! Runs the statistics fetch and the geolocation request as two independent
//! futures and joins them. Failures never propagate: a failed slice is
//! logged and left empty, and a failed position resolves to the configured
//! fallback center. A position lookup that never answers (an unanswered
//! permission prompt) is cut off by a caller-supplied deadline.

use futures_util::future::{self, Either};
use futures_util::{join, pin_mut};
use std::future::Future;

use crate::stats::{
    CaseTimeSeries, CountrySummary, PositionError, PositionSource, StatsSource, UserPosition,
};

/// Everything the dashboard renders from one load
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub series: CaseTimeSeries,
    pub countries: Vec<CountrySummary>,
    pub position: UserPosition,
}

/// Loads dashboard data from a statistics source and a position source
pub struct DashboardLoader<S, P> {
    stats: S,
    position: P,
    fallback: UserPosition,
}

impl<S, P> DashboardLoader<S, P>
where
    S: StatsSource,
    P: PositionSource,
{
    pub fn new(stats: S, position: P, fallback: UserPosition) -> Self {
        Self {
            stats,
            position,
            fallback,
        }
    }

    /// Fetch statistics and resolve the position concurrently, with no
    /// deadline on the position lookup
    pub async fn load(&self) -> DashboardData {
        self.load_within(future::pending()).await
    }

    /// Like [`load`](Self::load), but the position lookup gives up and uses
    /// the fallback center once `deadline` completes
    pub async fn load_within<D>(&self, deadline: D) -> DashboardData
    where
        D: Future<Output = ()>,
    {
        let ((series, countries), position) =
            join!(self.fetch_stats(), self.resolve_position(deadline));

        tracing::info!(
            days = series.len(),
            countries = countries.len(),
            fallback_center = position.is_fallback(),
            "Dashboard data loaded"
        );

        DashboardData {
            series,
            countries,
            position,
        }
    }

    /// Historical series then country list, each failure isolated
    async fn fetch_stats(&self) -> (CaseTimeSeries, Vec<CountrySummary>) {
        let series = match self.stats.historical_cases().await {
            Ok(series) => series,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch historical cases");
                CaseTimeSeries::default()
            }
        };

        let countries = match self.stats.countries().await {
            Ok(countries) => countries,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch country statistics");
                Vec::new()
            }
        };

        (series, countries)
    }

    async fn resolve_position<D>(&self, deadline: D) -> UserPosition
    where
        D: Future<Output = ()>,
    {
        let lookup = self.position.current_position();
        pin_mut!(lookup);
        pin_mut!(deadline);

        let result = match future::select(lookup, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(PositionError::Timeout),
        };

        match result {
            Ok(position) => position,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = %self.fallback,
                    "Geolocation failed, using fallback center"
                );
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{
        Endpoint, FixedPosition, NoGeolocation, PositionError, StatsError, StatsResult,
    };
    use crate::test_support::capture_logs;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::time::Duration;

    /// Canned statistics source
    struct StubStats {
        series: Option<Vec<u64>>,
        countries: Option<Vec<CountrySummary>>,
        calls: Cell<u32>,
    }

    impl StubStats {
        fn ok(series: Vec<u64>, countries: Vec<CountrySummary>) -> Self {
            Self {
                series: Some(series),
                countries: Some(countries),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                series: None,
                countries: None,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl StatsSource for StubStats {
        async fn historical_cases(&self) -> StatsResult<CaseTimeSeries> {
            self.calls.set(self.calls.get() + 1);
            self.series
                .clone()
                .map(CaseTimeSeries::new)
                .ok_or_else(|| StatsError::Network {
                    endpoint: Endpoint::Historical,
                    message: "connection reset".to_string(),
                })
        }

        async fn countries(&self) -> StatsResult<Vec<CountrySummary>> {
            self.calls.set(self.calls.get() + 1);
            self.countries.clone().ok_or(StatsError::Status {
                endpoint: Endpoint::Countries,
                status: 500,
            })
        }
    }

    struct DeniedGeolocation;

    #[async_trait(?Send)]
    impl PositionSource for DeniedGeolocation {
        async fn current_position(&self) -> Result<UserPosition, PositionError> {
            Err(PositionError::PermissionDenied)
        }
    }

    /// Never answers, like an ignored permission prompt
    struct UnansweredGeolocation;

    #[async_trait(?Send)]
    impl PositionSource for UnansweredGeolocation {
        async fn current_position(&self) -> Result<UserPosition, PositionError> {
            future::pending().await
        }
    }

    fn country(name: &str) -> CountrySummary {
        CountrySummary {
            country_name: name.to_string(),
            latitude: 1.0,
            longitude: 2.0,
            active_cases: 5,
            recovered_cases: 3,
            deaths: 1,
        }
    }

    #[tokio::test]
    async fn test_load_success() {
        let loader = DashboardLoader::new(
            StubStats::ok(vec![100, 150], vec![country("X")]),
            FixedPosition {
                latitude: 40.0,
                longitude: -3.7,
            },
            UserPosition::fallback(0.0, 0.0),
        );

        let data = loader.load().await;
        assert_eq!(data.series.counts(), &[100, 150]);
        assert_eq!(data.countries.len(), 1);
        assert_eq!(data.position, UserPosition::geolocated(40.0, -3.7));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_logged_not_raised() {
        let logs = capture_logs();
        let stats = StubStats::failing();
        let loader = DashboardLoader::new(
            stats,
            FixedPosition {
                latitude: 1.0,
                longitude: 1.0,
            },
            UserPosition::fallback(0.0, 0.0),
        );

        let data = loader.load().await;

        assert!(data.series.is_empty());
        assert!(data.countries.is_empty());
        // Historical failure does not skip the country request
        assert_eq!(loader.stats.calls.get(), 2);

        let output = logs.contents();
        assert!(output.contains("Failed to fetch historical cases"));
        assert!(output.contains("connection reset"));
        assert!(output.contains("Failed to fetch country statistics"));
    }

    #[tokio::test]
    async fn test_geolocation_error_still_settles() {
        let logs = capture_logs();
        let loader = DashboardLoader::new(
            StubStats::ok(vec![1, 2, 3], vec![]),
            DeniedGeolocation,
            UserPosition::fallback(20.0, 10.0),
        );

        let data = loader.load().await;

        assert_eq!(data.position, UserPosition::fallback(20.0, 10.0));
        assert_eq!(data.series.len(), 3);
        assert!(logs.contents().contains("Geolocation failed"));
    }

    #[tokio::test]
    async fn test_missing_geolocation_uses_fallback() {
        let loader = DashboardLoader::new(
            StubStats::ok(vec![1], vec![]),
            NoGeolocation,
            UserPosition::fallback(0.0, 0.0),
        );

        assert!(loader.load().await.position.is_fallback());
    }

    #[tokio::test]
    async fn test_unanswered_geolocation_settles_at_deadline() {
        let logs = capture_logs();
        let loader = DashboardLoader::new(
            StubStats::ok(vec![4, 8], vec![country("X")]),
            UnansweredGeolocation,
            UserPosition::fallback(12.0, 34.0),
        );

        let data = tokio::time::timeout(
            Duration::from_secs(2),
            loader.load_within(tokio::time::sleep(Duration::from_millis(20))),
        )
        .await
        .expect("load settles once the deadline passes");

        assert!(data.position.is_fallback());
        assert_eq!(data.position, UserPosition::fallback(12.0, 34.0));
        assert_eq!(data.series.counts(), &[4, 8]);
        assert!(logs.contents().contains("timed out"));
    }

    #[tokio::test]
    async fn test_prompt_answer_beats_deadline() {
        let loader = DashboardLoader::new(
            StubStats::ok(vec![1], vec![]),
            FixedPosition {
                latitude: 5.0,
                longitude: 6.0,
            },
            UserPosition::fallback(0.0, 0.0),
        );

        let data = loader.load_within(future::pending()).await;
        assert_eq!(data.position, UserPosition::geolocated(5.0, 6.0));
    }
}
