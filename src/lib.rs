//! # Outbreak
//!
//! A two-page COVID-19 web app: a contact form and a dashboard that charts
//! global cumulative cases and maps per-country statistics. The pages are a
//! Leptos WASM frontend (`outbreak-ui`); this crate holds everything that is
//! not tied to the browser.
//!
//! ## Modules
//!
//! - [`stats`]: Domain types, upstream JSON validation, data source traits
//! - [`dashboard`]: Loader, loading gate, chart and map adapters
//! - [`contact`]: Contact form state
//! - [`routes`]: Client-side route table
//! - [`config`]: Configuration
//!
//! With the default `native` feature the crate also provides a reqwest
//! statistics client, a static bundle server and the `outbreak` CLI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use outbreak::config::Config;
//! use outbreak::dashboard::{DashboardLoader, DashboardPhase, LineChartConfig, MapView};
//! use outbreak::stats::{HttpStatsClient, NoGeolocation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = HttpStatsClient::new(&config.stats)?;
//!
//!     let loader = DashboardLoader::new(client, NoGeolocation, config.map.fallback_position());
//!     let data = loader.load().await;
//!
//!     if DashboardPhase::of(Some(&data)) == DashboardPhase::Ready {
//!         let chart = LineChartConfig::from_series(&data.series);
//!         let map = MapView::build(data.position, &data.countries, &config.map);
//!         println!("{} days, {} markers", chart.labels.len(), map.markers.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod contact;
pub mod dashboard;
pub mod routes;
pub mod stats;

#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;

#[cfg(test)]
mod test_support;

pub use config::{Config, LoggingConfig, MapConfig, ServerConfig, StatsConfig};
pub use contact::{ContactField, ContactForm};
pub use dashboard::{DashboardData, DashboardLoader, DashboardPhase, LineChartConfig, MapView};
pub use routes::Route;
pub use stats::{
    CaseTimeSeries, CountrySummary, PositionError, PositionSource, StatsError, StatsSource,
    UserPosition,
};

#[cfg(feature = "native")]
pub use config::ConfigError;
#[cfg(feature = "native")]
pub use server::{build_router, serve, ServerError};
#[cfg(feature = "native")]
pub use stats::HttpStatsClient;
