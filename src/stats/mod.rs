//! Statistics Layer
//!
//! Domain types for the COVID-19 statistics, boundary validation of the
//! upstream JSON, and the source traits the dashboard loads through.

mod dto;
mod error;
mod source;
mod types;

#[cfg(feature = "native")]
mod client;

pub use dto::{decode_countries, decode_historical, Decoded};
pub use error::{PositionError, StatsError, StatsResult};
pub use source::{
    Endpoint, FixedPosition, NoGeolocation, PositionSource, StatsSource, DEFAULT_API_BASE,
};
pub use types::{valid_coordinates, CaseTimeSeries, CountrySummary, PositionOrigin, UserPosition};

#[cfg(feature = "native")]
pub use client::HttpStatsClient;
