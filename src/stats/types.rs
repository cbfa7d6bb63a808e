//! Statistics domain types
//!
//! Validated shapes produced from the upstream JSON. Nothing here is mutated
//! after construction; a fresh set is built on every dashboard load.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Per-country snapshot of case statistics plus coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    pub country_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub active_cases: u64,
    pub recovered_cases: u64,
    pub deaths: u64,
}

/// Ordered global cumulative case counts, indexed by day offset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaseTimeSeries {
    counts: Vec<u64>,
    first_day: Option<NaiveDate>,
    last_day: Option<NaiveDate>,
}

impl CaseTimeSeries {
    /// Build a series from counts in day order
    pub fn new(counts: Vec<u64>) -> Self {
        Self {
            counts,
            first_day: None,
            last_day: None,
        }
    }

    /// Attach the calendar span of the series (display only)
    pub fn with_span(mut self, first_day: Option<NaiveDate>, last_day: Option<NaiveDate>) -> Self {
        self.first_day = first_day;
        self.last_day = last_day;
        self
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most recent cumulative count
    pub fn latest(&self) -> Option<u64> {
        self.counts.last().copied()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.first_day
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.last_day
    }
}

/// Where a map center came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionOrigin {
    /// Reported by the host's geolocation capability
    Geolocated,
    /// Configured default used because geolocation did not succeed
    Fallback,
}

/// Coordinates used as the initial map center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub origin: PositionOrigin,
}

impl UserPosition {
    pub fn geolocated(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            origin: PositionOrigin::Geolocated,
        }
    }

    pub fn fallback(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            origin: PositionOrigin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == PositionOrigin::Fallback
    }
}

impl fmt::Display for UserPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// True when the pair is a usable WGS84 coordinate
pub fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
