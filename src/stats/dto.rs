//! Upstream wire formats
//!
//! The statistics service is duck-typed JSON. Bodies are decoded here into
//! the validated domain types; entries that do not fit the schema are
//! counted instead of failing the whole response.

use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::source::Endpoint;
use super::types::{valid_coordinates, CaseTimeSeries, CountrySummary};

/// Date key format used by the historical endpoint (e.g. `1/22/20`)
const DATE_KEY_FORMAT: &str = "%m/%d/%y";

/// A decoded value plus the number of upstream entries that were rejected
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub rejected: usize,
}

impl<T> Decoded<T> {
    /// Unwrap the value, logging a warning if anything was rejected
    pub fn log_rejections(self, endpoint: Endpoint) -> T {
        if self.rejected > 0 {
            tracing::warn!(
                endpoint = %endpoint,
                rejected = self.rejected,
                "Dropped malformed entries from upstream response"
            );
        }
        self.value
    }
}

// ============ Historical ============

#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    cases: OrderedEntries,
}

/// JSON object entries in document order
#[derive(Debug, Default)]
struct OrderedEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping date strings to counts")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Non-negative whole count, tolerating integral floats like `12.0`
fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn parse_day(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Decode the `historical/all` body into a case series
///
/// Values are taken in response order; the date keys only label the span.
/// The series starts at the first valid count. A malformed count after that
/// repeats the previous day's total so every index stays a day offset.
pub fn decode_historical(body: &str) -> Result<Decoded<CaseTimeSeries>, serde_json::Error> {
    let response: HistoricalResponse = serde_json::from_str(body)?;

    let mut counts: Vec<u64> = Vec::with_capacity(response.cases.0.len());
    let mut first_key = None;
    let mut last_key = None;
    let mut rejected = 0;

    for (key, value) in &response.cases.0 {
        let count = match (as_count(value), counts.last()) {
            (Some(count), _) => count,
            (None, Some(&previous)) => {
                rejected += 1;
                previous
            }
            (None, None) => {
                rejected += 1;
                continue;
            }
        };

        if first_key.is_none() {
            first_key = Some(key.as_str());
        }
        last_key = Some(key.as_str());
        counts.push(count);
    }

    let series = CaseTimeSeries::new(counts)
        .with_span(first_key.and_then(parse_day), last_key.and_then(parse_day));

    Ok(Decoded {
        value: series,
        rejected,
    })
}

// ============ Countries ============

#[derive(Debug, Deserialize)]
struct CountryDto {
    country: String,
    #[serde(rename = "countryInfo")]
    country_info: CountryInfoDto,
    #[serde(deserialize_with = "count")]
    active: u64,
    #[serde(deserialize_with = "count")]
    recovered: u64,
    #[serde(deserialize_with = "count")]
    deaths: u64,
}

/// Field-level `as_count`
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_count(&value).ok_or_else(|| de::Error::custom("expected a non-negative whole count"))
}

#[derive(Debug, Deserialize)]
struct CountryInfoDto {
    lat: f64,
    long: f64,
}

impl CountryDto {
    fn into_summary(self) -> Option<CountrySummary> {
        let name = self.country.trim();
        if name.is_empty() || !valid_coordinates(self.country_info.lat, self.country_info.long) {
            return None;
        }

        Some(CountrySummary {
            country_name: name.to_string(),
            latitude: self.country_info.lat,
            longitude: self.country_info.long,
            active_cases: self.active,
            recovered_cases: self.recovered,
            deaths: self.deaths,
        })
    }
}

/// Decode the `countries` body into per-country summaries
pub fn decode_countries(body: &str) -> Result<Decoded<Vec<CountrySummary>>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(body)?;

    let mut countries = Vec::with_capacity(entries.len());
    let mut rejected = 0;

    for entry in entries {
        match serde_json::from_value::<CountryDto>(entry)
            .ok()
            .and_then(CountryDto::into_summary)
        {
            Some(summary) => countries.push(summary),
            None => rejected += 1,
        }
    }

    Ok(Decoded {
        value: countries,
        rejected,
    })
}
