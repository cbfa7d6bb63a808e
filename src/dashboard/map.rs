//! Map adapter
//!
//! One marker per country at its reported coordinates, each with a popup of
//! the raw counts. No clustering or deduplication.

use serde::Serialize;

use crate::config::MapConfig;
use crate::stats::{CountrySummary, UserPosition};

/// Everything the tile map needs to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: UserPosition,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub popup: MarkerPopup,
}

/// Popup body: country heading plus one line per count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub heading: String,
    pub lines: Vec<String>,
}

impl MarkerPopup {
    pub fn for_country(country: &CountrySummary) -> Self {
        Self {
            heading: country.country_name.clone(),
            lines: vec![
                format!("Active Cases: {}", country.active_cases),
                format!("Recovered Cases: {}", country.recovered_cases),
                format!("Deaths: {}", country.deaths),
            ],
        }
    }

    /// HTML handed to the map library's popup
    pub fn to_html(&self) -> String {
        let body: Vec<String> = self.lines.iter().map(|l| escape_html(l)).collect();
        format!(
            "<h3>{}</h3><p>{}</p>",
            escape_html(&self.heading),
            body.join("<br/>")
        )
    }
}

impl MapMarker {
    pub fn for_country(country: &CountrySummary) -> Self {
        Self {
            latitude: country.latitude,
            longitude: country.longitude,
            popup: MarkerPopup::for_country(country),
        }
    }
}

impl MapView {
    pub fn build(center: UserPosition, countries: &[CountrySummary], config: &MapConfig) -> Self {
        Self {
            center,
            zoom: config.zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            markers: countries.iter().map(MapMarker::for_country).collect(),
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
