//! Dashboard
//!
//! Loads the statistics and the map center, gates rendering, and shapes
//! the data for the chart and map renderers.

mod chart;
mod loader;
mod map;
mod phase;

pub use chart::{
    format_count_compact, ChartGeometry, LineChartConfig, LineDataset, Margins, CHART_TITLE,
    SERIES_LABEL,
};
pub use loader::{DashboardData, DashboardLoader};
pub use map::{MapMarker, MapView, MarkerPopup};
pub use phase::DashboardPhase;
