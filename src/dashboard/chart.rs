//! Chart adapter
//!
//! Turns the case series into a single-series line chart description and
//! the pixel geometry the canvas renderer draws with. The x axis is the day
//! index rendered as a label, not a calendar date.

use serde::Serialize;

use crate::stats::CaseTimeSeries;

pub const CHART_TITLE: &str = "Covid-19 World-Wide data";
pub const SERIES_LABEL: &str = "Total Cases";
pub const SERIES_BORDER_COLOR: &str = "rgb(255,99,132)";
pub const SERIES_BACKGROUND_COLOR: &str = "rgba(255, 99, 132, 0.5)";

/// Line chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    pub title: String,
    /// One label per point: the day index as a string
    pub labels: Vec<String>,
    pub dataset: LineDataset,
}

/// The single plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub fill: bool,
    pub border_color: String,
    pub background_color: String,
}

impl LineChartConfig {
    pub fn from_series(series: &CaseTimeSeries) -> Self {
        let data = series.counts().to_vec();
        let labels = (0..data.len()).map(|i| i.to_string()).collect();

        Self {
            title: CHART_TITLE.to_string(),
            labels,
            dataset: LineDataset {
                label: SERIES_LABEL.to_string(),
                data,
                fill: false,
                border_color: SERIES_BORDER_COLOR.to_string(),
                background_color: SERIES_BACKGROUND_COLOR.to_string(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.data.is_empty()
    }
}

/// Plot area insets in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 70.0,
            right: 20.0,
            top: 40.0,
            bottom: 40.0,
        }
    }
}

/// Maps (day index, count) onto canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    y_min: f64,
    y_max: f64,
    last_index: usize,
}

impl ChartGeometry {
    pub fn new(width: f64, height: f64, data: &[u64]) -> Self {
        let (min, max) = data
            .iter()
            .fold(None, |acc: Option<(u64, u64)>, &v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })
            .map(|(lo, hi)| (lo as f64, hi as f64))
            .unwrap_or((0.0, 0.0));

        // 10% headroom; counts are never negative so the floor stays at 0
        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };

        Self {
            width,
            height,
            margins: Margins::default(),
            y_min: (min - padding).max(0.0),
            y_max: max + padding,
            last_index: data.len().saturating_sub(1),
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    pub fn x_for(&self, index: usize) -> f64 {
        if self.last_index == 0 {
            return self.margins.left + self.plot_width() / 2.0;
        }
        self.margins.left + (index as f64 / self.last_index as f64) * self.plot_width()
    }

    /// Canvas y grows downward, so larger values map to smaller y
    pub fn y_for(&self, value: f64) -> f64 {
        self.margins.top + ((self.y_max - value) / (self.y_max - self.y_min)) * self.plot_height()
    }

    pub fn project(&self, index: usize, value: u64) -> (f64, f64) {
        (self.x_for(index), self.y_for(value as f64))
    }

    /// `count + 1` evenly spaced gridlines, top to bottom, as (y, value)
    pub fn y_ticks(&self, count: usize) -> Vec<(f64, f64)> {
        let count = count.max(1);
        (0..=count)
            .map(|i| {
                let y = self.margins.top + (i as f64 / count as f64) * self.plot_height();
                let value = self.y_max - (i as f64 / count as f64) * (self.y_max - self.y_min);
                (y, value)
            })
            .collect()
    }

    /// Up to `count + 1` distinct day indices spread across the x axis
    pub fn x_ticks(&self, points: usize, count: usize) -> Vec<(f64, usize)> {
        if points == 0 {
            return Vec::new();
        }
        let count = count.max(1);
        let mut ticks: Vec<(f64, usize)> = (0..=count)
            .map(|i| i * self.last_index / count)
            .map(|index| (self.x_for(index), index))
            .collect();
        ticks.dedup_by_key(|(_, index)| *index);
        ticks
    }
}

/// Short axis label for large counts (`1.5K`, `676.6M`)
pub fn format_count_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_input_matches_series() {
        let series = CaseTimeSeries::new(vec![100, 150]);
        let config = LineChartConfig::from_series(&series);

        assert_eq!(config.dataset.data, vec![100, 150]);
        assert_eq!(config.labels, vec!["0", "1"]);
        assert_eq!(config.title, "Covid-19 World-Wide data");
        assert_eq!(config.dataset.label, "Total Cases");
        assert!(!config.dataset.fill);
    }

    #[test]
    fn test_empty_series() {
        let config = LineChartConfig::from_series(&CaseTimeSeries::default());
        assert!(config.is_empty());
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_projection_spans_plot_area() {
        let geometry = ChartGeometry::new(800.0, 400.0, &[100, 200, 300]);
        let m = geometry.margins;

        let (x0, y0) = geometry.project(0, 100);
        let (x2, y2) = geometry.project(2, 300);

        assert_eq!(x0, m.left);
        assert_eq!(x2, 800.0 - m.right);
        // Padding keeps extremes off the plot edges
        assert!(y2 > m.top);
        assert!(y0 < 400.0 - m.bottom);
        assert!(y2 < y0);
    }

    #[test]
    fn test_flat_and_single_point_series() {
        let geometry = ChartGeometry::new(800.0, 400.0, &[0, 0]);
        assert_eq!(geometry.y_range(), (0.0, 1.0));

        let single = ChartGeometry::new(800.0, 400.0, &[42]);
        let (x, _) = single.project(0, 42);
        assert_eq!(x, single.margins.left + single.plot_width() / 2.0);
    }

    #[test]
    fn test_ticks() {
        let geometry = ChartGeometry::new(800.0, 400.0, &[10, 20, 30, 40, 50]);

        let y_ticks = geometry.y_ticks(5);
        assert_eq!(y_ticks.len(), 6);
        assert_eq!(y_ticks[0].0, geometry.margins.top);
        assert!(y_ticks[0].1 > y_ticks[5].1);

        let x_ticks = geometry.x_ticks(5, 10);
        let indices: Vec<usize> = x_ticks.iter().map(|(_, i)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);

        assert!(geometry.x_ticks(0, 5).is_empty());
    }

    #[test]
    fn test_format_count_compact() {
        assert_eq!(format_count_compact(950.0), "950");
        assert_eq!(format_count_compact(1_500.0), "1.5K");
        assert_eq!(format_count_compact(676_600_000.0), "676.6M");
        assert_eq!(format_count_compact(2_000_000_000.0), "2.0B");
    }
}
