//! Loading gate
//!
//! Decides whether the dashboard shows its placeholder or the chart and map.

use serde::Serialize;

use crate::stats::{CaseTimeSeries, UserPosition};

use super::loader::DashboardData;

/// What the dashboard page should render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardPhase {
    /// Requests still in flight, or no position yet
    Loading,
    /// Everything settled but there is no case series to chart
    Unavailable,
    /// Chart and map can render
    Ready,
}

impl DashboardPhase {
    /// Gate: ready only when not loading, a position is known and the
    /// series is non-empty
    pub fn evaluate(
        loading: bool,
        position: Option<&UserPosition>,
        series: &CaseTimeSeries,
    ) -> Self {
        if loading || position.is_none() {
            DashboardPhase::Loading
        } else if series.is_empty() {
            DashboardPhase::Unavailable
        } else {
            DashboardPhase::Ready
        }
    }

    /// Gate over the loader's output; `None` means the load has not settled
    pub fn of(data: Option<&DashboardData>) -> Self {
        match data {
            Some(data) => Self::evaluate(false, Some(&data.position), &data.series),
            None => DashboardPhase::Loading,
        }
    }

    pub fn is_loading(self) -> bool {
        self == DashboardPhase::Loading
    }
}
