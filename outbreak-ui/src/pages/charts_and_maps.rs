//! Charts and Maps Page
//!
//! Loads the global case series, the per-country statistics and the user's
//! position once on mount, then renders the line chart and the marker map.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use outbreak::config::Config;
use outbreak::dashboard::{DashboardData, DashboardLoader, DashboardPhase, LineChartConfig, MapView};

use crate::api::HttpStatsSource;
use crate::components::{Chart, LeafletMap, Loading};
use crate::geo::BrowserGeolocation;

/// Dashboard page component
#[component]
pub fn ChartsAndMaps() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let data = create_rw_signal(None::<DashboardData>);

    let timeout_ms = config.map.geolocation_timeout_ms;
    let loader = DashboardLoader::new(
        HttpStatsSource::new(&config.stats.api_base),
        BrowserGeolocation { timeout_ms },
        config.map.fallback_position(),
    );

    // One load per mount; results arriving after unmount are dropped.
    // The browser's own timeout only starts once permission is granted, so
    // the wall-clock deadline also covers an unanswered prompt.
    spawn_local(async move {
        let loaded = loader.load_within(TimeoutFuture::new(timeout_ms)).await;
        data.try_set(Some(loaded));
    });

    let map_config = config.map.clone();

    view! {
        <div class="space-y-8">
            {move || data.with(|data| match DashboardPhase::of(data.as_ref()) {
                DashboardPhase::Loading => view! { <Loading /> }.into_view(),
                DashboardPhase::Unavailable => view! {
                    <div class="text-center text-gray-500 py-12">
                        "No case data available"
                    </div>
                }.into_view(),
                DashboardPhase::Ready => {
                    let Some(data) = data.as_ref() else {
                        return view! { <Loading /> }.into_view();
                    };
                    let chart = LineChartConfig::from_series(&data.series);
                    let map = MapView::build(data.position, &data.countries, &map_config);
                    let fallback = data.position.is_fallback();

                    view! {
                        <section class="bg-white rounded-xl shadow p-6">
                            <Chart config=chart />
                        </section>

                        <section class="bg-white rounded-xl shadow p-6">
                            {fallback.then(|| view! {
                                <p class="text-sm text-gray-500 mb-2">
                                    "Your location is unavailable; showing the default map center."
                                </p>
                            })}
                            <LeafletMap map_view=map />
                        </section>
                    }.into_view()
                }
            })}
        </div>
    }
}
