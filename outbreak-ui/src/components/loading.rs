//! Loading Component

use leptos::*;

/// Spinner shown while the dashboard load is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-500">"Loading..."</p>
        </div>
    }
}
