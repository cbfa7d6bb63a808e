//! Outbreak Web App
//!
//! COVID-19 dashboard and contact page built with Leptos (WASM).
//!
//! # Pages
//!
//! - `/`: contact form (local state, submit logs the payload)
//! - `/charts-and-maps`: global case chart and per-country marker map
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches public statistics straight from the upstream API
//! and asks the browser for the user's position; there is no backend.

use leptos::*;

mod api;
mod app;
mod components;
mod geo;
mod pages;

fn main() {
    // Route `tracing` events to the browser console
    tracing_wasm::set_as_global_default();

    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
