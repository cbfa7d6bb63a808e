//! API Module
//!
//! Statistics fetching from the browser.

pub mod client;

pub use client::HttpStatsSource;
