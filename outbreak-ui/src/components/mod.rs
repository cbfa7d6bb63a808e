//! UI Components
//!
//! Reusable Leptos components for the two pages.

pub mod chart;
pub mod loading;
pub mod map;
pub mod nav;

pub use chart::Chart;
pub use loading::Loading;
pub use map::LeafletMap;
pub use nav::Nav;
