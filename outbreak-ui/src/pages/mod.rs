//! Pages
//!
//! Top-level page components for each route.

pub mod charts_and_maps;
pub mod contact;

pub use charts_and_maps::ChartsAndMaps;
pub use contact::Contact;
