//! Route table
//!
//! The two client-side routes. No guards, redirects or nesting.

/// Brand text shown in the navigation bar
pub const BRAND: &str = "My App";

/// Client-side pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Contact,
    Dashboard,
}

impl Route {
    /// Every route in navigation order
    pub const ALL: [Route; 2] = [Route::Contact, Route::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            Route::Contact => "/",
            Route::Dashboard => "/charts-and-maps",
        }
    }

    /// Navigation link text
    pub fn label(self) -> &'static str {
        match self {
            Route::Contact => "Home",
            Route::Dashboard => "Charts and Maps",
        }
    }
}
