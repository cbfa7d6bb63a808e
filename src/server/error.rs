//! Server error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors starting or running the bundle server
#[derive(Error, Debug)]
pub enum ServerError {
    /// The frontend has not been built into the configured directory
    #[error("No index.html in {0:?}; build the frontend with `trunk build` first")]
    MissingBundle(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
