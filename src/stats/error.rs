//! Statistics source error types

use thiserror::Error;

use super::source::Endpoint;

/// Errors raised while fetching or decoding upstream statistics
#[derive(Error, Debug)]
pub enum StatsError {
    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),

    /// Connection or transport failure
    #[error("Network error calling {endpoint}: {message}")]
    Network { endpoint: Endpoint, message: String },

    /// Upstream answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Failed to decode {endpoint} response: {message}")]
    Decode { endpoint: Endpoint, message: String },

    /// Request exceeded the configured timeout
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: Endpoint },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Reasons the host could not report a position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Geolocation is not supported by this host")]
    Unsupported,

    #[error("Geolocation permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    Unavailable,

    #[error("Geolocation request timed out")]
    Timeout,

    #[error("Geolocation failed: {0}")]
    Other(String),
}

impl PositionError {
    /// Map a `GeolocationPositionError.code` value
    pub fn from_code(code: u16, message: &str) -> Self {
        match code {
            1 => PositionError::PermissionDenied,
            2 => PositionError::Unavailable,
            3 => PositionError::Timeout,
            _ => PositionError::Other(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::Status {
            endpoint: Endpoint::Countries,
            status: 503,
        };
        assert_eq!(err.to_string(), "/countries returned HTTP 503");

        let err = StatsError::Timeout {
            endpoint: Endpoint::Historical,
        };
        assert_eq!(
            err.to_string(),
            "Request to /historical/all?lastdays=all timed out"
        );
    }

    #[test]
    fn test_position_error_codes() {
        assert_eq!(PositionError::from_code(1, ""), PositionError::PermissionDenied);
        assert_eq!(PositionError::from_code(2, ""), PositionError::Unavailable);
        assert_eq!(PositionError::from_code(3, ""), PositionError::Timeout);
        assert_eq!(
            PositionError::from_code(9, "odd"),
            PositionError::Other("odd".to_string())
        );
    }
}
