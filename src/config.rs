//! Configuration System
//!
//! Settings for the statistics source, the map, the static bundle server
//! and logging. The browser app always runs on [`Config::default`]; native
//! tooling can load a TOML file and apply environment variable overrides.

use serde::Deserialize;
use std::time::Duration;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::stats::{UserPosition, DEFAULT_API_BASE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream statistics service
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Only honoured by the native client; browser fetches have no timeout.
    /// `0` disables the timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl StatsConfig {
    /// Per-request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Map rendering and initial centering
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_attribution")]
    pub attribution: String,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Center used when geolocation fails, as `[latitude, longitude]`
    #[serde(default = "default_fallback_center")]
    pub fallback_center: [f64; 2],

    #[serde(default = "default_geolocation_timeout")]
    pub geolocation_timeout_ms: u32,
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "&copy; OpenStreetMap contributors".to_string()
}

fn default_zoom() -> u8 {
    4
}

fn default_fallback_center() -> [f64; 2] {
    [0.0, 0.0]
}

fn default_geolocation_timeout() -> u32 {
    10_000
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            zoom: default_zoom(),
            fallback_center: default_fallback_center(),
            geolocation_timeout_ms: default_geolocation_timeout(),
        }
    }
}

impl MapConfig {
    /// The configured fallback center as a position
    pub fn fallback_position(&self) -> UserPosition {
        let [latitude, longitude] = self.fallback_center;
        UserPosition::fallback(latitude, longitude)
    }
}

/// Static bundle server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend (`index.html`, wasm, js)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> String {
    "outbreak-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, else default locations, else environment only
    ///
    /// An explicit path that fails to load is an error; missing default
    /// locations are not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_with_env(path);
        }

        let config_paths = [
            dirs::config_dir().map(|p| p.join("outbreak").join("config.toml")),
            Some(PathBuf::from("./outbreak.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = lookup("OUTBREAK_API_BASE") {
            self.stats.api_base = api_base;
        }

        if let Some(host) = lookup("OUTBREAK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("OUTBREAK_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid OUTBREAK_PORT {:?}", port),
            }
        }
        if let Some(dist_dir) = lookup("OUTBREAK_DIST_DIR") {
            self.server.dist_dir = dist_dir;
        }

        if let Some(level) = lookup("OUTBREAK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OUTBREAK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Outbreak Configuration
#
# Environment variables override these settings:
# - OUTBREAK_API_BASE
# - OUTBREAK_HOST
# - OUTBREAK_PORT
# - OUTBREAK_DIST_DIR
# - OUTBREAK_LOG_LEVEL
# - OUTBREAK_LOG_FORMAT

[stats]
# Base URL of the statistics service
api_base = "https://disease.sh/v3/covid-19"

# Request timeout for the native client (seconds, 0 = none)
request_timeout_secs = 30

[map]
# XYZ raster tile template
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = "&copy; OpenStreetMap contributors"

# Initial zoom level
zoom = 4

# Map center when geolocation fails: [latitude, longitude]
fallback_center = [0.0, 0.0]

# Give up on geolocation after this long (ms)
geolocation_timeout_ms = 10000

[server]
# Static bundle server bind address
host = "127.0.0.1"
port = 8084

# Built frontend directory
dist_dir = "outbreak-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stats.api_base, "https://disease.sh/v3/covid-19");
        assert_eq!(config.map.zoom, 4);
        assert_eq!(config.map.fallback_position(), UserPosition::fallback(0.0, 0.0));
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.map.zoom, 4);
        assert_eq!(config.map.geolocation_timeout_ms, 10_000);
        assert_eq!(config.server.dist_dir, "outbreak-ui/dist");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map]\nzoom = 6\nfallback_center = [51.5, -0.12]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.map.zoom, 6);
        assert_eq!(
            config.map.fallback_position(),
            UserPosition::fallback(51.5, -0.12)
        );
        // Untouched sections keep defaults
        assert_eq!(config.stats.request_timeout_secs, 30);
    }

    #[test]
    fn test_zero_request_timeout_disables_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[stats]\nrequest_timeout_secs = 0").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.stats.request_timeout(), None);
        assert_eq!(
            StatsConfig::default().request_timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map]\nzoom = \"high\"").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        assert!(Config::resolve(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("OUTBREAK_API_BASE", "http://localhost:9000"),
            ("OUTBREAK_PORT", "9090"),
            ("OUTBREAK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.stats.api_base, "http://localhost:9000");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "OUTBREAK_PORT").then(|| "lots".to_string()));
        assert_eq!(config.server.port, 8084);
    }
}
