//! Configuration for vitreo-hub

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use vitreo_catalog::{FOUNDING_YEAR, RECENT_LIMIT, RECENT_SINCE_YEAR};

/// Main hub configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Site content configuration
    #[serde(default)]
    pub site: SiteConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Enable CORS on the JSON API
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Site content configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title shown in the header and page titles
    #[serde(default = "default_title")]
    pub title: String,

    /// Earliest year shown under "Recent Milestones"
    #[serde(default = "default_recent_since_year")]
    pub recent_since_year: i32,

    /// Maximum number of recent milestones on the dashboard
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Base year of the "years of progress" counter
    #[serde(default = "default_founding_year")]
    pub founding_year: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            recent_since_year: default_recent_since_year(),
            recent_limit: default_recent_limit(),
            founding_year: default_founding_year(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_request_timeout() -> u64 {
    30
}

fn default_title() -> String {
    "Vitreo Hub".to_string()
}

fn default_recent_since_year() -> i32 {
    RECENT_SINCE_YEAR
}

fn default_recent_limit() -> usize {
    RECENT_LIMIT
}

fn default_founding_year() -> i32 {
    FOUNDING_YEAR
}

fn default_log_level() -> String {
    "info".to_string()
}

impl HubConfig {
    /// Load configuration: defaults, then an optional file, then `VITREO_*`
    /// environment variables
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&HubConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // VITREO_SERVER__LISTEN_ADDR, VITREO_SITE__RECENT_LIMIT, ...
        builder = builder.add_source(
            config::Environment::with_prefix("VITREO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
