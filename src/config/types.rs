// Configuration types module
// Defines the configuration data structures and their startup defaults

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common or json)
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: true,
            access_log_format: "combined".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Routes configuration
///
/// All route data is immutable for the process lifetime.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RoutesConfig {
    /// File served for the root path
    pub default_document: String,
    /// Friendly-URL aliases, scanned in order, first match wins
    pub aliases: Vec<RouteAlias>,
    /// Advisory extension allow-list; violations are logged, never blocked
    pub allowed_extensions: Vec<String>,
}

/// A friendly URL mapped to a concrete on-disk file name
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteAlias {
    pub name: String,
    pub file: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            default_document: "index.html".to_string(),
            aliases: vec![RouteAlias {
                name: "home".to_string(),
                file: "home.html".to_string(),
            }],
            allowed_extensions: [
                ".html", ".css", ".js", ".jpg", ".jpeg", ".png", ".gif", ".ico",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}
