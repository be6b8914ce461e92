// Configuration module entry point
// Loads startup configuration and owns the shared application state

mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

// Re-export public types
pub use types::{Config, LoggingConfig, RouteAlias, RoutesConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// The file is optional; missing values fall back to the startup
    /// defaults. Environment variables prefixed with `FILESERV` override
    /// file values.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("FILESERV"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Application state shared by every request.
///
/// Built once at startup and never mutated afterwards; handlers hold it
/// behind an `Arc`, so no locking is involved.
pub struct AppState {
    pub config: Config,
    /// Process working directory captured at startup; request paths resolve
    /// against it.
    pub base_dir: PathBuf,
}

impl AppState {
    pub const fn new(config: Config, base_dir: PathBuf) -> Self {
        Self { config, base_dir }
    }
}
