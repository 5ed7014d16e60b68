//! Application Configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `PRODUCTS__*` environment variables. Only operational settings live
//! here; product data always starts from the seed records.

use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

/// Config file looked up when no path is given (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "products";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset, e.g. `info` or `debug`
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: usize,
}

impl AppConfig {
    /// Load configuration from the given file path (without extension).
    /// A missing file is not an error.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("pagination.default_limit", 2)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PRODUCTS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
