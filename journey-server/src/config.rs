//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::pricing::{PricingError, PricingTable};

/// Default listening port.
const DEFAULT_PORT: u16 = 3001;

/// Default frontend origin allowed by CORS.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),

    #[error("invalid CORS_ORIGIN: {0}")]
    InvalidCorsOrigin(String),
}

/// Configuration for the estimation server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub bind_addr: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Browser origin allowed to call the API
    pub cors_origin: String,

    /// JSON pricing table to use instead of the built-in prices
    pub pricing_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognises `PORT`, `BIND_ADDR`, `CORS_ORIGIN` and `PRICING_FILE`.
    /// Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|_| ConfigError::InvalidBindAddr(addr))?;
        }

        if let Some(origin) = lookup("CORS_ORIGIN") {
            config.cors_origin = origin;
        }
        config.cors_origin_header()?;

        config.pricing_file = lookup("PRICING_FILE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the allowed CORS origin.
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = origin.into();
        self
    }

    /// Use prices from a JSON file.
    pub fn with_pricing_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.pricing_file = Some(path.into());
        self
    }

    /// Returns the address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// The CORS origin as a header value.
    pub fn cors_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.cors_origin)
            .map_err(|_| ConfigError::InvalidCorsOrigin(self.cors_origin.clone()))
    }

    /// Load the configured pricing table, or the built-in one.
    pub fn load_pricing(&self) -> Result<PricingTable, PricingError> {
        match &self.pricing_file {
            Some(path) => PricingTable::load(path),
            None => Ok(PricingTable::builtin()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            pricing_file: None,
        }
    }
}
