//! Process configuration.
//!
//! Everything is read once at startup from the environment (and a `.env`
//! file if present) into an [`AppConfig`] that is passed to constructors.

use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::directions::DirectionsConfig;
use crate::seed::{FareDataConfig, SeedConfig};

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub directions: DirectionsConfig,
    pub fare_data: FareDataConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("APP_HOST", "127.0.0.1");
        let port_raw = var("APP_PORT", "3000");
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw })?;

        let log_level = var("APP_LOG_LEVEL", "info");

        let directions = DirectionsConfig::new(var("GOOGLE_MAPS_API_KEY", ""))
            .with_base_url(var("DIRECTIONS_BASE_URL", "https://maps.googleapis.com"))
            .with_timeout(parse_number(
                "DIRECTIONS_TIMEOUT_SECS",
                &var("DIRECTIONS_TIMEOUT_SECS", "5"),
            )?);

        let fare_data = FareDataConfig::new(var("FARE_DATA_DIR", "data"))
            .with_reseed(parse_flag("FARE_RESEED", &var("FARE_RESEED", "false"))?);

        let seed = SeedConfig::new(parse_number("FARE_SEED", &var("FARE_SEED", "42"))?)
            .with_rows_per_mode(parse_number(
                "FARE_ROWS_PER_MODE",
                &var("FARE_ROWS_PER_MODE", "1000"),
            )?);

        Ok(Self {
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            directions,
            fare_data,
            seed,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Logging controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16, got '{value}'")]
    InvalidPort { value: String },

    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },

    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
