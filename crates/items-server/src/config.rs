//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use http::HeaderValue;

/// Runtime mode of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Development,
    Production,
    Test,
}

impl RunMode {
    /// Production-like mode hides internal error messages from clients.
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidValue {
                name: "APP_ENV".to_string(),
                reason: format!("expected development, production or test, got {other:?}"),
            }),
        }
    }
}

/// Which origins may make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    /// Reflect whatever origin the request comes from.
    Mirror,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Runtime mode.
    pub mode: RunMode,
    /// Host name or address to bind, resolved when the listener is created.
    pub host: String,
    /// Server port to listen on.
    pub port: u16,
    /// Whether a tracing subscriber is installed at startup.
    pub log_enabled: bool,
    /// Log level directive (error, warn, info, debug, trace).
    pub log_level: String,
    /// Allowed CORS origins.
    pub cors_origin: CorsOrigin,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Development,
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_enabled: false,
            log_level: "info".to_string(),
            cors_origin: CorsOrigin::Mirror,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `APP_ENV`: development, production or test (default: development)
    /// - `PORT`: Server port (default: 3000)
    /// - `HOST`: Bind host name or address (default: 0.0.0.0)
    /// - `LOG_ENABLED`: anything except "false" enables logging (default: false)
    /// - `LOG_LEVEL`: fatal, error, warn, info, debug or trace (default: "info")
    /// - `CORS_ORIGIN`: "true" to allow any origin, or a comma-separated list (default: "true")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mode = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => defaults.mode,
        };

        let port = match lookup("PORT") {
            Some(value) => parse_port(&value)?,
            None => defaults.port,
        };

        let host = match lookup("HOST") {
            Some(value) => parse_host(value)?,
            None => defaults.host,
        };

        let log_enabled = lookup("LOG_ENABLED").is_some_and(|v| v != "false");

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => parse_log_level(&value)?,
            None => defaults.log_level,
        };

        let cors_origin = match lookup("CORS_ORIGIN") {
            Some(value) => parse_cors_origin(&value)?,
            None => defaults.cors_origin,
        };

        Ok(Self {
            mode,
            host,
            port,
            log_enabled,
            log_level,
            cors_origin,
        })
    }

    /// Host and port in the form `TcpListener::bind` resolves.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        name: "PORT".to_string(),
        reason: format!("{value:?} is not a port number"),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

fn parse_host(value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            name: "HOST".to_string(),
            reason: "host must not be empty".to_string(),
        });
    }
    Ok(value)
}

fn parse_log_level(value: &str) -> Result<String, ConfigError> {
    match value {
        // tracing has no level above error
        "fatal" => Ok("error".to_string()),
        "error" | "warn" | "info" | "debug" | "trace" => Ok(value.to_string()),
        other => Err(ConfigError::InvalidValue {
            name: "LOG_LEVEL".to_string(),
            reason: format!("unknown level {other:?}"),
        }),
    }
}

fn parse_cors_origin(value: &str) -> Result<CorsOrigin, ConfigError> {
    if value == "true" || value == "*" {
        return Ok(CorsOrigin::Mirror);
    }

    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ORIGIN".to_string(),
                reason: format!("invalid origin {origin:?}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigin::List(origins))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
