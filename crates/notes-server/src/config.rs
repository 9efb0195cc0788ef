//! Server configuration from environment variables.
//!
//! Database settings live in [`notes_store::StoreConfig`]; this covers the
//! HTTP side and the choice of backend.

use std::env;
use std::str::FromStr;

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Which note store the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// Process memory; contents are lost on exit.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue {
                name: "STORAGE_BACKEND".to_string(),
                reason: format!("expected \"postgres\" or \"memory\", got {other:?}"),
            }),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Note store backend.
    pub storage: StorageBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            storage: StorageBackend::Postgres,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `STORAGE_BACKEND`: "postgres" or "memory" (default: "postgres")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("not a port number: {raw:?}"),
            })?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        let storage = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.storage,
        };

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            storage,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Build the CORS layer for the configured origins.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = self.cors_allowed_origins.trim();
        let allow_origin = if origins == "*" {
            AllowOrigin::from(Any)
        } else {
            let parsed = origins
                .split(',')
                .map(|s| {
                    HeaderValue::from_str(s.trim()).map_err(|_| ConfigError::InvalidValue {
                        name: "CORS_ALLOWED_ORIGINS".to_string(),
                        reason: format!("invalid origin {:?}", s.trim()),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(parsed)
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = ServerConfig::from_vars(vars(&[])).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.storage, StorageBackend::Postgres);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(vars(&[
            ("PORT", "8000"),
            ("LOG_LEVEL", "debug"),
            ("STORAGE_BACKEND", "Memory"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.socket_addr().port(), 8000);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_vars(vars(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_backend() {
        assert!(ServerConfig::from_vars(vars(&[("STORAGE_BACKEND", "sqlite")])).is_err());
    }

    #[test]
    fn test_cors_origin_list() {
        let config = ServerConfig {
            cors_allowed_origins: "http://localhost:8080, https://notes.example".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.cors_layer().is_ok());

        let bad = ServerConfig {
            cors_allowed_origins: "http://ok.example,bad\u{1}origin".to_string(),
            ..ServerConfig::default()
        };
        assert!(bad.cors_layer().is_err());
    }
}
