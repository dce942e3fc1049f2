/// Configuration management for the cryptalias resolver
use crate::error::{ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Main resolver configuration
///
/// Only the transport is configurable. Discovery paths, accept headers and
/// verification rules are fixed by the protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Outgoing HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    pub user_agent: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_user_agent() -> String {
    format!("cryptalias/{}", env!("CARGO_PKG_VERSION"))
}

impl ResolverConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ResolveResult<Self> {
        dotenv::dotenv().ok();

        let user_agent =
            env::var("CRYPTALIAS_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let request_timeout_secs = parse_secs("CRYPTALIAS_REQUEST_TIMEOUT_SECS", 10)?;
        let connect_timeout_secs = parse_secs("CRYPTALIAS_CONNECT_TIMEOUT_SECS", 5)?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(ResolverConfig {
            http: HttpConfig {
                user_agent,
                request_timeout_secs,
                connect_timeout_secs,
            },
            logging: LoggingConfig { level: log_level },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> ResolveResult<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(ResolveError::Argument(
                "User agent cannot be empty".to_string(),
            ));
        }

        if self.http.request_timeout_secs == 0 {
            return Err(ResolveError::Argument(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        if self.http.connect_timeout_secs == 0 {
            return Err(ResolveError::Argument(
                "Connect timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_secs(var: &str, default: u64) -> ResolveResult<u64> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ResolveError::Argument(format!("Invalid number of seconds in {}", var))),
        Err(_) => Ok(default),
    }
}
