/// Unified error types for alias resolution
use thiserror::Error;

/// Main error type for the resolver
///
/// Every variant is terminal: a failing stage aborts the whole resolution and the
/// error reaches the caller unchanged.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Missing or unusable caller input (ticker, alias, configuration values)
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Malformed alias, token, base64url segment, JSON or timestamp
    #[error("Format error: {0}")]
    Format(String),

    /// Non-success HTTP response from the discovery or resolver endpoint
    #[error("request failed {status}: {body}")]
    Transport { status: u16, body: String },

    /// The request never produced an HTTP response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Discovery document is missing required fields or has unusable key material
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cryptographic verification of the resolution token failed
    #[error("Signature error: {0}")]
    Signature(String),

    /// Required payload field absent
    #[error("missing {0} in JWS payload")]
    MissingField(&'static str),

    /// Payload validity window has passed
    #[error("resolved address has expired (expires {0})")]
    Expired(String),
}

impl ResolveError {
    /// Whether repeating the same call could plausibly succeed
    ///
    /// Only transport-level trouble qualifies. Trust failures (signature, expiry,
    /// malformed records) are permanent for the record that produced them.
    pub fn is_retryable(&self) -> bool {
        match self {
            ResolveError::Network(_) => true,
            ResolveError::Transport { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(e: serde_json::Error) -> Self {
        ResolveError::Format(format!("invalid JSON: {}", e))
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        ResolveError::Network(e.to_string())
    }
}

/// Result type alias for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;
