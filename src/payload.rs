/// Decoded claims of a resolution token
use crate::error::{ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};

/// Resolution token payload
///
/// `address` and `expires` are required for a successful resolution but are
/// optional here so that their absence surfaces as a missing-field error rather
/// than a JSON error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub address: Option<String>,

    /// ISO-8601 expiry timestamp
    #[serde(default)]
    pub expires: Option<String>,

    /// Any other claims the resolver includes
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Payload {
    /// Parse a payload from decoded JSON bytes
    pub fn from_slice(bytes: &[u8]) -> ResolveResult<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ResolveError::Format(format!("JWS payload is not UTF-8: {}", e)))?;

        Ok(serde_json::from_str(text)?)
    }

    /// The address, if present and non-empty
    pub fn require_address(&self) -> ResolveResult<&str> {
        self.address
            .as_deref()
            .filter(|a| !a.is_empty())
            .ok_or(ResolveError::MissingField("address"))
    }
}
