/// JSON Web Key handling for discovery documents
use crate::{
    crypto::base64url,
    error::{ResolveError, ResolveResult},
};
use serde::{Deserialize, Serialize};

/// Key type for octet key pairs (RFC 8037)
pub const KTY_OKP: &str = "OKP";

/// Curve name for Ed25519 keys
pub const CRV_ED25519: &str = "Ed25519";

/// Public key as published in the discovery document
///
/// Only `kty` is required to parse. Whether the key is usable for Ed25519 is
/// decided when it is turned into raw key bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,

    /// base64url-encoded public key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// Other JWK members (`kid`, `alg`, `use`, ...), kept but not interpreted
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Jwk {
    /// Build an Ed25519 JWK from raw public key bytes
    pub fn ed25519(public_key: &[u8; 32]) -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

        Self {
            kty: KTY_OKP.to_string(),
            crv: Some(CRV_ED25519.to_string()),
            x: Some(URL_SAFE_NO_PAD.encode(public_key)),
            extra: serde_json::Map::new(),
        }
    }

    /// Parse a JWK from the raw `key` value of a discovery document
    pub fn from_value(value: serde_json::Value) -> ResolveResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| ResolveError::Config(format!("invalid key in configuration: {}", e)))
    }

    /// Extract the 32-byte Ed25519 public key
    pub fn ed25519_public_key(&self) -> ResolveResult<[u8; 32]> {
        if self.kty != KTY_OKP {
            return Err(ResolveError::Config(format!(
                "unsupported key type: {}",
                self.kty
            )));
        }

        match self.crv.as_deref() {
            Some(CRV_ED25519) => {}
            Some(other) => {
                return Err(ResolveError::Config(format!("unsupported curve: {}", other)));
            }
            None => {
                return Err(ResolveError::Config("missing crv in key".to_string()));
            }
        }

        let x = self
            .x
            .as_deref()
            .filter(|x| !x.is_empty())
            .ok_or_else(|| ResolveError::Config("missing x in key".to_string()))?;

        let bytes = base64url::decode(x)
            .map_err(|e| ResolveError::Config(format!("invalid x in key: {}", e)))?;

        bytes.try_into().map_err(|bytes: Vec<u8>| {
            ResolveError::Config(format!(
                "Ed25519 public key must be exactly 32 bytes, got {}",
                bytes.len()
            ))
        })
    }
}
