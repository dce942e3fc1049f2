/// Compact JWS verification
///
/// The token is `header.payload.signature`. The signing input is the literal
/// text of the first two segments joined by `.`; segments are only decoded
/// after the signature checks out.
use crate::{
    crypto::{base64url, Jwk, Verifier},
    error::{ResolveError, ResolveResult},
    payload::Payload,
};
use tracing::warn;

/// Borrowed view of a compact JWS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactJws<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> CompactJws<'a> {
    /// Split a token into its three segments
    pub fn parse(token: &'a str) -> ResolveResult<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        match parts.as_slice() {
            [header, payload, signature] => Ok(Self {
                header: *header,
                payload: *payload,
                signature: *signature,
            }),
            _ => Err(ResolveError::Format("invalid JWS format".to_string())),
        }
    }

    /// Bytes covered by the signature
    pub fn signing_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(self.header.len() + 1 + self.payload.len());
        input.extend_from_slice(self.header.as_bytes());
        input.push(b'.');
        input.extend_from_slice(self.payload.as_bytes());
        input
    }
}

/// Verify a compact JWS against `key` and decode its payload
///
/// Nothing in the payload is looked at before the signature verifies.
pub fn verify_and_decode(token: &str, key: &Jwk, verifier: &dyn Verifier) -> ResolveResult<Payload> {
    let jws = CompactJws::parse(token)?;
    let signature = base64url::decode(jws.signature)?;

    if !verifier.verify(&jws.signing_input(), &signature, key)? {
        warn!("Resolution token failed signature verification");
        return Err(ResolveError::Signature(
            "signature verification failed".to_string(),
        ));
    }

    let payload_bytes = base64url::decode(jws.payload)?;
    Payload::from_slice(&payload_bytes)
}
