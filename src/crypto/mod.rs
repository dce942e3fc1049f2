/// Cryptography module for resolution token verification
///
/// Handles base64url decoding, JSON Web Key parsing, Ed25519 signature checks
/// and compact JWS decoding. Keys are only ever used to verify.

pub mod base64url;
pub mod ed25519;
pub mod jwk;
pub mod jws;

pub use ed25519::Ed25519Verifier;
pub use jwk::Jwk;
pub use jws::{verify_and_decode, CompactJws};

use crate::error::ResolveResult;

/// Signature verification capability
///
/// Returns `Ok(false)` when the signature does not check out and an error only
/// when the key material itself is unusable.
pub trait Verifier: Send + Sync {
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Jwk) -> ResolveResult<bool>;
}
