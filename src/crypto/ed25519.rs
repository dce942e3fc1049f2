/// Ed25519 signature verification
use crate::{
    crypto::{Jwk, Verifier},
    error::{ResolveError, ResolveResult},
};
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};

/// Default verifier backed by ed25519-dalek
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Jwk) -> ResolveResult<bool> {
        let public = key.ed25519_public_key()?;
        let verifying_key = VerifyingKey::from_bytes(&public)
            .map_err(|e| ResolveError::Config(format!("invalid Ed25519 public key: {}", e)))?;

        // A signature of the wrong length cannot verify
        let signature = match Signature::from_slice(signature) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };

        Ok(verifying_key.verify(signing_input, &signature).is_ok())
    }
}
