/// base64url decoding for JWS segments
use crate::error::{ResolveError, ResolveResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Decode a base64url segment
///
/// Maps the URL-safe alphabet back to the standard one (`-` to `+`, `_` to `/`),
/// pads with `=` to a multiple of four and decodes with the standard engine.
/// Segments that arrive already padded decode the same way.
pub fn decode(input: &str) -> ResolveResult<Vec<u8>> {
    let mut b64: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    while b64.len() % 4 != 0 {
        b64.push('=');
    }

    STANDARD
        .decode(b64.as_bytes())
        .map_err(|e| ResolveError::Format(format!("invalid base64url segment: {}", e)))
}
