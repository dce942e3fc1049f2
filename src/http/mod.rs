/// HTTP transport
///
/// The resolver never talks to the network directly. It goes through the
/// `HttpClient` capability so callers can supply their own transport and tests
/// can script responses.

pub mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use crate::error::{ResolveError, ResolveResult};
use async_trait::async_trait;

/// Accept header for the discovery document
pub const ACCEPT_JSON: &str = "application/json";

/// Accept header for the resolution token
pub const ACCEPT_JOSE: &str = "application/jose";

/// Raw HTTP response as seen by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Return the body of a 2xx response, or a transport error carrying
    /// the status and body text
    pub fn into_success_body(self) -> ResolveResult<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ResolveError::Transport {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// HTTP GET capability
///
/// Implementations perform exactly one request per call: no retries, no
/// redirects policy beyond what the transport does by default, no caching.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request with the given `Accept` header
    ///
    /// Non-2xx responses are returned as `Ok`; only failures that produce no
    /// response at all are errors.
    async fn get(&self, url: &str, accept: &str) -> ResolveResult<HttpResponse>;
}
