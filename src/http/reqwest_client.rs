/// reqwest-backed HTTP transport
use crate::{
    config::HttpConfig,
    error::{ResolveError, ResolveResult},
    http::{HttpClient, HttpResponse},
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

/// Default HTTP client used by the resolver
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new client from transport configuration
    pub fn new(config: &HttpConfig) -> ResolveResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ResolveError::Argument(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, accept: &str) -> ResolveResult<HttpResponse> {
        debug!("GET {} (accept: {})", url, accept);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("GET {} -> {}", url, status);

        Ok(HttpResponse { status, body })
    }
}
