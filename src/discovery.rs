/// Discovery of a domain's resolver configuration
///
/// Every domain that supports aliases publishes a JSON document at
/// `https://{domain}/.well-known/cryptalias/configuration` naming its resolver
/// endpoint and the key that signs resolution tokens.
use crate::{
    crypto::Jwk,
    error::{ResolveError, ResolveResult},
    http::{HttpClient, ACCEPT_JSON},
};
use serde::Deserialize;
use tracing::debug;

/// Well-known path of the discovery document
pub const CONFIGURATION_PATH: &str = "/.well-known/cryptalias/configuration";

/// Validated discovery document
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Resolver base URL without trailing slashes
    pub resolver_endpoint: String,
    /// Key that signs this domain's resolution tokens
    pub key: Jwk,
}

/// Discovery document as published, before validation
#[derive(Debug, Deserialize)]
struct RawConfiguration {
    #[serde(default)]
    resolver: Option<RawResolverSection>,
    #[serde(default)]
    key: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawResolverSection {
    #[serde(default)]
    resolver_endpoint: Option<String>,
}

impl Configuration {
    /// Parse and validate a discovery document body
    pub fn from_json(body: &str) -> ResolveResult<Self> {
        let raw: RawConfiguration = serde_json::from_str(body)?;

        let resolver_endpoint = raw
            .resolver
            .and_then(|r| r.resolver_endpoint)
            .map(|endpoint| endpoint.trim_end_matches('/').to_string())
            .filter(|endpoint| !endpoint.is_empty())
            .ok_or_else(|| {
                ResolveError::Config("missing resolver_endpoint in configuration".to_string())
            })?;

        let key = raw
            .key
            .ok_or_else(|| ResolveError::Config("missing key in configuration".to_string()))?;

        Ok(Self {
            resolver_endpoint,
            key: Jwk::from_value(key)?,
        })
    }
}

/// Discovery document URL for a domain
pub fn configuration_url(domain: &str) -> String {
    format!("https://{}{}", domain, CONFIGURATION_PATH)
}

/// Fetch and validate the discovery document for `domain`
pub async fn fetch_configuration(http: &dyn HttpClient, domain: &str) -> ResolveResult<Configuration> {
    let url = configuration_url(domain);
    debug!("Fetching resolver configuration: {}", url);

    let body = http.get(&url, ACCEPT_JSON).await?.into_success_body()?;

    Configuration::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use serde_json::json;

    /// Transport double answering every request with one response
    struct StaticResponse(u16, String);

    #[async_trait]
    impl HttpClient for StaticResponse {
        async fn get(&self, url: &str, accept: &str) -> ResolveResult<HttpResponse> {
            assert_eq!(url, "https://example.com/.well-known/cryptalias/configuration");
            assert_eq!(accept, ACCEPT_JSON);
            Ok(HttpResponse::new(self.0, self.1.clone()))
        }
    }

    fn jwk_json() -> serde_json::Value {
        json!({ "kty": "OKP", "crv": "Ed25519", "x": "ebVWLo_mVPlAeLES6KmLp5AfhTrmlb7X4OORC60ElmQ" })
    }

    #[test]
    fn test_configuration_url() {
        assert_eq!(
            configuration_url("example.com"),
            "https://example.com/.well-known/cryptalias/configuration"
        );
    }

    #[test]
    fn test_parse_configuration() {
        let body = json!({
            "resolver": { "resolver_endpoint": "https://resolver.example" },
            "key": jwk_json()
        })
        .to_string();

        let config = Configuration::from_json(&body).unwrap();
        assert_eq!(config.resolver_endpoint, "https://resolver.example");
        assert_eq!(config.key.kty, "OKP");
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let body = json!({
            "resolver": { "resolver_endpoint": "https://resolver.example/api///" },
            "key": jwk_json()
        })
        .to_string();

        let config = Configuration::from_json(&body).unwrap();
        assert_eq!(config.resolver_endpoint, "https://resolver.example/api");
    }

    #[test]
    fn test_missing_or_empty_endpoint() {
        for body in [
            json!({ "key": jwk_json() }),
            json!({ "resolver": null, "key": jwk_json() }),
            json!({ "resolver": {}, "key": jwk_json() }),
            json!({ "resolver": { "resolver_endpoint": "" }, "key": jwk_json() }),
            json!({ "resolver": { "resolver_endpoint": "///" }, "key": jwk_json() }),
        ] {
            match Configuration::from_json(&body.to_string()) {
                Err(ResolveError::Config(msg)) => assert!(msg.contains("resolver_endpoint")),
                other => panic!("expected config error for {}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_missing_key() {
        for body in [
            json!({ "resolver": { "resolver_endpoint": "https://resolver.example" } }),
            json!({ "resolver": { "resolver_endpoint": "https://resolver.example" }, "key": null }),
        ] {
            match Configuration::from_json(&body.to_string()) {
                Err(ResolveError::Config(msg)) => assert!(msg.contains("key")),
                other => panic!("expected config error for {}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_endpoint_checked_before_key() {
        let body = json!({ "resolver": { "resolver_endpoint": "" } }).to_string();
        match Configuration::from_json(&body) {
            Err(ResolveError::Config(msg)) => assert!(msg.contains("resolver_endpoint")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        assert!(matches!(
            Configuration::from_json("<html>oops</html>"),
            Err(ResolveError::Format(_))
        ));
    }

    #[test]
    fn test_fetch_configuration() {
        let body = json!({
            "resolver": { "resolver_endpoint": "https://resolver.example/" },
            "key": jwk_json()
        })
        .to_string();

        let config =
            tokio_test::block_on(fetch_configuration(&StaticResponse(200, body), "example.com"))
                .unwrap();
        assert_eq!(config.resolver_endpoint, "https://resolver.example");
    }

    #[test]
    fn test_fetch_configuration_non_success() {
        let client = StaticResponse(500, "upstream exploded".to_string());
        match tokio_test::block_on(fetch_configuration(&client, "example.com")) {
            Err(ResolveError::Transport { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
