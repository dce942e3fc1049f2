/// Retrieval of signed resolution tokens from a domain's resolver
use crate::{
    error::ResolveResult,
    http::{HttpClient, ACCEPT_JOSE},
};
use tracing::debug;

/// Path prefix of the resolve call on a resolver endpoint
pub const RESOLVE_PATH: &str = "/_cryptalias/resolve";

/// Resolve URL for a ticker/alias pair
///
/// Both path segments are percent-encoded; the alias keeps its `$` as `%24`.
pub fn resolve_url(endpoint: &str, ticker: &str, alias: &str) -> String {
    format!(
        "{}{}/{}/{}",
        endpoint,
        RESOLVE_PATH,
        urlencoding::encode(ticker),
        urlencoding::encode(alias)
    )
}

/// Fetch the compact JWS for `ticker` at `alias`
///
/// `endpoint` must already have its trailing slashes stripped.
pub async fn fetch_token(
    http: &dyn HttpClient,
    endpoint: &str,
    ticker: &str,
    alias: &str,
) -> ResolveResult<String> {
    let url = resolve_url(endpoint, ticker, alias);
    debug!("Fetching resolution token: {}", url);

    let body = http.get(&url, ACCEPT_JOSE).await?.into_success_body()?;

    Ok(body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ResolveError, http::HttpResponse};
    use async_trait::async_trait;

    struct StaticResponse(u16, &'static str);

    #[async_trait]
    impl HttpClient for StaticResponse {
        async fn get(&self, _url: &str, accept: &str) -> ResolveResult<HttpResponse> {
            assert_eq!(accept, ACCEPT_JOSE);
            Ok(HttpResponse::new(self.0, self.1))
        }
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("https://resolver.example", "xmr", "donations$example.com"),
            "https://resolver.example/_cryptalias/resolve/xmr/donations%24example.com"
        );
    }

    #[test]
    fn test_resolve_url_encodes_reserved_characters() {
        assert_eq!(
            resolve_url("https://r.example/base", "usd t/x", "a b?c#d$e.com"),
            "https://r.example/base/_cryptalias/resolve/usd%20t%2Fx/a%20b%3Fc%23d%24e.com"
        );
    }

    #[test]
    fn test_unreserved_characters_kept() {
        assert_eq!(
            resolve_url("https://r.example", "btc-test_net.v2~", "x$y.z"),
            "https://r.example/_cryptalias/resolve/btc-test_net.v2~/x%24y.z"
        );
    }

    #[test]
    fn test_fetch_token_trims_body() {
        let client = StaticResponse(200, "  aaa.bbb.ccc\r\n");
        let token = tokio_test::block_on(fetch_token(
            &client,
            "https://resolver.example",
            "xmr",
            "a$example.com",
        ))
        .unwrap();
        assert_eq!(token, "aaa.bbb.ccc");
    }

    #[test]
    fn test_fetch_token_non_success() {
        let client = StaticResponse(403, "forbidden");
        let err = tokio_test::block_on(fetch_token(
            &client,
            "https://resolver.example",
            "xmr",
            "a$example.com",
        ))
        .unwrap_err();
        assert!(matches!(err, ResolveError::Transport { status: 403, .. }));
    }
}
