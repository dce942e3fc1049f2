/// Alias Resolver - Orchestrates discovery, token retrieval and verification
use crate::{
    alias::parse_domain,
    config::ResolverConfig,
    crypto::{verify_and_decode, Ed25519Verifier, Verifier},
    discovery::fetch_configuration,
    error::{ResolveError, ResolveResult},
    expiry::enforce_expires,
    http::{HttpClient, ReqwestHttpClient},
    resolution::fetch_token,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves `(ticker, alias)` pairs into receive addresses
///
/// Holds no per-call state. Every resolution fetches the domain's configuration
/// afresh and performs exactly two HTTP requests on the success path.
#[derive(Clone)]
pub struct AliasResolver {
    http: Arc<dyn HttpClient>,
    verifier: Arc<dyn Verifier>,
}

impl AliasResolver {
    /// Create a resolver from explicit collaborators
    pub fn new(http: Arc<dyn HttpClient>, verifier: Arc<dyn Verifier>) -> Self {
        Self { http, verifier }
    }

    /// Create a resolver using the given transport and Ed25519 verification
    pub fn with_http_client(http: Arc<dyn HttpClient>) -> Self {
        Self::new(http, Arc::new(Ed25519Verifier::new()))
    }

    /// Create the default resolver (reqwest transport, Ed25519 verification)
    pub fn from_config(config: &ResolverConfig) -> ResolveResult<Self> {
        config.validate()?;
        let http = ReqwestHttpClient::new(&config.http)?;
        Ok(Self::with_http_client(Arc::new(http)))
    }

    /// Resolve the address to pay for `ticker` at `alias`
    ///
    /// Stages run strictly in order and the first failure ends the call:
    /// 1. Parse the domain out of the alias
    /// 2. Fetch the domain's resolver configuration
    /// 3. Fetch the signed token from the resolver
    /// 4. Verify the token against the configuration key
    /// 5. Require an address and a future expiry
    pub async fn resolve_address(&self, ticker: &str, alias: &str) -> ResolveResult<String> {
        if ticker.is_empty() || alias.is_empty() {
            return Err(ResolveError::Argument(
                "ticker and alias are required".to_string(),
            ));
        }

        let domain = parse_domain(alias)?;

        let config = fetch_configuration(self.http.as_ref(), domain).await?;
        debug!("Resolver for {}: {}", domain, config.resolver_endpoint);

        let token = fetch_token(self.http.as_ref(), &config.resolver_endpoint, ticker, alias).await?;

        let payload = verify_and_decode(&token, &config.key, self.verifier.as_ref())?;
        let address = payload.require_address()?;

        if let Err(e) = enforce_expires(payload.expires.as_deref()) {
            warn!("Rejecting resolution for {} at {}: {}", ticker, domain, e);
            return Err(e);
        }

        info!("Resolved {} address for alias at {}", ticker, domain);

        Ok(address.to_string())
    }
}

/// Resolve `ticker` at `alias` with a default resolver
///
/// Builds a fresh reqwest client per call. Callers resolving repeatedly should
/// keep an [`AliasResolver`] around instead.
pub async fn resolve_address(ticker: &str, alias: &str) -> ResolveResult<String> {
    AliasResolver::from_config(&ResolverConfig::default())?
        .resolve_address(ticker, alias)
        .await
}
