/// Cryptalias - payment alias resolution
///
/// Resolves `name$domain` aliases into cryptocurrency receive addresses. The
/// domain publishes a resolver endpoint and an Ed25519 key under
/// `/.well-known/cryptalias/configuration`; the resolver answers with a signed,
/// expiring token carrying the address.

pub mod alias;
pub mod config;
pub mod crypto;
pub mod discovery;
pub mod error;
pub mod expiry;
pub mod http;
pub mod payload;
pub mod resolution;
pub mod resolver;

pub use config::ResolverConfig;
pub use crypto::{Ed25519Verifier, Jwk, Verifier};
pub use error::{ResolveError, ResolveResult};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use payload::Payload;
pub use resolver::{resolve_address, AliasResolver};
