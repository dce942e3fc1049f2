/// cryptalias - resolve a payment alias from the command line
///
/// Usage: cryptalias <ticker> <alias>
///
/// Prints the verified receive address on stdout.
use anyhow::{bail, Context};
use cryptalias::{AliasResolver, ResolverConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptalias=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (ticker, alias) = match args.as_slice() {
        [ticker, alias] => (ticker.as_str(), alias.as_str()),
        _ => bail!("usage: cryptalias <ticker> <alias$domain>"),
    };

    // Load configuration
    let config = ResolverConfig::from_env().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let resolver = AliasResolver::from_config(&config)?;

    let address = resolver
        .resolve_address(ticker, alias)
        .await
        .with_context(|| format!("failed to resolve {} for {}", ticker, alias))?;

    println!("{}", address);

    Ok(())
}
