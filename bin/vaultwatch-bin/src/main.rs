mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use url::Url;

use vaultwatch_api::{ApiService, AppState};
use vaultwatch_monitor::{AdapterRegistry, VaultRegistry, http_client};

use crate::cli::Cli;

fn init_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger();

    let cli = Cli::parse();

    Url::parse(&cli.rpc_url).context("Invalid RPC URL")?;
    Url::parse(&cli.api_base).context("Invalid protocol API base URL")?;

    let http = http_client().context("Failed to build HTTP client")?;
    let adapters = AdapterRegistry::with_defaults(http);

    let mut vaults = VaultRegistry::with_demo(&cli.rpc_url, &cli.api_base);
    if let Some(path) = &cli.vault_registry {
        vaults
            .merge_file(path)
            .context("Failed to load vault registry file")?;
    }
    tracing::info!(
        adapters = ?adapters.names(),
        vaults = ?vaults.names(),
        "registries loaded"
    );

    let state = AppState {
        adapters: Arc::new(adapters),
        vaults: Arc::new(vaults),
    };

    ApiService::new(state, &cli.host, cli.api_port).run().await
}
