use std::path::PathBuf;

use clap::Parser;

use vaultwatch_monitor::{DEFAULT_API_BASE, DEFAULT_RPC_URL};

#[derive(Parser, Debug)]
#[command(author, version, about = "Read-only risk monitor for DeFi vaults", long_about = None)]
pub struct Cli {
    /// Host the API binds to
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "8080")]
    pub api_port: u16,

    /// Solana JSON-RPC endpoint
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Base URL of the protocol's own API
    #[arg(long, env = "PROTOCOL_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// JSON file with additional vault registry entries
    #[arg(long, env = "VAULT_REGISTRY_PATH")]
    pub vault_registry: Option<PathBuf>,
}
