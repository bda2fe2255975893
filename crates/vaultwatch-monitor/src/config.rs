use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::MonitorError;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_API_BASE: &str = "https://api.voltr.xyz";

/// Name under which the bundled demo vault is registered.
pub const DEMO_VAULT_NAME: &str = "voltr-usdc";

/// Addresses a vault adapter needs to read one vault.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultConfig {
    pub vault_pubkey: String,
    pub lp_mint: String,
    pub idle_reserve_ata: String,
    pub reserve_mint: String,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl VaultConfig {
    /// Voltr USDC vault on mainnet, used by the default snapshot route.
    pub fn demo() -> Self {
        Self {
            vault_pubkey: "FajosXiYhqUDZ9cEB3pwS8n8pvcAbL3KzCGZnWDNvgLa".to_string(),
            lp_mint: "A5dvM5NKnuo6tmwoiEFC22qcXcUsa6mUoUtpkxjm1gKg".to_string(),
            idle_reserve_ata: "3AK6wAysksFRke6KJasnnL1sFn73jqhwDNquR2WhgrhE".to_string(),
            reserve_mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            rpc_url: default_rpc_url(),
            api_base: default_api_base(),
        }
    }
}

/// Wallet whose position a snapshot is taken for.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserConfig {
    pub wallet: String,
    #[serde(default)]
    pub lp_token_account: Option<String>,
}

impl UserConfig {
    pub fn demo() -> Self {
        Self {
            wallet: "51pijqibmHQ17GZWjV8g8AyFWx1ZMmkUDtFR4Vz8Ah3F".to_string(),
            lp_token_account: Some("BKCANLpd7r1k1dkki4Wj48kJZXd7CFFEzNnZXQGTrMk1".to_string()),
        }
    }
}

/// One named entry of the vault registry file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredVault {
    #[serde(default = "default_adapter")]
    pub adapter: String,
    pub vault: VaultConfig,
    #[serde(default)]
    pub user: Option<UserConfig>,
}

fn default_adapter() -> String {
    "voltr".to_string()
}

/// Named vaults the API can serve without the caller spelling out addresses.
///
/// Backed by a `BTreeMap` so listings come out in a stable order.
#[derive(Debug, Clone, Default)]
pub struct VaultRegistry {
    vaults: BTreeMap<String, RegisteredVault>,
}

impl VaultRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the demo vault, pointed at the given endpoints.
    pub fn with_demo(rpc_url: &str, api_base: &str) -> Self {
        let mut vault = VaultConfig::demo();
        vault.rpc_url = rpc_url.to_string();
        vault.api_base = api_base.to_string();

        let mut registry = Self::new();
        registry.vaults.insert(
            DEMO_VAULT_NAME.to_string(),
            RegisteredVault {
                adapter: default_adapter(),
                vault,
                user: Some(UserConfig::demo()),
            },
        );
        registry
    }

    /// Loads entries from a JSON file, overwriting same-named entries.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), MonitorError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| MonitorError::Config(format!("cannot read {}: {e}", path.display())))?;
        let entries: BTreeMap<String, RegisteredVault> = serde_json::from_str(&raw)
            .map_err(|e| MonitorError::Config(format!("cannot parse {}: {e}", path.display())))?;

        self.vaults.extend(entries);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredVault> {
        self.vaults.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.vaults.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RegisteredVault)> {
        self.vaults.iter()
    }

    pub fn len(&self) -> usize {
        self.vaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaults.is_empty()
    }
}
