use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vaultwatch_monitor::{
    DEFAULT_API_BASE, DEFAULT_RPC_URL, Snapshot, UserConfig, VaultConfig,
};
use vaultwatch_risk::{RiskMetrics, RiskVerdict};

/// Everything needed to snapshot one vault for one wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SnapshotRequest {
    #[serde(default = "default_adapter")]
    pub adapter: String,
    pub vault_pubkey: String,
    pub lp_mint: String,
    pub idle_reserve_ata: String,
    pub reserve_mint: String,
    pub wallet: String,
    #[serde(default)]
    pub lp_token_account: Option<String>,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub include_token_accounts: bool,
}

fn default_adapter() -> String {
    "voltr".to_string()
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl SnapshotRequest {
    pub fn vault_config(&self) -> VaultConfig {
        VaultConfig {
            vault_pubkey: self.vault_pubkey.clone(),
            lp_mint: self.lp_mint.clone(),
            idle_reserve_ata: self.idle_reserve_ata.clone(),
            reserve_mint: self.reserve_mint.clone(),
            rpc_url: self.rpc_url.clone(),
            api_base: self.api_base.clone(),
        }
    }

    pub fn user_config(&self) -> UserConfig {
        UserConfig {
            wallet: self.wallet.clone(),
            lp_token_account: self.lp_token_account.clone(),
        }
    }
}

/// Query parameters for the default snapshot endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct SnapshotQuery {
    #[serde(default)]
    pub include_token_accounts: bool,
}

/// Query parameters for registry-backed snapshot endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct VaultSnapshotQuery {
    /// Wallet to snapshot instead of the vault's registered default user.
    pub wallet: Option<String>,
    pub lp_token_account: Option<String>,
    #[serde(default)]
    pub include_token_accounts: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    pub adapters: Vec<String>,
    pub vaults: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultListItem {
    pub name: String,
    pub adapter: String,
    pub vault_pubkey: String,
    pub lp_mint: String,
}

/// Snapshot plus the risk verdict derived from it in one round trip.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub snapshot: Snapshot,
    pub metrics: RiskMetrics,
    pub risk: RiskVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_fills_defaults() {
        let request: SnapshotRequest = serde_json::from_value(serde_json::json!({
            "vault_pubkey": "v",
            "lp_mint": "m",
            "idle_reserve_ata": "a",
            "reserve_mint": "r",
            "wallet": "w",
        }))
        .unwrap();

        assert_eq!(request.adapter, "voltr");
        assert_eq!(request.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(request.api_base, DEFAULT_API_BASE);
        assert!(!request.include_token_accounts);
        assert!(request.lp_token_account.is_none());
    }

    #[test]
    fn request_maps_onto_monitor_configs() {
        let request: SnapshotRequest = serde_json::from_value(serde_json::json!({
            "vault_pubkey": "v",
            "lp_mint": "m",
            "idle_reserve_ata": "a",
            "reserve_mint": "r",
            "wallet": "w",
            "lp_token_account": "lp",
            "rpc_url": "http://localhost:8899",
        }))
        .unwrap();

        let cfg = request.vault_config();
        assert_eq!(cfg.vault_pubkey, "v");
        assert_eq!(cfg.rpc_url, "http://localhost:8899");

        let user = request.user_config();
        assert_eq!(user.wallet, "w");
        assert_eq!(user.lp_token_account.as_deref(), Some("lp"));
    }
}
