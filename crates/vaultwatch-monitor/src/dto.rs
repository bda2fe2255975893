use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{UserConfig, VaultConfig};
use crate::error::MonitorError;

/// Outcome of one data source, kept alongside the others even when it failed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceResult<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Default for SourceResult<T> {
    fn default() -> Self {
        Self {
            ok: false,
            data: None,
            error: None,
        }
    }
}

impl<T> SourceResult<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub const fn err(message: String) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message),
        }
    }
}

impl<T> From<Result<T, MonitorError>> for SourceResult<T> {
    fn from(result: Result<T, MonitorError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(err.to_string()),
        }
    }
}

/// Idle-reserve view of a vault derived from three on-chain reads.
///
/// All amounts are UI amounts (decimals already applied by the node).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct OnchainIdleData {
    /// Reserve tokens sitting idle in the vault's reserve account.
    pub vault_nav_idle: f64,
    /// Circulating supply of the vault's LP mint.
    pub lp_supply: f64,
    /// LP tokens held by the monitored wallet.
    pub user_lp: f64,
    /// Idle NAV per LP token.
    pub lp_price_idle: f64,
    /// Fraction of the LP supply the wallet holds.
    pub share_idle: f64,
    /// Reserve tokens the wallet could withdraw against the idle NAV.
    pub withdrawable_idle: f64,
    /// Idle share of the NAV visible to this reader.
    pub idle_ratio: f64,
}

/// User balance as reported by the protocol's own API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OffchainData {
    pub withdrawable: f64,
    /// Untouched backend response, kept for cross-checking the derived value.
    pub raw: serde_json::Value,
}

/// One token account of the vault authority, flattened for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenAccountEntry {
    pub address: String,
    pub mint: Option<String>,
    pub amount: Option<f64>,
    pub decimals: Option<u8>,
}

/// Per-source results; both keys are always present so consumers can rely on
/// the shape regardless of which sources failed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Sources {
    pub onchain_idle: SourceResult<OnchainIdleData>,
    pub offchain: SourceResult<OffchainData>,
}

/// Where the snapshot data came from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SnapshotMeta {
    pub adapter: String,
    pub rpc_url: String,
    pub api_base: String,
}

/// Optional deep-inspection payload, only populated on request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SnapshotDebug {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_accounts: Option<Vec<TokenAccountEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_accounts_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultIdentity {
    pub pubkey: String,
    pub lp_mint: String,
    pub idle_reserve_ata: String,
    pub reserve_mint: String,
}

impl From<&VaultConfig> for VaultIdentity {
    fn from(cfg: &VaultConfig) -> Self {
        Self {
            pubkey: cfg.vault_pubkey.clone(),
            lp_mint: cfg.lp_mint.clone(),
            idle_reserve_ata: cfg.idle_reserve_ata.clone(),
            reserve_mint: cfg.reserve_mint.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserIdentity {
    pub wallet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lp_token_account: Option<String>,
}

impl From<&UserConfig> for UserIdentity {
    fn from(cfg: &UserConfig) -> Self {
        Self {
            wallet: cfg.wallet.clone(),
            lp_token_account: cfg.lp_token_account.clone(),
        }
    }
}

/// Point-in-time view of one vault for one user, all sources combined.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Snapshot {
    /// Unix seconds at aggregation time.
    pub timestamp: i64,
    pub vault: VaultIdentity,
    pub user: UserIdentity,
    pub sources: Sources,
    pub meta: SnapshotMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<SnapshotDebug>,
}
