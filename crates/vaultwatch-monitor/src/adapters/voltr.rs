use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use vaultwatch_chain::{Encoding, KeyedAccount, SolanaRpcClient};
use vaultwatch_types::Chain;

use crate::config::{UserConfig, VaultConfig};
use crate::dto::{OffchainData, OnchainIdleData, TokenAccountEntry};
use crate::error::MonitorError;
use crate::traits::VaultAdapter;

const API_TIMEOUT: Duration = Duration::from_secs(10);

/// The vault reserve is USDC; the balance endpoint reports base units.
const RESERVE_DECIMALS: i32 = 6;

/// Read-only adapter for Voltr vaults on Solana.
#[derive(Debug)]
pub struct VoltrAdapter {
    http_client: Client,
}

impl VoltrAdapter {
    pub const fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    fn rpc(&self, cfg: &VaultConfig) -> SolanaRpcClient {
        SolanaRpcClient::new(self.http_client.clone(), &cfg.rpc_url)
    }

    async fn fetch_user_balance(
        &self,
        cfg: &VaultConfig,
        user_cfg: &UserConfig,
    ) -> Result<Value, MonitorError> {
        let url = format!(
            "{}/vault/{}/user/{}/balance",
            cfg.api_base, cfg.vault_pubkey, user_cfg.wallet
        );
        tracing::debug!(url = %url, "fetching Voltr user balance");

        let response = self
            .http_client
            .get(&url)
            .timeout(API_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl VaultAdapter for VoltrAdapter {
    fn name(&self) -> &'static str {
        "voltr"
    }

    fn chain(&self) -> Chain {
        Chain::Sol
    }

    async fn onchain_snapshot(
        &self,
        cfg: &VaultConfig,
        user_cfg: &UserConfig,
    ) -> Result<OnchainIdleData, MonitorError> {
        let lp_account = user_cfg.lp_token_account.as_ref().ok_or_else(|| {
            MonitorError::Config(format!(
                "no LP token account configured for wallet {}",
                user_cfg.wallet
            ))
        })?;

        let rpc = self.rpc(cfg);
        let vault_nav_idle = rpc.get_token_balance(&cfg.idle_reserve_ata).await?;
        let lp_supply = rpc.get_token_supply(&cfg.lp_mint).await?;
        let user_lp = rpc.get_token_balance(lp_account).await?;

        Ok(derive_idle_metrics(vault_nav_idle, lp_supply, user_lp))
    }

    async fn offchain_snapshot(
        &self,
        cfg: &VaultConfig,
        user_cfg: &UserConfig,
    ) -> Result<OffchainData, MonitorError> {
        let raw = self.fetch_user_balance(cfg, user_cfg).await?;
        let withdrawable = parse_user_balance(&raw)?;

        Ok(OffchainData { withdrawable, raw })
    }

    async fn list_token_accounts(
        &self,
        cfg: &VaultConfig,
    ) -> Result<Vec<TokenAccountEntry>, MonitorError> {
        let rpc = self.rpc(cfg);

        // The reserve ATA's owner is the vault authority; every vault holding
        // hangs off that same owner.
        let reserve = rpc
            .get_account_info(&cfg.idle_reserve_ata, Encoding::JsonParsed)
            .await?
            .ok_or_else(|| {
                MonitorError::Rpc(format!(
                    "idle reserve account {} not found",
                    cfg.idle_reserve_ata
                ))
            })?;
        let authority = reserve
            .parsed_token_info()
            .and_then(|info| info.owner)
            .ok_or_else(|| {
                MonitorError::Rpc(format!(
                    "idle reserve account {} has no parsed owner",
                    cfg.idle_reserve_ata
                ))
            })?;

        let accounts = rpc.get_token_accounts_by_owner(&authority).await?;
        Ok(accounts.iter().map(normalize_token_account).collect())
    }
}

/// Derives per-LP pricing from the three raw reads.
///
/// A vault with zero LP supply prices at zero rather than dividing by it.
fn derive_idle_metrics(vault_nav_idle: f64, lp_supply: f64, user_lp: f64) -> OnchainIdleData {
    let (lp_price_idle, share_idle) = if lp_supply > 0.0 {
        (vault_nav_idle / lp_supply, user_lp / lp_supply)
    } else {
        (0.0, 0.0)
    };
    let withdrawable_idle = user_lp * lp_price_idle;

    OnchainIdleData {
        vault_nav_idle,
        lp_supply,
        user_lp,
        lp_price_idle,
        share_idle,
        withdrawable_idle,
        // The only NAV visible to this reader is the idle reserve itself, so
        // the total here equals the idle amount until deployed positions are
        // read as well.
        idle_ratio: idle_fraction(vault_nav_idle, vault_nav_idle),
    }
}

/// Idle share of the total NAV, zero when there is no NAV at all.
fn idle_fraction(idle: f64, nav_total: f64) -> f64 {
    if nav_total > 0.0 { idle / nav_total } else { 0.0 }
}

/// Pulls `data.userAssetAmount` out of a balance response, converting from
/// base units to a UI amount.
fn parse_user_balance(raw: &Value) -> Result<f64, MonitorError> {
    let success = raw
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !success {
        return Err(MonitorError::Api {
            api: "Voltr",
            body: raw.to_string(),
        });
    }

    let base_units = raw
        .pointer("/data/userAssetAmount")
        .and_then(Value::as_f64)
        .ok_or_else(|| MonitorError::Api {
            api: "Voltr",
            body: raw.to_string(),
        })?;

    Ok(base_units / 10f64.powi(RESERVE_DECIMALS))
}

fn normalize_token_account(account: &KeyedAccount) -> TokenAccountEntry {
    let (mint, token_amount) = account
        .account
        .parsed_token_info()
        .map_or((None, None), |info| (info.mint, info.token_amount));

    TokenAccountEntry {
        address: account.pubkey.clone(),
        mint,
        amount: token_amount.as_ref().and_then(|a| a.ui_amount),
        decimals: token_amount.as_ref().map(|a| a.decimals),
    }
}
