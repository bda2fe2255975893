use async_trait::async_trait;

use vaultwatch_types::Chain;

use crate::config::{UserConfig, VaultConfig};
use crate::dto::{OffchainData, OnchainIdleData, TokenAccountEntry};
use crate::error::MonitorError;
use crate::traits::VaultAdapter;

/// Placeholder for Drift vaults; registered so callers get a clear error
/// instead of an unknown-adapter one.
#[derive(Debug)]
pub struct DriftVaultAdapter;

#[async_trait]
impl VaultAdapter for DriftVaultAdapter {
    fn name(&self) -> &'static str {
        "drift_vault"
    }

    fn chain(&self) -> Chain {
        Chain::Sol
    }

    async fn onchain_snapshot(
        &self,
        _cfg: &VaultConfig,
        _user_cfg: &UserConfig,
    ) -> Result<OnchainIdleData, MonitorError> {
        Err(MonitorError::NotImplemented(self.name()))
    }

    async fn offchain_snapshot(
        &self,
        _cfg: &VaultConfig,
        _user_cfg: &UserConfig,
    ) -> Result<OffchainData, MonitorError> {
        Err(MonitorError::NotImplemented(self.name()))
    }

    async fn list_token_accounts(
        &self,
        _cfg: &VaultConfig,
    ) -> Result<Vec<TokenAccountEntry>, MonitorError> {
        Err(MonitorError::NotImplemented(self.name()))
    }
}
