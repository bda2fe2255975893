use async_trait::async_trait;

use vaultwatch_types::Chain;

use crate::config::{UserConfig, VaultConfig};
use crate::dto::{OffchainData, OnchainIdleData, TokenAccountEntry};
use crate::error::MonitorError;

/// Protocol-specific reader behind the snapshot aggregator.
///
/// Adapters are read-only: they fetch and derive, they never sign or send.
#[async_trait]
pub trait VaultAdapter: Send + Sync + std::fmt::Debug {
    /// Registry key, also used in snapshot metadata.
    fn name(&self) -> &'static str;

    /// Chain the adapter reads from.
    fn chain(&self) -> Chain;

    /// Reads the vault's idle reserve and the user's LP position on-chain.
    async fn onchain_snapshot(
        &self,
        cfg: &VaultConfig,
        user_cfg: &UserConfig,
    ) -> Result<OnchainIdleData, MonitorError>;

    /// Asks the protocol's own API for the user's withdrawable balance.
    async fn offchain_snapshot(
        &self,
        cfg: &VaultConfig,
        user_cfg: &UserConfig,
    ) -> Result<OffchainData, MonitorError>;

    /// Lists the token accounts of the vault authority, for debugging.
    async fn list_token_accounts(
        &self,
        cfg: &VaultConfig,
    ) -> Result<Vec<TokenAccountEntry>, MonitorError>;
}
