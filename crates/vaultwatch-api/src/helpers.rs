use std::sync::Arc;

use vaultwatch_monitor::{AdapterRegistry, Snapshot, VaultAdapter};
use vaultwatch_risk::RiskMetrics;

use crate::errors::ApiError;

/// Looks up an adapter by name, listing the known ones when it misses.
pub fn resolve_adapter(
    registry: &AdapterRegistry,
    name: &str,
) -> Result<Arc<dyn VaultAdapter>, ApiError> {
    registry.get(name).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "Unknown adapter '{name}'. Available: {:?}",
            registry.names()
        ))
    })
}

/// Maps snapshot sources onto the shared risk metric bag.
///
/// On-chain data drives the vault-family metrics. The off-chain balance, when
/// present, replaces the on-chain withdrawable estimate since the protocol
/// backend also prices deployed positions.
pub fn extract_risk_metrics(snapshot: &Snapshot) -> RiskMetrics {
    let mut metrics = RiskMetrics::default();

    if let Some(data) = &snapshot.sources.onchain_idle.data {
        let deployment_rate = 1.0 - data.idle_ratio;
        metrics.idle_ratio = Some(data.idle_ratio);
        metrics.deployment_rate = Some(deployment_rate);
        metrics.utilization = Some(deployment_rate * 100.0);
        metrics.available = Some(data.vault_nav_idle);
        metrics.balance_value = Some(data.withdrawable_idle);
    }

    if let Some(data) = &snapshot.sources.offchain.data {
        metrics.balance_value = Some(data.withdrawable);
    }

    metrics
}
