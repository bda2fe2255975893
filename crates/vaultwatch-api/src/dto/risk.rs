use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vaultwatch_risk::RiskMetrics;

use crate::dto::snapshot::SnapshotRequest;

/// Metrics to evaluate, with an optional protocol family tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RiskRequest {
    /// Free-form tag such as `lending`, `lp` or `vault`; unknown tags run the
    /// vault model.
    #[serde(default)]
    pub protocol_type: Option<String>,
    #[serde(default)]
    pub metrics: RiskMetrics,
}

/// Snapshot request paired with the protocol family to judge it as.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummaryRequest {
    #[serde(flatten)]
    pub snapshot: SnapshotRequest,
    #[serde(default)]
    pub protocol_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_risk_request_parses() {
        let request: RiskRequest = serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(request.protocol_type.is_none());
        assert!(request.metrics.utilization.is_none());
    }

    #[test]
    fn summary_request_flattens_the_snapshot_fields() {
        let request: SummaryRequest = serde_json::from_value(serde_json::json!({
            "vault_pubkey": "v",
            "lp_mint": "m",
            "idle_reserve_ata": "a",
            "reserve_mint": "r",
            "wallet": "w",
            "protocol_type": "vault",
        }))
        .unwrap();

        assert_eq!(request.snapshot.vault_pubkey, "v");
        assert_eq!(request.protocol_type.as_deref(), Some("vault"));
    }
}
