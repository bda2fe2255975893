pub mod lending;
pub mod lp;
pub mod vault;
pub mod verdict;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vaultwatch_types::ProtocolKind;

pub use verdict::{LendingConditions, RiskLevel, RiskVerdict, VerdictMetrics};

/// Metric bag shared by all models; each model reads the fields it knows and
/// treats missing ones as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RiskMetrics {
    /// Percent of the market's liquidity that is lent out, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization: Option<f64>,
    /// Liquidity still available for withdrawal, in reserve tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<f64>,
    /// Value of the monitored position, in reserve tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_value: Option<f64>,
    /// Idle share of the vault NAV, 0-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_ratio: Option<f64>,
    /// Deployed share of the vault NAV, 0-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_rate: Option<f64>,
}

/// Runs the model matching the protocol family.
pub fn evaluate(protocol: ProtocolKind, metrics: &RiskMetrics) -> RiskVerdict {
    match protocol {
        ProtocolKind::Lending => lending::evaluate(metrics),
        ProtocolKind::Lp => lp::evaluate(metrics),
        ProtocolKind::Vault => vault::evaluate(metrics),
    }
}

/// Same as [`evaluate`], resolving a free-form protocol tag first.
///
/// Unknown tags fall back to the vault model.
pub fn evaluate_tag(protocol_tag: &str, metrics: &RiskMetrics) -> RiskVerdict {
    evaluate(ProtocolKind::from_tag(protocol_tag), metrics)
}
