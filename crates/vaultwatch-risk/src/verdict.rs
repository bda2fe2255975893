use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::RiskMetrics;

/// Severity of a verdict, ordered from benign to worst.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Ok,
    Soft,
    Hard,
    HardCombined,
}

impl RiskLevel {
    /// Whether the level should page someone.
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Hard | Self::HardCombined)
    }
}

/// Individual rule outcomes of the lending model, reported so callers can see
/// which thresholds fired even when a higher-priority rule decided the level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LendingConditions {
    pub rule1_hard: bool,
    pub rule2_soft: bool,
    pub rule3_hard: bool,
    pub rule4_soft: bool,
}

/// Metrics echoed back with the verdict, shaped per protocol family.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum VerdictMetrics {
    Lending {
        utilization: f64,
        available: f64,
        balance_value: f64,
    },
    Vault {
        idle_ratio: f64,
        deployment_rate: f64,
    },
    Raw(RiskMetrics),
}

/// Result of one risk evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskVerdict {
    pub level: RiskLevel,
    /// Stable machine-readable code, e.g. `critical1` or `warning4`.
    pub code: String,
    pub reasons: Vec<String>,
    pub metrics: VerdictMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<LendingConditions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_from_benign_to_worst() {
        assert!(RiskLevel::Ok < RiskLevel::Soft);
        assert!(RiskLevel::Soft < RiskLevel::Hard);
        assert!(RiskLevel::Hard < RiskLevel::HardCombined);
    }

    #[test]
    fn only_hard_levels_are_critical() {
        assert!(!RiskLevel::Ok.is_critical());
        assert!(!RiskLevel::Soft.is_critical());
        assert!(RiskLevel::Hard.is_critical());
        assert!(RiskLevel::HardCombined.is_critical());
    }

    #[test]
    fn levels_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::HardCombined).unwrap(),
            r#""hard_combined""#
        );
    }

    #[test]
    fn conditions_serialize_in_camel_case() {
        let json = serde_json::to_value(LendingConditions {
            rule1_hard: true,
            rule2_soft: false,
            rule3_hard: true,
            rule4_soft: false,
        })
        .unwrap();

        assert_eq!(json["rule1Hard"], true);
        assert_eq!(json["rule3Hard"], true);
        assert!(json.get("rule1_hard").is_none());
    }
}
