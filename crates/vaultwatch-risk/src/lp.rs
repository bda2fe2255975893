use crate::RiskMetrics;
use crate::verdict::{RiskLevel, RiskVerdict, VerdictMetrics};

/// Evaluates an LP position.
///
/// No thresholds are wired up yet; the model reports `ok` and echoes whatever
/// metrics it was given so dashboards can already chart them.
pub fn evaluate(metrics: &RiskMetrics) -> RiskVerdict {
    RiskVerdict {
        level: RiskLevel::Ok,
        code: "ok".to_string(),
        reasons: vec![],
        metrics: VerdictMetrics::Raw(metrics.clone()),
        conditions: None,
    }
}
