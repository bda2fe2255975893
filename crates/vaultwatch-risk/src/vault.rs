use crate::RiskMetrics;
use crate::verdict::{RiskLevel, RiskVerdict, VerdictMetrics};

const HARD_IDLE_RATIO: f64 = 0.05;
const SOFT_IDLE_RATIO: f64 = 0.20;
const HARD_DEPLOYMENT_RATE: f64 = 0.95;
const SOFT_DEPLOYMENT_RATE: f64 = 0.80;

/// Evaluates a vault position on how much of its NAV stays withdrawable.
///
/// A vault that deploys nearly everything leaves depositors queueing behind
/// strategy unwinds, so low idle ratio and high deployment rate are the same
/// risk seen from two sides.
pub fn evaluate(metrics: &RiskMetrics) -> RiskVerdict {
    let idle_ratio = metrics.idle_ratio.unwrap_or(0.0);
    let deployment_rate = metrics.deployment_rate.unwrap_or(0.0);

    let (level, code, reasons) = if idle_ratio < HARD_IDLE_RATIO
        || deployment_rate > HARD_DEPLOYMENT_RATE
    {
        (
            RiskLevel::Hard,
            "hard",
            vec![format!(
                "idle_ratio only {:.2}% / deployment_rate {:.2}%",
                idle_ratio * 100.0,
                deployment_rate * 100.0
            )],
        )
    } else if idle_ratio < SOFT_IDLE_RATIO || deployment_rate > SOFT_DEPLOYMENT_RATE {
        (
            RiskLevel::Soft,
            "soft",
            vec![format!(
                "idle_ratio low {:.2}% / deployment_rate {:.2}%",
                idle_ratio * 100.0,
                deployment_rate * 100.0
            )],
        )
    } else {
        (RiskLevel::Ok, "ok", vec![])
    };

    RiskVerdict {
        level,
        code: code.to_string(),
        reasons,
        metrics: VerdictMetrics::Vault {
            idle_ratio,
            deployment_rate,
        },
        conditions: None,
    }
}
