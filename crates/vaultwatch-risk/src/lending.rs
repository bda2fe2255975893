use crate::RiskMetrics;
use crate::verdict::{LendingConditions, RiskLevel, RiskVerdict, VerdictMetrics};

/// Available liquidity below 50x the position is a hard breach.
const HARD_LIMIT_MULTIPLIER: f64 = 50.0;
/// Below 200x it is only worth a warning.
const SOFT_LIMIT_MULTIPLIER: f64 = 200.0;

const HARD_UTILIZATION_PCT: f64 = 95.0;
const SOFT_UTILIZATION_PCT: f64 = 90.0;

/// Evaluates a lending market position.
///
/// Liquidity rules outrank utilization rules: utilization on its own can only
/// warn, but together with a hard liquidity breach it escalates past a plain
/// critical.
pub fn evaluate(metrics: &RiskMetrics) -> RiskVerdict {
    let utilization = metrics.utilization.unwrap_or(0.0);
    let available = metrics.available.unwrap_or(0.0);
    let balance_value = metrics.balance_value.unwrap_or(0.0);

    let conditions = LendingConditions {
        rule1_hard: available < balance_value * HARD_LIMIT_MULTIPLIER,
        rule2_soft: available < balance_value * SOFT_LIMIT_MULTIPLIER,
        rule3_hard: utilization > HARD_UTILIZATION_PCT,
        rule4_soft: utilization > SOFT_UTILIZATION_PCT,
    };

    let (level, code, reasons) = if conditions.rule1_hard && conditions.rule3_hard {
        (
            RiskLevel::HardCombined,
            "critical13",
            vec!["available < balance x50 and utilization >95%".to_string()],
        )
    } else if conditions.rule1_hard {
        (
            RiskLevel::Hard,
            "critical1",
            vec!["available < balance x50".to_string()],
        )
    } else if conditions.rule2_soft {
        (
            RiskLevel::Soft,
            "warning2",
            vec!["available < balance x200".to_string()],
        )
    } else if conditions.rule3_hard {
        (
            RiskLevel::Soft,
            "warning3",
            vec!["utilization >95%".to_string()],
        )
    } else if conditions.rule4_soft {
        (
            RiskLevel::Soft,
            "warning4",
            vec!["utilization >90%".to_string()],
        )
    } else {
        (RiskLevel::Ok, "ok", vec![])
    };

    RiskVerdict {
        level,
        code: code.to_string(),
        reasons,
        metrics: VerdictMetrics::Lending {
            utilization,
            available,
            balance_value,
        },
        conditions: Some(conditions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(utilization: f64, available: f64, balance_value: f64) -> RiskMetrics {
        RiskMetrics {
            utilization: Some(utilization),
            available: Some(available),
            balance_value: Some(balance_value),
            ..RiskMetrics::default()
        }
    }

    #[test]
    fn hard_liquidity_with_hard_utilization_escalates() {
        let verdict = evaluate(&metrics(96.0, 10.0, 1.0));

        assert_eq!(verdict.level, RiskLevel::HardCombined);
        assert_eq!(verdict.code, "critical13");
        assert_eq!(
            verdict.reasons,
            vec!["available < balance x50 and utilization >95%"]
        );
        let conditions = verdict.conditions.unwrap();
        assert!(conditions.rule1_hard);
        assert!(conditions.rule3_hard);
    }

    #[test]
    fn hard_liquidity_alone_is_critical() {
        let verdict = evaluate(&metrics(50.0, 10.0, 1.0));

        assert_eq!(verdict.level, RiskLevel::Hard);
        assert_eq!(verdict.code, "critical1");
        assert_eq!(verdict.reasons, vec!["available < balance x50"]);
    }

    #[test]
    fn soft_liquidity_warns() {
        let verdict = evaluate(&metrics(50.0, 100.0, 1.0));

        assert_eq!(verdict.level, RiskLevel::Soft);
        assert_eq!(verdict.code, "warning2");
        assert_eq!(verdict.reasons, vec!["available < balance x200"]);
    }

    #[test]
    fn hard_utilization_alone_only_warns() {
        let verdict = evaluate(&metrics(96.0, 1_000.0, 1.0));

        assert_eq!(verdict.level, RiskLevel::Soft);
        assert_eq!(verdict.code, "warning3");
        assert_eq!(verdict.reasons, vec!["utilization >95%"]);
        // The hard condition still shows in the per-rule flags.
        assert!(verdict.conditions.unwrap().rule3_hard);
    }

    #[test]
    fn soft_utilization_warns() {
        let verdict = evaluate(&metrics(91.0, 1_000.0, 1.0));

        assert_eq!(verdict.level, RiskLevel::Soft);
        assert_eq!(verdict.code, "warning4");
        assert_eq!(verdict.reasons, vec!["utilization >90%"]);
    }

    #[test]
    fn comfortable_position_is_ok() {
        let verdict = evaluate(&metrics(50.0, 300.0, 1.0));

        assert_eq!(verdict.level, RiskLevel::Ok);
        assert_eq!(verdict.code, "ok");
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn missing_metrics_evaluate_as_zero() {
        let verdict = evaluate(&RiskMetrics::default());

        assert_eq!(verdict.level, RiskLevel::Ok);
        assert_eq!(verdict.code, "ok");
    }

    #[test]
    fn verdict_echoes_the_lending_metrics() {
        let verdict = evaluate(&metrics(91.0, 1_000.0, 1.0));

        match verdict.metrics {
            VerdictMetrics::Lending {
                utilization,
                available,
                balance_value,
            } => {
                assert!((utilization - 91.0).abs() < f64::EPSILON);
                assert!((available - 1_000.0).abs() < f64::EPSILON);
                assert!((balance_value - 1.0).abs() < f64::EPSILON);
            }
            other => panic!("expected lending metrics, got {other:?}"),
        }
    }
}
