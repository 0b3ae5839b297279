//! Infection risk rule: elevated level and worsening trend

use carenest_records::{Alert, RiskLevel, Severity};
use carenest_trend::RiskTrend;

use crate::base::{Rule, RuleContext};

/// Fires on a high infection-risk level, and on a worsening risk trend when
/// the level is already past low. Both checks can fire together. The level
/// check needs only the latest observation, so it is the one rule that can
/// fire on a single-entry series.
pub struct InfectionRiskRule;

impl Rule for InfectionRiskRule {
    fn name(&self) -> &str {
        "infection-risk"
    }

    fn description(&self) -> &str {
        "Flags elevated or rising infection risk"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Alert> {
        let mut alerts = Vec::new();
        let level = ctx.latest.risk_level();

        if level == RiskLevel::High {
            alerts.push(Alert {
                severity: Severity::High,
                message: "infection risk elevated, recommend clinical review".to_string(),
                triggered_by: ctx.latest.id.clone(),
            });
        }

        if ctx.trends.risk_trend == Some(RiskTrend::Worsening) && level != RiskLevel::Low {
            alerts.push(Alert {
                severity: Severity::Medium,
                message: "infection risk trending upward".to_string(),
                triggered_by: ctx.latest.id.clone(),
            });
        }

        alerts
    }
}
