//! Informational healthy-progress rule

use carenest_records::{Alert, RiskLevel, Severity};

use crate::base::{Rule, RuleContext};

/// Informational: fires when the healing score shows a sustained rise and
/// infection risk is low. Requires at least three observations (a single
/// rising pair is not yet a trend), so a fresh series never reports
/// "healthy progress" off one good reading.
pub struct HealthyProgressRule;

impl Rule for HealthyProgressRule {
    fn name(&self) -> &str {
        "healthy-progress"
    }

    fn description(&self) -> &str {
        "Notes sustained healthy progress"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Alert> {
        if ctx.trends.score_rising && ctx.latest.risk_level() == RiskLevel::Low {
            return vec![Alert {
                severity: Severity::Low,
                message: "healing score rising with low infection risk".to_string(),
                triggered_by: ctx.latest.id.clone(),
            }];
        }
        Vec::new()
    }
}
