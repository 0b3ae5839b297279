//! Healing stage regression rule

use carenest_records::{Alert, Severity};

use crate::base::{Rule, RuleContext};

/// Fires when the healing stage moved backwards between the last two
/// observations (e.g. proliferation back to inflammatory).
pub struct StageRegressionRule;

impl Rule for StageRegressionRule {
    fn name(&self) -> &str {
        "stage-regression"
    }

    fn description(&self) -> &str {
        "Flags a healing stage moving backwards"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Alert> {
        if ctx.trends.stage_progressed == Some(false) {
            return vec![Alert {
                severity: Severity::Medium,
                message: "healing stage regressed, flag for review".to_string(),
                triggered_by: ctx.latest.id.clone(),
            }];
        }
        Vec::new()
    }
}
