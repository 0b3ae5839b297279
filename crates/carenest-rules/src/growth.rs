//! Wound growth rule

use carenest_records::{Alert, Severity};

use crate::base::{Rule, RuleContext};

/// Fires when the wound area increased over the series (a negative area
/// delta: latest area larger than the first).
pub struct AreaGrowthRule;

impl Rule for AreaGrowthRule {
    fn name(&self) -> &str {
        "area-growth"
    }

    fn description(&self) -> &str {
        "Flags a wound growing instead of shrinking"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Alert> {
        match ctx.trends.area_delta {
            Some(delta) if delta < 0.0 => vec![Alert {
                severity: Severity::Medium,
                message: "wound area increasing".to_string(),
                triggered_by: ctx.latest.id.clone(),
            }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctx, obs};
    use carenest_records::HealingStage;

    #[test]
    fn test_growing_wound_fires() {
        let series = vec![
            obs(1, 50, 8.0, 0.2, HealingStage::Inflammatory),
            obs(2, 48, 11.0, 0.2, HealingStage::Inflammatory),
        ];
        let (trends, latest) = ctx(&series);
        let alerts = AreaGrowthRule.evaluate(&RuleContext {
            latest,
            trends: &trends,
            series_len: series.len(),
        });
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.contains("increasing"));
    }

    #[test]
    fn test_shrinking_or_undefined_stays_quiet() {
        let shrinking = vec![
            obs(1, 50, 10.0, 0.2, HealingStage::Inflammatory),
            obs(2, 55, 8.0, 0.2, HealingStage::Proliferation),
        ];
        let (trends, latest) = ctx(&shrinking);
        assert!(AreaGrowthRule
            .evaluate(&RuleContext {
                latest,
                trends: &trends,
                series_len: shrinking.len(),
            })
            .is_empty());

        let single = vec![obs(1, 50, 10.0, 0.2, HealingStage::Inflammatory)];
        let (trends, latest) = ctx(&single);
        assert!(AreaGrowthRule
            .evaluate(&RuleContext {
                latest,
                trends: &trends,
                series_len: single.len(),
            })
            .is_empty());
    }
}
