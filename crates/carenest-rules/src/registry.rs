//! Rule set: ordered evaluation of clinical alert rules

use carenest_records::{Alert, Observation};
use carenest_trend::TrendSummary;

use crate::base::{Rule, RuleContext};
use crate::growth::AreaGrowthRule;
use crate::infection::InfectionRiskRule;
use crate::progress::HealthyProgressRule;
use crate::regression::StageRegressionRule;

/// Ordered collection of rules. Every matching rule fires — there is no
/// short-circuit — and evaluation is idempotent: the same series always
/// yields the same alerts in the same order.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in clinical rule table, in evaluation order
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.register(Box::new(InfectionRiskRule));
        set.register(Box::new(StageRegressionRule));
        set.register(Box::new(AreaGrowthRule));
        set.register(Box::new(HealthyProgressRule));
        set
    }

    /// Register a rule at the end of the evaluation order
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Evaluate all rules against a series (sorted ascending by timestamp).
    /// An empty series yields no alerts: there is nothing to evaluate.
    pub fn evaluate(&self, series: &[Observation]) -> Vec<Alert> {
        let Some(latest) = series.last() else {
            return Vec::new();
        };
        let trends = TrendSummary::compute(series);
        let ctx = RuleContext {
            latest,
            trends: &trends,
            series_len: series.len(),
        };

        self.rules
            .iter()
            .flat_map(|rule| rule.evaluate(&ctx))
            .collect()
    }

    /// Rule names in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}
