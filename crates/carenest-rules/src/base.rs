//! Base rule trait and evaluation context

use carenest_records::{Alert, Observation};
use carenest_trend::TrendSummary;

/// Everything a rule may inspect: the latest observation plus the derived
/// trend metrics for the whole series.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub latest: &'a Observation,
    pub trends: &'a TrendSummary,
    pub series_len: usize,
}

/// One clinical alert rule. Rules are pure: the same context always yields
/// the same alerts, so evaluation can be repeated at read time without a
/// stale-alert store.
pub trait Rule: Send + Sync {
    /// Rule name (unique identifier)
    fn name(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str {
        ""
    }

    /// Evaluate against the context. Several alerts may fire from one rule.
    fn evaluate(&self, ctx: &RuleContext) -> Vec<Alert>;
}
