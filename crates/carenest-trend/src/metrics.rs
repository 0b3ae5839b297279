//! Derived time-series metrics over an observation series
//!
//! All functions are pure and total: an empty or single-entry series is an
//! expected state, reported as `None` rather than an error. Input slices are
//! assumed sorted ascending by timestamp (the store's invariant).

use serde::{Deserialize, Serialize};

use carenest_records::Observation;

/// Absolute infection-risk change below this is treated as measurement noise
const RISK_NOISE_THRESHOLD: f64 = 0.05;

/// Observations needed before a score rise counts as a sustained trend
const SUSTAINED_RISE_WINDOW: usize = 3;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Direction of the infection-risk series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTrend {
    #[serde(rename = "improving")]
    Improving,
    #[serde(rename = "worsening")]
    Worsening,
    #[serde(rename = "unchanged")]
    Unchanged,
}

/// Healing-score slope between the two most recent observations, in
/// score-points per day. `None` when fewer than two observations exist or
/// the pair shares a timestamp (undefined slope, not zero).
pub fn healing_velocity(series: &[Observation]) -> Option<f64> {
    let [prev, last] = last_two(series)?;
    let elapsed_days =
        (last.timestamp - prev.timestamp).num_seconds() as f64 / SECONDS_PER_DAY;
    if elapsed_days <= 0.0 {
        return None;
    }
    let delta = last.healing_score as f64 - prev.healing_score as f64;
    Some(delta / elapsed_days)
}

/// First area minus latest area. Positive means the wound is shrinking,
/// the desired direction. `None` when fewer than two observations exist.
pub fn area_delta(series: &[Observation]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = series.first()?;
    let last = series.last()?;
    Some(first.measurements.area_cm2 - last.measurements.area_cm2)
}

/// Compare the infection risk of the last two observations against the
/// noise threshold.
pub fn risk_trend(series: &[Observation]) -> Option<RiskTrend> {
    let [prev, last] = last_two(series)?;
    let delta = last.infection_risk - prev.infection_risk;
    if delta.abs() < RISK_NOISE_THRESHOLD {
        Some(RiskTrend::Unchanged)
    } else if delta > 0.0 {
        Some(RiskTrend::Worsening)
    } else {
        Some(RiskTrend::Improving)
    }
}

/// True when the latest healing stage is at or past the previous one.
/// `Some(false)` marks a stage regression, an anomaly the alert evaluator
/// flags for review.
pub fn stage_progressed(series: &[Observation]) -> Option<bool> {
    let [prev, last] = last_two(series)?;
    Some(last.healing_stage.ordinal() >= prev.healing_stage.ordinal())
}

/// Sustained healing-score rise: at least [`SUSTAINED_RISE_WINDOW`]
/// observations with both of the last two consecutive deltas positive. A
/// single rising pair is not yet a trend.
pub fn score_rising(series: &[Observation]) -> bool {
    if series.len() < SUSTAINED_RISE_WINDOW {
        return false;
    }
    let tail = &series[series.len() - SUSTAINED_RISE_WINDOW..];
    tail.windows(2)
        .all(|w| w[1].healing_score > w[0].healing_score)
}

/// All derived metrics for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub healing_velocity: Option<f64>,
    pub area_delta: Option<f64>,
    pub risk_trend: Option<RiskTrend>,
    pub stage_progressed: Option<bool>,
    pub score_rising: bool,
}

impl TrendSummary {
    pub fn compute(series: &[Observation]) -> Self {
        Self {
            healing_velocity: healing_velocity(series),
            area_delta: area_delta(series),
            risk_trend: risk_trend(series),
            stage_progressed: stage_progressed(series),
            score_rising: score_rising(series),
        }
    }
}

fn last_two(series: &[Observation]) -> Option<[&Observation; 2]> {
    if series.len() < 2 {
        return None;
    }
    Some([&series[series.len() - 2], &series[series.len() - 1]])
}
