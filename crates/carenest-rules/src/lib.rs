//! Deterministic clinical alert rules over observation series

mod base;
mod growth;
mod infection;
mod progress;
mod registry;
mod regression;

pub use base::{Rule, RuleContext};
pub use growth::AreaGrowthRule;
pub use infection::InfectionRiskRule;
pub use progress::HealthyProgressRule;
pub use registry::RuleSet;
pub use regression::StageRegressionRule;

#[cfg(test)]
pub(crate) mod testutil {
    use carenest_records::{HealingStage, Measurements, Observation, WoundClass};
    use carenest_trend::TrendSummary;
    use chrono::{TimeZone, Utc};

    pub fn obs(day: u32, score: u8, area: f64, risk: f64, stage: HealingStage) -> Observation {
        Observation {
            id: format!("obs-{}", day),
            wound_id: "wound-1".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, day, 9, 0, 0).unwrap(),
            measurements: Measurements {
                area_cm2: area,
                perimeter_cm: 10.0,
                depth_mm: 2.0,
            },
            classification: WoundClass::Surgical,
            healing_stage: stage,
            healing_score: score,
            infection_risk: risk,
            indicators: None,
        }
    }

    pub fn ctx(series: &[Observation]) -> (TrendSummary, &Observation) {
        (
            TrendSummary::compute(series),
            series.last().expect("series must not be empty"),
        )
    }
}
