//! Trend metrics derived from wound observation series

mod metrics;

pub use metrics::{
    area_delta, healing_velocity, risk_trend, score_rising, stage_progressed, RiskTrend,
    TrendSummary,
};
