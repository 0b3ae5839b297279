//! Record types for wound observations, alerts, and patient logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wound classification (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WoundClass {
    #[serde(rename = "surgical")]
    Surgical,
    #[serde(rename = "diabetic_ulcer")]
    DiabeticUlcer,
    #[serde(rename = "pressure_ulcer")]
    PressureUlcer,
    #[serde(rename = "trauma")]
    Trauma,
}

impl WoundClass {
    /// Parse the wire-format name, `None` for anything outside the closed set
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "surgical" => Some(WoundClass::Surgical),
            "diabetic_ulcer" => Some(WoundClass::DiabeticUlcer),
            "pressure_ulcer" => Some(WoundClass::PressureUlcer),
            "trauma" => Some(WoundClass::Trauma),
            _ => None,
        }
    }
}

/// Clinical healing phase. Ordering matters: a later phase means progress,
/// moving backwards is a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealingStage {
    #[serde(rename = "hemostasis")]
    Hemostasis,
    #[serde(rename = "inflammatory")]
    Inflammatory,
    #[serde(rename = "proliferation")]
    Proliferation,
    #[serde(rename = "remodelling")]
    Remodelling,
}

impl HealingStage {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hemostasis" => Some(HealingStage::Hemostasis),
            "inflammatory" => Some(HealingStage::Inflammatory),
            "proliferation" => Some(HealingStage::Proliferation),
            "remodelling" => Some(HealingStage::Remodelling),
            _ => None,
        }
    }

    /// Position in the healing sequence (hemostasis = 0)
    pub fn ordinal(&self) -> u8 {
        match self {
            HealingStage::Hemostasis => 0,
            HealingStage::Inflammatory => 1,
            HealingStage::Proliferation => 2,
            HealingStage::Remodelling => 3,
        }
    }
}

/// Bucketed view of the continuous infection risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 0.33 {
            RiskLevel::Low
        } else if score < 0.66 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Physical wound measurements from one assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub area_cm2: f64,
    pub perimeter_cm: f64,
    pub depth_mm: f64,
}

/// One assessment of a wound at a point in time. Immutable once created;
/// corrections are recorded as new observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: String,
    pub wound_id: String,
    pub timestamp: DateTime<Utc>,
    pub measurements: Measurements,
    pub classification: WoundClass,
    pub healing_stage: HealingStage,
    pub healing_score: u8,
    pub infection_risk: f64,
    /// Opaque per-indicator breakdown from the analysis provider, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<serde_json::Value>,
}

impl Observation {
    /// Check the hard data-model invariants. Ranges are constraints, not
    /// estimates, so violations are errors rather than clamp targets.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::new("id", "must not be empty"));
        }
        if self.wound_id.is_empty() {
            return Err(ValidationError::new("woundId", "must not be empty"));
        }
        for (field, value) in [
            ("measurements.area", self.measurements.area_cm2),
            ("measurements.perimeter", self.measurements.perimeter_cm),
            ("measurements.depth", self.measurements.depth_mm),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::new(
                    field,
                    "must be a non-negative finite number",
                ));
            }
        }
        if self.healing_score > 100 {
            return Err(ValidationError::new("healingScore", "must be in 0..=100"));
        }
        if !self.infection_risk.is_finite() || !(0.0..=1.0).contains(&self.infection_risk) {
            return Err(ValidationError::new("infectionRisk", "must be in 0.0..=1.0"));
        }
        Ok(())
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.infection_risk)
    }
}

/// Alert severity, shared by the rule evaluator and free-text triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

/// A derived clinical alert. Never persisted: recomputed from the series
/// that produced it, so there is no stale-alert state to maintain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    /// Id of the observation that triggered the rule
    pub triggered_by: String,
}

/// Patient log categories recognised by the free-text parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    #[serde(rename = "pain")]
    Pain,
    #[serde(rename = "medication")]
    Medication,
    #[serde(rename = "mobility")]
    Mobility,
    #[serde(rename = "mood")]
    Mood,
    #[serde(rename = "symptom")]
    Symptom,
    #[serde(rename = "wound")]
    Wound,
}

/// One parsed patient log item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub category: LogCategory,
    pub value: String,
}
