//! Converts untrusted analysis payloads into validated observations

use chrono::{DateTime, TimeZone, Utc};
use std::hash::{DefaultHasher, Hash, Hasher};

use carenest_records::{
    HealingStage, Measurements, Observation, ValidationError, WoundClass,
};

/// Normalize a raw analysis payload into a canonical [`Observation`].
///
/// Pure and deterministic: no I/O, no randomness. Required fields are
/// `timestamp`, `measurements` (`area`/`perimeter`/`depth`),
/// `classification`, `healingStage`, `healingScore`, `infectionRisk`.
/// Declared ranges are hard constraints; nothing is clamped, so upstream
/// analysis errors surface instead of being masked.
pub fn normalize(
    wound_id: &str,
    payload: &serde_json::Value,
) -> Result<Observation, ValidationError> {
    if wound_id.is_empty() {
        return Err(ValidationError::new("woundId", "must not be empty"));
    }

    let timestamp = parse_timestamp(payload)?;

    let measurements_value = payload
        .get("measurements")
        .ok_or_else(|| ValidationError::missing("measurements"))?;
    let measurements = Measurements {
        area_cm2: require_number(measurements_value, "area", "measurements.area")?,
        perimeter_cm: require_number(measurements_value, "perimeter", "measurements.perimeter")?,
        depth_mm: require_number(measurements_value, "depth", "measurements.depth")?,
    };

    let classification_str = require_str(payload, "classification")?;
    let classification = WoundClass::parse(classification_str).ok_or_else(|| {
        ValidationError::new(
            "classification",
            format!("unknown classification `{}`", classification_str),
        )
    })?;

    let stage_str = require_str(payload, "healingStage")?;
    let healing_stage = HealingStage::parse(stage_str).ok_or_else(|| {
        ValidationError::new("healingStage", format!("unknown stage `{}`", stage_str))
    })?;

    let healing_score = payload
        .get("healingScore")
        .ok_or_else(|| ValidationError::missing("healingScore"))?
        .as_u64()
        .ok_or_else(|| ValidationError::new("healingScore", "must be a non-negative integer"))?;
    if healing_score > 100 {
        return Err(ValidationError::new("healingScore", "must be in 0..=100"));
    }

    let infection_risk = payload
        .get("infectionRisk")
        .ok_or_else(|| ValidationError::missing("infectionRisk"))?
        .as_f64()
        .ok_or_else(|| ValidationError::new("infectionRisk", "must be a number"))?;

    let id = match payload.get("id").and_then(|v| v.as_str()) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => derive_id(wound_id, timestamp, payload),
    };

    let observation = Observation {
        id,
        wound_id: wound_id.to_string(),
        timestamp,
        measurements,
        classification,
        healing_stage,
        healing_score: healing_score as u8,
        infection_risk,
        indicators: payload.get("indicators").cloned(),
    };

    observation.validate()?;
    Ok(observation)
}

fn parse_timestamp(payload: &serde_json::Value) -> Result<DateTime<Utc>, ValidationError> {
    let value = payload
        .get("timestamp")
        .ok_or_else(|| ValidationError::missing("timestamp"))?;

    if let Some(s) = value.as_str() {
        return DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ValidationError::new("timestamp", "must be an RFC 3339 datetime"));
    }

    // Numeric timestamps are epoch seconds
    if let Some(secs) = value.as_i64() {
        return Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| ValidationError::new("timestamp", "epoch seconds out of range"));
    }
    if let Some(secs) = value.as_f64() {
        let millis = (secs * 1000.0) as i64;
        return Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| ValidationError::new("timestamp", "epoch seconds out of range"));
    }

    Err(ValidationError::new(
        "timestamp",
        "must be an RFC 3339 string or epoch seconds",
    ))
}

fn require_number(
    container: &serde_json::Value,
    key: &str,
    field: &str,
) -> Result<f64, ValidationError> {
    container
        .get(key)
        .ok_or_else(|| ValidationError::missing(field))?
        .as_f64()
        .ok_or_else(|| ValidationError::new(field, "must be a number"))
}

fn require_str<'a>(
    payload: &'a serde_json::Value,
    field: &str,
) -> Result<&'a str, ValidationError> {
    payload
        .get(field)
        .ok_or_else(|| ValidationError::missing(field))?
        .as_str()
        .ok_or_else(|| ValidationError::new(field, "must be a string"))
}

/// Derive a stable observation id when the payload carries none. Equal
/// payloads normalize identically; the content hash breaks ties between
/// distinct payloads sharing a timestamp.
fn derive_id(wound_id: &str, timestamp: DateTime<Utc>, payload: &serde_json::Value) -> String {
    let mut hasher = DefaultHasher::new();
    wound_id.hash(&mut hasher);
    payload.to_string().hash(&mut hasher);
    format!(
        "{}-{}-{:08x}",
        wound_id,
        timestamp.timestamp_millis(),
        hasher.finish() as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use carenest_records::RiskLevel;

    fn sample_payload() -> serde_json::Value {
        serde_json::json!({
            "timestamp": "2025-06-01T09:00:00Z",
            "measurements": {"area": 10.0, "perimeter": 12.5, "depth": 3.0},
            "classification": "surgical",
            "healingStage": "inflammatory",
            "healingScore": 50,
            "infectionRisk": 0.2
        })
    }

    #[test]
    fn test_normalize_valid_payload() {
        let obs = normalize("wound-1", &sample_payload()).unwrap();
        assert_eq!(obs.wound_id, "wound-1");
        assert_eq!(obs.healing_score, 50);
        assert_eq!(obs.healing_stage, HealingStage::Inflammatory);
        assert_eq!(obs.measurements.area_cm2, 10.0);
        assert_eq!(obs.risk_level(), RiskLevel::Low);
        assert!(!obs.id.is_empty());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let a = normalize("wound-1", &sample_payload()).unwrap();
        let b = normalize("wound-1", &sample_payload()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_keeps_payload_id() {
        let mut payload = sample_payload();
        payload["id"] = serde_json::json!("obs-42");
        let obs = normalize("wound-1", &payload).unwrap();
        assert_eq!(obs.id, "obs-42");
    }

    #[test]
    fn test_missing_required_fields_name_the_field() {
        for field in [
            "timestamp",
            "measurements",
            "classification",
            "healingStage",
            "healingScore",
            "infectionRisk",
        ] {
            let mut payload = sample_payload();
            payload.as_object_mut().unwrap().remove(field);
            let err = normalize("wound-1", &payload).unwrap_err();
            assert_eq!(err.field, field, "expected error naming {}", field);
        }
    }

    #[test]
    fn test_missing_measurement_subfield() {
        let mut payload = sample_payload();
        payload["measurements"].as_object_mut().unwrap().remove("depth");
        let err = normalize("wound-1", &payload).unwrap_err();
        assert_eq!(err.field, "measurements.depth");
    }

    #[test]
    fn test_unknown_classification_rejected() {
        let mut payload = sample_payload();
        payload["classification"] = serde_json::json!("burn");
        let err = normalize("wound-1", &payload).unwrap_err();
        assert_eq!(err.field, "classification");
        assert!(err.reason.contains("burn"));
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let mut payload = sample_payload();
        payload["healingStage"] = serde_json::json!("granulation");
        let err = normalize("wound-1", &payload).unwrap_err();
        assert_eq!(err.field, "healingStage");
    }

    #[test]
    fn test_out_of_range_values_not_clamped() {
        let mut payload = sample_payload();
        payload["healingScore"] = serde_json::json!(150);
        assert_eq!(normalize("w", &payload).unwrap_err().field, "healingScore");

        let mut payload = sample_payload();
        payload["infectionRisk"] = serde_json::json!(1.5);
        assert_eq!(normalize("w", &payload).unwrap_err().field, "infectionRisk");

        let mut payload = sample_payload();
        payload["measurements"]["area"] = serde_json::json!(-2.0);
        assert_eq!(
            normalize("w", &payload).unwrap_err().field,
            "measurements.area"
        );
    }

    #[test]
    fn test_epoch_timestamp_accepted() {
        let mut payload = sample_payload();
        payload["timestamp"] = serde_json::json!(1748768400);
        let obs = normalize("wound-1", &payload).unwrap();
        assert_eq!(obs.timestamp.timestamp(), 1748768400);
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let mut payload = sample_payload();
        payload["timestamp"] = serde_json::json!("yesterday");
        assert_eq!(normalize("w", &payload).unwrap_err().field, "timestamp");
    }

    #[test]
    fn test_indicators_carried_through() {
        let mut payload = sample_payload();
        payload["indicators"] = serde_json::json!({"rubor": 0.1, "exudate": 0.4});
        let obs = normalize("wound-1", &payload).unwrap();
        assert_eq!(
            obs.indicators.unwrap()["exudate"],
            serde_json::json!(0.4)
        );
    }

    #[test]
    fn test_empty_wound_id_rejected() {
        let err = normalize("", &sample_payload()).unwrap_err();
        assert_eq!(err.field, "woundId");
    }
}
