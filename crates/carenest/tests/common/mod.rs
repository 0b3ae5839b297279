/// Build a raw analysis payload like an external analysis provider would
pub fn payload(ts: &str, score: u8, area: f64, risk: f64, stage: &str) -> serde_json::Value {
    serde_json::json!({
        "timestamp": ts,
        "measurements": {"area": area, "perimeter": 12.0, "depth": 3.0},
        "classification": "surgical",
        "healingStage": stage,
        "healingScore": score,
        "infectionRisk": risk
    })
}
