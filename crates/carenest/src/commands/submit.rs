use std::io::Read;

use carenest_records::Severity;

pub fn run(wound: &str, file: Option<&str>) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let tracker = super::open_tracker()?;
    let observation = tracker.submit_analysis(wound, &payload)?;

    println!(
        "Recorded {} for wound {} (score {}, risk {:?})",
        observation.id,
        observation.wound_id,
        observation.healing_score,
        observation.risk_level()
    );

    let alerts = tracker.alerts(wound);
    if alerts.is_empty() {
        println!("No active alerts.");
    } else {
        println!("Active alerts:");
        for alert in alerts {
            println!("  [{}] {}", severity_tag(alert.severity), alert.message);
        }
    }
    Ok(())
}

pub(crate) fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "LOW",
        Severity::Medium => "MEDIUM",
        Severity::High => "HIGH",
    }
}
