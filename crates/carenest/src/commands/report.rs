use carenest_core::Tracker;
use carenest_records::{read_jsonl, LogCategory, LogEntry, Paths};

pub fn run() -> anyhow::Result<()> {
    let tracker = super::open_tracker()?;
    let paths = Paths::new()?;
    let entries: Vec<LogEntry> = read_jsonl(&paths.logbook_file())?;
    println!("{}", build_report(&tracker, &entries));
    Ok(())
}

fn build_report(tracker: &Tracker, entries: &[LogEntry]) -> String {
    let mut sections = Vec::new();

    // Section 1: Wound summary
    let wound_ids = tracker.store().wound_ids();
    if wound_ids.is_empty() {
        sections.push("Recovery Report\n===============\nNo observations recorded yet.".to_string());
    } else {
        let mut lines = vec![format!(
            "Recovery Report\n===============\nTracked wounds: {}",
            wound_ids.len()
        )];
        for wound_id in &wound_ids {
            let series = tracker.series(wound_id);
            let trends = tracker.trends(wound_id);
            let alerts = tracker.alerts(wound_id);
            let latest = series.last();
            lines.push(format!(
                "  {} — {} observations, latest score {}, velocity {}, alerts: {}",
                wound_id,
                series.len(),
                latest.map(|o| o.healing_score.to_string()).unwrap_or_else(|| "-".to_string()),
                trends
                    .healing_velocity
                    .map(|v| format!("{:+.1}/day", v))
                    .unwrap_or_else(|| "undefined".to_string()),
                alerts.len()
            ));
        }
        sections.push(lines.join("\n"));
    }

    // Section 2: Patient logs
    let pains: Vec<&LogEntry> = by_category(entries, LogCategory::Pain);
    let mut lines = vec!["\nPatient Logs\n------------".to_string()];
    lines.push(match pains.last() {
        Some(last) => format!("Pain: {} entries, last {}", pains.len(), last.value),
        None => "Pain: no entries yet".to_string(),
    });
    lines.push(format!(
        "Medication: {} entries",
        by_category(entries, LogCategory::Medication).len()
    ));

    let mobility = by_category(entries, LogCategory::Mobility);
    let total_steps: u64 = mobility.iter().filter_map(|e| parse_steps(&e.value)).sum();
    lines.push(if mobility.is_empty() {
        "Mobility: no entries yet".to_string()
    } else {
        format!(
            "Mobility: {} entries, {} steps total",
            mobility.len(),
            total_steps
        )
    });

    let moods = by_category(entries, LogCategory::Mood);
    if !moods.is_empty() {
        let samples: Vec<&str> = moods
            .iter()
            .rev()
            .take(3)
            .rev()
            .map(|e| e.value.as_str())
            .collect();
        lines.push(format!("Mood samples: {}", samples.join("; ")));
    }

    lines.push(format!(
        "Symptom reports: {}",
        by_category(entries, LogCategory::Symptom).len()
    ));
    lines.push(format!(
        "Wound notes: {}",
        by_category(entries, LogCategory::Wound).len()
    ));
    sections.push(lines.join("\n"));

    sections.join("\n")
}

fn by_category(entries: &[LogEntry], category: LogCategory) -> Vec<&LogEntry> {
    entries.iter().filter(|e| e.category == category).collect()
}

fn parse_steps(value: &str) -> Option<u64> {
    value.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(category: LogCategory, value: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            category,
            value: value.to_string(),
        }
    }

    fn payload(ts: &str, score: u8) -> serde_json::Value {
        serde_json::json!({
            "timestamp": ts,
            "measurements": {"area": 10.0, "perimeter": 12.0, "depth": 3.0},
            "classification": "surgical",
            "healingStage": "inflammatory",
            "healingScore": score,
            "infectionRisk": 0.2
        })
    }

    #[test]
    fn test_report_empty_store() {
        let tracker = Tracker::in_memory();
        let report = build_report(&tracker, &[]);
        assert!(report.contains("No observations recorded yet"));
        assert!(report.contains("Pain: no entries yet"));
    }

    #[test]
    fn test_report_includes_wound_summary() {
        let tracker = Tracker::in_memory();
        tracker
            .submit_analysis("w1", &payload("2025-06-01T09:00:00Z", 50))
            .unwrap();
        tracker
            .submit_analysis("w1", &payload("2025-06-02T09:00:00Z", 60))
            .unwrap();

        let report = build_report(&tracker, &[]);
        assert!(report.contains("Tracked wounds: 1"));
        assert!(report.contains("2 observations"));
        assert!(report.contains("latest score 60"));
        assert!(report.contains("+10.0/day"));
    }

    #[test]
    fn test_report_aggregates_logs() {
        let tracker = Tracker::in_memory();
        let entries = vec![
            entry(LogCategory::Pain, "6/10"),
            entry(LogCategory::Pain, "4/10"),
            entry(LogCategory::Mobility, "2000 steps"),
            entry(LogCategory::Mobility, "3500 steps"),
            entry(LogCategory::Mood, "feeling ok"),
            entry(LogCategory::Symptom, "some swelling"),
        ];

        let report = build_report(&tracker, &entries);
        assert!(report.contains("Pain: 2 entries, last 4/10"));
        assert!(report.contains("5500 steps total"));
        assert!(report.contains("Mood samples: feeling ok"));
        assert!(report.contains("Symptom reports: 1"));
    }
}
