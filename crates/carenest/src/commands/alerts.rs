use super::submit::severity_tag;

pub fn run(wound: &str) -> anyhow::Result<()> {
    let tracker = super::open_tracker()?;
    let alerts = tracker.alerts(wound);

    if alerts.is_empty() {
        println!("No active alerts for wound {}", wound);
        return Ok(());
    }

    println!("Alerts for wound {}:", wound);
    for alert in alerts {
        println!(
            "  [{}] {} (observation {})",
            severity_tag(alert.severity),
            alert.message,
            alert.triggered_by
        );
    }
    Ok(())
}
