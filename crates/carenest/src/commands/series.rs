use carenest_records::Observation;

pub fn run(wound: &str) -> anyhow::Result<()> {
    let tracker = super::open_tracker()?;
    let series = tracker.series(wound);

    if series.is_empty() {
        println!("No observations for wound {}", wound);
        return Ok(());
    }

    println!("Wound {} — {} observations", wound, series.len());
    for observation in &series {
        println!("{}", format_line(observation));
    }
    Ok(())
}

fn format_line(observation: &Observation) -> String {
    format!(
        "  {}  score {:>3}  area {:>6.2} cm2  stage {:?}  risk {:.2} ({:?})",
        observation.timestamp.format("%Y-%m-%d %H:%M"),
        observation.healing_score,
        observation.measurements.area_cm2,
        observation.healing_stage,
        observation.infection_risk,
        observation.risk_level()
    )
}
