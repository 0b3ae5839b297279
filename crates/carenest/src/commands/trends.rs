use carenest_trend::{RiskTrend, TrendSummary};

pub fn run(wound: &str) -> anyhow::Result<()> {
    let tracker = super::open_tracker()?;
    let trends = tracker.trends(wound);
    let len = tracker.series(wound).len();

    println!("Wound {} — trends over {} observations", wound, len);
    print!("{}", format_trends(&trends));
    Ok(())
}

fn format_trends(trends: &TrendSummary) -> String {
    let mut out = String::new();

    out.push_str(&match trends.healing_velocity {
        Some(v) => format!("  healing velocity: {:+.1} points/day\n", v),
        None => "  healing velocity: undefined (need two timed observations)\n".to_string(),
    });
    out.push_str(&match trends.area_delta {
        Some(d) if d >= 0.0 => format!("  area change: shrinking by {:.2} cm2\n", d),
        Some(d) => format!("  area change: growing by {:.2} cm2\n", -d),
        None => "  area change: undefined\n".to_string(),
    });
    out.push_str(&match trends.risk_trend {
        Some(RiskTrend::Improving) => "  infection risk: improving\n".to_string(),
        Some(RiskTrend::Worsening) => "  infection risk: worsening\n".to_string(),
        Some(RiskTrend::Unchanged) => "  infection risk: unchanged\n".to_string(),
        None => "  infection risk: undefined\n".to_string(),
    });
    out.push_str(&match trends.stage_progressed {
        Some(true) => "  healing stage: progressing\n".to_string(),
        Some(false) => "  healing stage: REGRESSED\n".to_string(),
        None => "  healing stage: undefined\n".to_string(),
    });

    out
}
