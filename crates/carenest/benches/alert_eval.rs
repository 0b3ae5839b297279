use carenest_records::{HealingStage, Measurements, Observation, WoundClass};
use carenest_rules::RuleSet;
use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn deteriorating_series(len: usize) -> Vec<Observation> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    (0..len)
        .map(|i| Observation {
            id: format!("obs-{}", i),
            wound_id: "bench".to_string(),
            timestamp: start + Duration::days(i as i64),
            measurements: Measurements {
                area_cm2: 8.0 + (i as f64) * 0.05,
                perimeter_cm: 12.0,
                depth_mm: 3.0,
            },
            classification: WoundClass::DiabeticUlcer,
            healing_stage: HealingStage::Inflammatory,
            healing_score: 50,
            infection_risk: (0.3 + (i as f64) * 0.005).min(1.0),
            indicators: None,
        })
        .collect()
}

fn bench_rule_set_evaluate(c: &mut Criterion) {
    let series = deteriorating_series(100);
    let rules = RuleSet::with_defaults();

    c.bench_function("rule_set_evaluate_100_obs", |b| {
        b.iter(|| rules.evaluate(black_box(&series)));
    });
}

criterion_group!(benches, bench_rule_set_evaluate);
criterion_main!(benches);
