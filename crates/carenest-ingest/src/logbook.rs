//! Free-text patient log extraction

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

use carenest_records::{LogCategory, LogEntry};

static PAIN_RE: OnceLock<Regex> = OnceLock::new();
static STEPS_RE: OnceLock<Regex> = OnceLock::new();
static MEDICATION_RE: OnceLock<Regex> = OnceLock::new();
static MOOD_RE: OnceLock<Regex> = OnceLock::new();

const SYMPTOM_KEYWORDS: &[&str] = &[
    "fever",
    "dizzy",
    "dizziness",
    "nausea",
    "bleeding",
    "swelling",
    "pus",
    "infection",
    "shortness of breath",
    "chest pain",
];

fn pain_re() -> &'static Regex {
    PAIN_RE.get_or_init(|| Regex::new(r"(?i)\bpain\s*(?:is|=|:)?\s*(\d{1,2})").unwrap())
}

/// Extract a reported pain score ("pain 7", "pain is 7/10") if present
pub(crate) fn pain_score(text: &str) -> Option<u8> {
    pain_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
}

/// Parse one free-text patient message into log entries. A single message
/// can produce several entries ("pain is 6 and I walked 3000 steps").
pub fn parse_entries(text: &str, now: DateTime<Utc>) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let lower = text.to_lowercase();

    if let Some(score) = pain_score(text) {
        entries.push(LogEntry {
            timestamp: now,
            category: LogCategory::Pain,
            value: format!("{}/10", score),
        });
    }

    let steps_re =
        STEPS_RE.get_or_init(|| Regex::new(r"(?i)\b(\d{2,6})\s*steps\b").unwrap());
    if let Some(steps) = steps_re.captures(text).and_then(|c| c.get(1)) {
        entries.push(LogEntry {
            timestamp: now,
            category: LogCategory::Mobility,
            value: format!("{} steps", steps.as_str()),
        });
    }

    let medication_re = MEDICATION_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(took|taken|medicine|medication|tablet|pill)\b").unwrap()
    });
    if medication_re.is_match(text) {
        entries.push(LogEntry {
            timestamp: now,
            category: LogCategory::Medication,
            value: text.to_string(),
        });
    }

    let mood_re = MOOD_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(mood|feeling|anxious|sad|depressed|happy|ok)\b").unwrap()
    });
    if mood_re.is_match(text) {
        entries.push(LogEntry {
            timestamp: now,
            category: LogCategory::Mood,
            value: text.to_string(),
        });
    }

    if SYMPTOM_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        entries.push(LogEntry {
            timestamp: now,
            category: LogCategory::Symptom,
            value: text.to_string(),
        });
    }

    if lower.contains("wound") || lower.contains("photo") || lower.contains("upload") {
        entries.push(LogEntry {
            timestamp: now,
            category: LogCategory::Wound,
            value: text.to_string(),
        });
    }

    entries
}
