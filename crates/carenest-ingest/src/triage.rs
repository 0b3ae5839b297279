//! Keyword triage over free-text patient messages

use carenest_records::Severity;

use crate::logbook::pain_score;

const HIGH_KEYWORDS: &[&str] = &[
    "chest pain",
    "severe bleeding",
    "difficulty breathing",
    "unconscious",
    "passing out",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "fever",
    "dizzy",
    "dizziness",
    "severe pain",
    "swelling",
    "pus",
    "infection",
];

const PAIN_ESCALATION_THRESHOLD: u8 = 8;

/// Outcome of a triage pass over one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triage {
    pub severity: Severity,
    pub reason: String,
}

/// Scan a message for urgent symptoms. High-urgency keywords are checked
/// before complication keywords; the first match wins.
pub fn triage(text: &str) -> Option<Triage> {
    let lower = text.to_lowercase();

    for kw in HIGH_KEYWORDS {
        if lower.contains(kw) {
            return Some(Triage {
                severity: Severity::High,
                reason: format!("immediate attention required: {}", kw),
            });
        }
    }

    for kw in MEDIUM_KEYWORDS {
        if lower.contains(kw) {
            return Some(Triage {
                severity: Severity::Medium,
                reason: format!("possible complication: {}", kw),
            });
        }
    }

    if let Some(pain) = pain_score(text) {
        if pain >= PAIN_ESCALATION_THRESHOLD {
            return Some(Triage {
                severity: Severity::Medium,
                reason: format!("high pain reported ({}/10)", pain),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_keywords_escalate() {
        let t = triage("I have chest pain since this morning").unwrap();
        assert_eq!(t.severity, Severity::High);
        assert!(t.reason.contains("chest pain"));
    }

    #[test]
    fn test_high_wins_over_medium() {
        // "severe bleeding" also contains no medium keyword, so combine both
        let t = triage("fever and difficulty breathing").unwrap();
        assert_eq!(t.severity, Severity::High);
    }

    #[test]
    fn test_medium_keywords() {
        let t = triage("noticed some pus around the stitches").unwrap();
        assert_eq!(t.severity, Severity::Medium);
        assert!(t.reason.contains("pus"));
    }

    #[test]
    fn test_high_pain_score_escalates() {
        let t = triage("pain 9 tonight").unwrap();
        assert_eq!(t.severity, Severity::Medium);
        assert!(t.reason.contains("9/10"));
    }

    #[test]
    fn test_moderate_pain_not_escalated() {
        assert_eq!(triage("pain is 4 today"), None);
    }

    #[test]
    fn test_benign_message() {
        assert_eq!(triage("walked around the block, feeling good"), None);
    }
}
