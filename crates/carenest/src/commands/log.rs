use chrono::Utc;

use carenest_ingest::{parse_entries, triage};
use carenest_records::{append_jsonl, Paths};

use super::submit::severity_tag;

pub fn run(text: &str) -> anyhow::Result<()> {
    let entries = parse_entries(text, Utc::now());

    if entries.is_empty() {
        println!("Nothing recognised to log.");
    } else {
        let paths = Paths::new()?;
        for entry in &entries {
            append_jsonl(&paths.logbook_file(), entry)?;
            println!("Logged {:?}: {}", entry.category, entry.value);
        }
    }

    if let Some(t) = triage(text) {
        println!("[{}] {}", severity_tag(t.severity), t.reason);
        if t.severity == carenest_records::Severity::High {
            println!("Please contact your doctor or emergency services immediately.");
        }
    }
    Ok(())
}
