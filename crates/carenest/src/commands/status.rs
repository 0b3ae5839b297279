use carenest_records::{read_jsonl, LogEntry, Paths};

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let tracker = super::open_tracker()?;
    let logbook: Vec<LogEntry> = read_jsonl(&paths.logbook_file())?;

    println!("Data directory: {}", paths.home.display());
    println!(
        "Tracked wounds: {} ({} observations)",
        tracker.store().wound_ids().len(),
        tracker.store().observation_count()
    );
    println!("Logbook entries: {}", logbook.len());
    Ok(())
}
