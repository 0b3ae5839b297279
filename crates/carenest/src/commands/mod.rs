pub mod alerts;
pub mod init;
pub mod log;
pub mod report;
pub mod series;
pub mod status;
pub mod submit;
pub mod trends;
pub mod version;

use carenest_core::{JsonlBackend, Tracker};
use carenest_records::Paths;

/// Open the tracker over the durable JSONL store
pub(crate) fn open_tracker() -> anyhow::Result<Tracker> {
    let paths = Paths::new()?;
    let tracker = Tracker::open(Box::new(JsonlBackend::new(paths.observations_file())))?;
    Ok(tracker)
}
