//! JSONL persistence for observation and logbook history
//!
//! History files are append-only: one JSON record per line, replayed in
//! full on open. A corrupt line must never hide the rest of a patient's
//! history, so malformed records are skipped and reported via `tracing`.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// Append one record to a JSONL history file, creating parent directories
/// on first write.
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, record)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Replay every record from a JSONL history file, in arrival order. A
/// missing file is an empty history. Lines that fail to parse are skipped
/// with a warning naming the file and line number.
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str(trimmed) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    %err,
                    "skipping malformed history record"
                );
            }
        }
    }

    Ok(records)
}
