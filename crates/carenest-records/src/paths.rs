//! Path resolution for the on-disk data directory

use std::path::PathBuf;

/// Resolves standard paths for persisted records
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// Resolve the data root: `$CARENEST_HOME` when set, otherwise
    /// `~/.carenest`. The override exists so tests can isolate.
    pub fn new() -> std::io::Result<Self> {
        if let Some(home) = std::env::var_os("CARENEST_HOME") {
            return Ok(Self {
                home: PathBuf::from(home),
            });
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            home: home.join(".carenest"),
        })
    }

    /// Observation history JSONL
    pub fn observations_file(&self) -> PathBuf {
        self.home.join("observations.jsonl")
    }

    /// Patient logbook JSONL
    pub fn logbook_file(&self) -> PathBuf {
        self.home.join("logbook.jsonl")
    }
}
