//! Append-only observation store with an injectable persistence backend

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::debug;

use carenest_records::{append_jsonl, read_jsonl, Observation, ValidationError};

/// Errors from store operations: either the record itself is invalid, or
/// the persistence backend failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage backend failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence backend for the store. The in-memory map is the source of
/// truth at runtime; the backend replays history on open and receives every
/// accepted record.
pub trait Backend: Send + Sync {
    /// Load all previously persisted observations, in arrival order
    fn load_all(&self) -> std::io::Result<Vec<Observation>>;

    /// Persist one accepted observation
    fn append(&self, observation: &Observation) -> std::io::Result<()>;
}

/// No-op backend for tests and ephemeral use
pub struct MemoryBackend;

impl Backend for MemoryBackend {
    fn load_all(&self) -> std::io::Result<Vec<Observation>> {
        Ok(Vec::new())
    }

    fn append(&self, _observation: &Observation) -> std::io::Result<()> {
        Ok(())
    }
}

/// Durable backend appending each observation to a JSONL file
pub struct JsonlBackend {
    path: PathBuf,
}

impl JsonlBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Backend for JsonlBackend {
    fn load_all(&self) -> std::io::Result<Vec<Observation>> {
        read_jsonl(&self.path)
    }

    fn append(&self, observation: &Observation) -> std::io::Result<()> {
        append_jsonl(&self.path, observation)
    }
}

/// Per-wound observation series, append-only (corrections are recorded as
/// new observations, matching the audit nature of medical records). Writes
/// are serialized by the lock; readers get consistent snapshots and never
/// see a partially appended record.
pub struct ObservationStore {
    series: RwLock<HashMap<String, Vec<Observation>>>,
    backend: Box<dyn Backend>,
}

impl ObservationStore {
    /// Ephemeral store with no persistence
    pub fn in_memory() -> Self {
        Self {
            series: RwLock::new(HashMap::new()),
            backend: Box::new(MemoryBackend),
        }
    }

    /// Open a store over a backend, replaying its history. Replayed records
    /// are re-sorted on insert, so an out-of-order file still yields sorted
    /// series.
    pub fn open(backend: Box<dyn Backend>) -> Result<Self, StoreError> {
        let history = backend.load_all()?;
        let store = Self {
            series: RwLock::new(HashMap::new()),
            backend,
        };
        {
            let mut series = store.write_guard();
            for observation in history {
                insert_sorted(&mut series, observation);
            }
        }
        Ok(store)
    }

    /// Validate and insert an observation into its wound's series,
    /// maintaining ascending timestamp order (ties keep arrival order).
    /// Duplicate ids within a series are rejected.
    pub fn append(&self, observation: Observation) -> Result<(), StoreError> {
        observation.validate()?;

        let mut series = self.write_guard();
        if let Some(existing) = series.get(&observation.wound_id) {
            if existing.iter().any(|o| o.id == observation.id) {
                return Err(StoreError::Validation(ValidationError::new(
                    "id",
                    format!("duplicate observation id `{}`", observation.id),
                )));
            }
        }

        // Persist before exposing to readers so a backend failure never
        // leaves memory and disk disagreeing.
        self.backend.append(&observation)?;
        debug!(wound_id = %observation.wound_id, id = %observation.id, "observation appended");
        insert_sorted(&mut series, observation);
        Ok(())
    }

    /// The wound's series sorted ascending by timestamp. Unknown ids yield
    /// an empty series: absence is a valid state, not an error.
    pub fn series(&self, wound_id: &str) -> Vec<Observation> {
        self.read_guard().get(wound_id).cloned().unwrap_or_default()
    }

    /// Most recent observation for a wound
    pub fn latest(&self, wound_id: &str) -> Option<Observation> {
        self.read_guard().get(wound_id).and_then(|s| s.last().cloned())
    }

    /// All known wound ids, sorted
    pub fn wound_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read_guard().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Total observation count across all wounds
    pub fn observation_count(&self) -> usize {
        self.read_guard().values().map(|s| s.len()).sum()
    }

    // Lock poisoning only means another thread panicked mid-operation;
    // the map itself is never left half-updated (inserts go through
    // `insert_sorted` after validation), so recover the guard.
    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<Observation>>> {
        self.series.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<Observation>>> {
        self.series.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn insert_sorted(series: &mut HashMap<String, Vec<Observation>>, observation: Observation) {
    let entries = series.entry(observation.wound_id.clone()).or_default();
    let idx = entries.partition_point(|o| o.timestamp <= observation.timestamp);
    entries.insert(idx, observation);
}
