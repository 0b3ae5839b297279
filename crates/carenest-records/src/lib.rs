//! Record types and persistence primitives for recovery tracking

mod error;
mod io;
mod paths;
mod types;

pub use error::ValidationError;
pub use io::{append_jsonl, read_jsonl};
pub use paths::Paths;
pub use types::{
    Alert, HealingStage, LogCategory, LogEntry, Measurements, Observation, RiskLevel, Severity,
    WoundClass,
};
