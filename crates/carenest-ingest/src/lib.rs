//! Payload normalization and free-text extraction for patient input

mod logbook;
mod normalizer;
mod triage;

pub use logbook::parse_entries;
pub use normalizer::normalize;
pub use triage::{triage, Triage};
