//! Observation store and tracker facade for recovery tracking

mod store;
mod tracker;

pub use store::{Backend, JsonlBackend, MemoryBackend, ObservationStore, StoreError};
pub use tracker::Tracker;
