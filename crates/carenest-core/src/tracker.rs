//! Tracker facade tying ingestion, storage, trends, and alerting together

use tracing::info;

use carenest_ingest::normalize;
use carenest_records::{Alert, Observation};
use carenest_rules::RuleSet;
use carenest_trend::TrendSummary;

use crate::store::{Backend, ObservationStore, StoreError};

/// The core's external surface: submit raw analysis payloads, query series
/// and derived state. Derived state (trends, alerts) is recomputed from the
/// stored series on every read, never cached.
pub struct Tracker {
    store: ObservationStore,
    rules: RuleSet,
}

impl Tracker {
    /// Tracker over an ephemeral in-memory store
    pub fn in_memory() -> Self {
        Self {
            store: ObservationStore::in_memory(),
            rules: RuleSet::with_defaults(),
        }
    }

    /// Tracker over a persistence backend, replaying existing history
    pub fn open(backend: Box<dyn Backend>) -> Result<Self, StoreError> {
        Ok(Self {
            store: ObservationStore::open(backend)?,
            rules: RuleSet::with_defaults(),
        })
    }

    /// Ingestion interface: normalize an untrusted analysis payload and
    /// append the resulting observation to the wound's series.
    pub fn submit_analysis(
        &self,
        wound_id: &str,
        payload: &serde_json::Value,
    ) -> Result<Observation, StoreError> {
        let observation = normalize(wound_id, payload)?;
        self.store.append(observation.clone())?;
        info!(
            wound_id,
            id = %observation.id,
            score = observation.healing_score,
            "analysis result recorded"
        );
        Ok(observation)
    }

    /// Sorted observation series for a wound (empty if unknown)
    pub fn series(&self, wound_id: &str) -> Vec<Observation> {
        self.store.series(wound_id)
    }

    /// Most recent observation for a wound
    pub fn latest(&self, wound_id: &str) -> Option<Observation> {
        self.store.latest(wound_id)
    }

    /// Derived trend metrics for a wound's series
    pub fn trends(&self, wound_id: &str) -> TrendSummary {
        TrendSummary::compute(&self.store.series(wound_id))
    }

    /// Current alerts for a wound, recomputed from the series
    pub fn alerts(&self, wound_id: &str) -> Vec<Alert> {
        self.rules.evaluate(&self.store.series(wound_id))
    }

    /// Direct access to the underlying store (reporting, status)
    pub fn store(&self) -> &ObservationStore {
        &self.store
    }
}
