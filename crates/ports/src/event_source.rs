// crates/ports/src/event_source.rs
use std::borrow::Cow;
use std::collections::BTreeMap;

use mc_multiplicity_shared_kernel::{EventId, InfraResult, ParticleRecord};
use serde::{Deserialize, Serialize};

/// DTO for one event as stored by an upstream record store.
///
/// An event may carry several particle collections (for instance smeared and
/// unsmeared generator output); each is addressed by its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event: EventId,
    #[serde(default)]
    pub collections: BTreeMap<String, Vec<ParticleRecord>>,
}

impl EventRecord {
    pub fn new(event: impl Into<EventId>) -> Self {
        Self { event: event.into(), collections: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_collection(
        mut self,
        label: impl Into<String>,
        particles: impl IntoIterator<Item = ParticleRecord>,
    ) -> Self {
        self.collections.insert(label.into(), particles.into_iter().collect());
        self
    }

    pub fn collection(&self, label: &str) -> Option<&[ParticleRecord]> {
        self.collections.get(label).map(Vec::as_slice)
    }
}

/// Port for retrieving the particle record of each event.
pub trait EventSource: Send + Sync {
    /// Identifiers of every event, in source order.
    fn event_ids(&self) -> Vec<EventId>;

    /// Particle collection `label` of `event`.
    ///
    /// A missing event or collection is reported as
    /// [`InfrastructureError::InputUnavailable`](mc_multiplicity_shared_kernel::InfrastructureError::InputUnavailable),
    /// never as an empty list.
    fn particles(&self, event: EventId, label: &str) -> InfraResult<Cow<'_, [ParticleRecord]>>;
}
