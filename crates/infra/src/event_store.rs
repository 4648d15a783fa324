// crates/infra/src/event_store.rs
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use mc_multiplicity_ports::{EventRecord, EventSource};
use mc_multiplicity_shared_kernel::{EventId, InfraResult, InfrastructureError, ParticleRecord};

use crate::format::InputFormat;
use crate::persistence::FileReader;

/// Event source backed by fully loaded event records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSource {
    events: Vec<EventRecord>,
    index: HashMap<EventId, usize>,
}

impl InMemoryEventSource {
    /// Index `events`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::DuplicateEvent`] if an event id repeats.
    pub fn new(events: Vec<EventRecord>) -> InfraResult<Self> {
        let mut index = HashMap::with_capacity(events.len());
        for (pos, record) in events.iter().enumerate() {
            if index.insert(record.event, pos).is_some() {
                return Err(InfrastructureError::DuplicateEvent { event: record.event });
            }
        }
        Ok(Self { events, index })
    }

    /// Load and concatenate event files in the given order.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, unsupported extensions and
    /// duplicate event ids across all files.
    pub fn load(paths: &[PathBuf]) -> InfraResult<Self> {
        let mut events = Vec::new();
        for path in paths {
            events.extend(read_events(path)?);
        }
        Self::new(events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for InMemoryEventSource {
    fn event_ids(&self) -> Vec<EventId> {
        self.events.iter().map(|r| r.event).collect()
    }

    fn particles(&self, event: EventId, label: &str) -> InfraResult<Cow<'_, [ParticleRecord]>> {
        let unavailable = |reason: &str| InfrastructureError::InputUnavailable {
            event,
            label: label.to_string(),
            reason: reason.to_string(),
        };

        let pos = *self.index.get(&event).ok_or_else(|| unavailable("event not present in source"))?;
        self.events[pos]
            .collection(label)
            .map(Cow::Borrowed)
            .ok_or_else(|| unavailable("collection missing from event"))
    }
}

/// Read every event stored in `path`.
pub fn read_events(path: &Path) -> InfraResult<Vec<EventRecord>> {
    let format = InputFormat::from_path(path)?;
    let text = FileReader::read_to_string(path)?;
    let events = parse_events(&text, format).map_err(|err| match err {
        InfrastructureError::SerializationError { format, details } => {
            InfrastructureError::SerializationError {
                format,
                details: format!("{}: {details}", path.display()),
            }
        }
        other => other,
    })?;
    debug!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parse events from text in the given format.
pub fn parse_events(text: &str, format: InputFormat) -> InfraResult<Vec<EventRecord>> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(text)?),
        InputFormat::JsonLines => parse_json_lines(text),
        #[cfg(feature = "yaml")]
        InputFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

fn parse_json_lines(text: &str) -> InfraResult<Vec<EventRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).map_err(|err| InfrastructureError::SerializationError {
                format: InputFormat::JsonLines.name().to_string(),
                details: format!("line {}: {err}", n + 1),
            })
        })
        .collect()
}
