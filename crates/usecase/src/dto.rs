// crates/usecase/src/dto.rs
use mc_multiplicity_shared_kernel::{EventId, InfrastructureError, MatchCount};
use serde::Serialize;

/// Outcome for one event whose particle record was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventDecision {
    pub event: EventId,
    pub match_count: MatchCount,
    pub accepted: bool,
}

/// An event that could not be evaluated because its input was unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFailure {
    pub event: EventId,
    pub reason: String,
}

impl EventFailure {
    pub fn new(event: EventId, err: &InfrastructureError) -> Self {
        Self { event, reason: err.to_string() }
    }
}

/// Decisions and failures of one selection run, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionOutput {
    pub decisions: Vec<EventDecision>,
    pub failures: Vec<EventFailure>,
}

/// Aggregate counters for a selection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl SelectionOutput {
    pub fn accepted(&self) -> impl Iterator<Item = &EventDecision> {
        self.decisions.iter().filter(|d| d.accepted)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &EventDecision> {
        self.decisions.iter().filter(|d| !d.accepted)
    }

    pub fn summary(&self) -> SelectionSummary {
        let accepted = self.accepted().count();
        SelectionSummary {
            total: self.decisions.len() + self.failures.len(),
            accepted,
            rejected: self.decisions.len() - accepted,
            failed: self.failures.len(),
        }
    }
}
