//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the domain filter with an event source port:
//!
//! - [`orchestrator`]: evaluates every event of a source and collects the
//!   decisions and retrieval failures
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{EventDecision, EventFailure, SelectionOutput, SelectionSummary};
pub use orchestrator::SelectEvents;
