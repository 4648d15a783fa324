//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`event_source`]: access to the generator-level particle record of each
//!   event, keyed by collection label
//!
//! The domain and use-case layers only see these traits, never a concrete
//! file format.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod event_source;

pub use event_source::{EventRecord, EventSource};
