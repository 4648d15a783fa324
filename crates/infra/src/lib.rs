// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod event_store;
pub mod format;
pub mod persistence;
pub mod settings_file;

pub use event_store::{InMemoryEventSource, parse_events, read_events};
pub use format::InputFormat;
pub use settings_file::{load_settings, parse_settings};
