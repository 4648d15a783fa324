// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod event;
pub mod particle;

pub use counts::MatchCount;
pub use event::EventId;
pub use particle::{ParticleId, ParticleRecord, StatusCode};
