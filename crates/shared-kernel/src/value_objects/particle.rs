// crates/shared-kernel/src/value_objects/particle.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Signed particle-species code. The sign distinguishes particle from antiparticle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ParticleId(i32);

impl ParticleId {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Sign-folded identifier, `None` for `i32::MIN` whose magnitude does not fit.
    #[inline]
    pub const fn abs(self) -> Option<Self> {
        match self.0.checked_abs() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<i32> for ParticleId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<ParticleId> for i32 {
    fn from(value: ParticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation-level status of a particle. Zero is reserved as the "any status" wildcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct StatusCode(i32);

impl StatusCode {
    pub const ANY: Self = Self(0);

    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_any(self) -> bool {
        self.0 == 0
    }

    /// Whether `other` satisfies this status used as a restriction.
    #[inline]
    pub const fn admits(self, other: Self) -> bool {
        self.is_any() || self.0 == other.0
    }
}

impl From<i32> for StatusCode {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generated particle of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub pdg_id: ParticleId,
    pub status: StatusCode,
}

impl ParticleRecord {
    #[inline]
    pub const fn new(pdg_id: i32, status: i32) -> Self {
        Self {
            pdg_id: ParticleId::new(pdg_id),
            status: StatusCode::new(status),
        }
    }
}

impl From<(i32, i32)> for ParticleRecord {
    fn from((pdg_id, status): (i32, i32)) -> Self {
        Self::new(pdg_id, status)
    }
}
