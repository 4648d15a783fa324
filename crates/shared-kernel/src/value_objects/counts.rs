// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Number of particles in one event that satisfy the species and status rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchCount(u64);

impl MatchCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn increment(&mut self) {
        self.0 += 1;
    }

    /// `divisor` must be non-zero; zero is rejected when the filter is configured.
    #[inline]
    pub const fn is_multiple_of(self, divisor: u32) -> bool {
        self.0 % divisor as u64 == 0
    }

    #[inline]
    pub const fn at_least(self, minimum: u32) -> bool {
        self.0 >= minimum as u64
    }
}

impl Default for MatchCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq<u64> for MatchCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl From<u64> for MatchCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<MatchCount> for u64 {
    fn from(value: MatchCount) -> Self {
        value.0
    }
}

mod display {
    use std::fmt;

    use super::MatchCount;

    impl fmt::Display for MatchCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
