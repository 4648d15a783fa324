// crates/domain/src/model/multiplicity_filter.rs
use std::num::NonZeroU32;

use log::debug;
use mc_multiplicity_shared_kernel::{
    DomainError, DomainResult, MatchCount, ParticleRecord, StatusCode,
};
use serde::Serialize;

use super::target_ids::TargetIds;
use crate::config::FilterSettings;

/// Validated, normalized filter state. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    target_ids: TargetIds,
    multiple_of: NonZeroU32,
    use_absolute_id: bool,
    minimum_count: u32,
    status_filter: StatusCode,
}

impl FilterConfig {
    pub fn target_ids(&self) -> &TargetIds {
        &self.target_ids
    }

    pub fn multiple_of(&self) -> u32 {
        self.multiple_of.get()
    }

    pub fn use_absolute_id(&self) -> bool {
        self.use_absolute_id
    }

    pub fn minimum_count(&self) -> u32 {
        self.minimum_count
    }

    pub fn status_filter(&self) -> StatusCode {
        self.status_filter
    }
}

/// Keeps an event when the number of matching particles is a multiple of
/// `multipleOf` and at least `min`.
///
/// A particle matches when its (optionally sign-folded) type identifier is one
/// of the targets and, unless the status filter is 0, its status equals the
/// status filter. Evaluation borrows the filter immutably, so one instance can
/// be shared across worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicityFilter {
    config: FilterConfig,
}

impl MultiplicityFilter {
    /// Build a filter, normalizing the target set.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] when `multiple_of` is 0.
    pub fn create(
        target_ids: impl IntoIterator<Item = i32>,
        multiple_of: u32,
        use_absolute_id: bool,
        minimum_count: u32,
        status_filter: i32,
    ) -> DomainResult<Self> {
        let multiple_of =
            NonZeroU32::new(multiple_of).ok_or_else(|| DomainError::InvalidConfiguration {
                reason: "multipleOf must be positive".to_string(),
            })?;
        let target_ids = TargetIds::new(target_ids);

        debug!(
            "multiplicity filter: {} target species, multipleOf={}, absID={}, min={}, status={}",
            target_ids.len(),
            multiple_of,
            use_absolute_id,
            minimum_count,
            status_filter
        );

        Ok(Self {
            config: FilterConfig {
                target_ids,
                multiple_of,
                use_absolute_id,
                minimum_count,
                status_filter: StatusCode::new(status_filter),
            },
        })
    }

    /// Build a filter from the named-option surface.
    ///
    /// # Errors
    ///
    /// Same as [`MultiplicityFilter::create`].
    pub fn from_settings(settings: &FilterSettings) -> DomainResult<Self> {
        Self::create(
            settings.particle_ids.iter().copied(),
            settings.multiple_of,
            settings.abs_id,
            settings.min,
            settings.status,
        )
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Whether a single particle counts toward the multiplicity.
    #[inline]
    pub fn matches(&self, particle: &ParticleRecord) -> bool {
        self.matches_species(particle) && self.config.status_filter.admits(particle.status)
    }

    fn matches_species(&self, particle: &ParticleRecord) -> bool {
        let id = if self.config.use_absolute_id {
            match particle.pdg_id.abs() {
                Some(id) => id,
                None => return false,
            }
        } else {
            particle.pdg_id
        };
        self.config.target_ids.contains(id)
    }

    /// Number of matching particles in one event.
    pub fn match_count(&self, particles: &[ParticleRecord]) -> MatchCount {
        let mut count = MatchCount::zero();
        for particle in particles {
            if self.matches(particle) {
                count.increment();
            }
        }
        count
    }

    /// Apply the multiplicity predicate to an already computed count.
    #[inline]
    pub fn decide(&self, count: MatchCount) -> bool {
        count.is_multiple_of(self.config.multiple_of.get())
            && count.at_least(self.config.minimum_count)
    }

    /// Keep (`true`) or discard (`false`) one event.
    pub fn evaluate(&self, particles: &[ParticleRecord]) -> bool {
        self.decide(self.match_count(particles))
    }
}
