// crates/domain/src/model/target_ids.rs
use mc_multiplicity_shared_kernel::ParticleId;
use serde::Serialize;

/// Sorted, duplicate-free set of particle species, searched with binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetIds(Vec<ParticleId>);

impl TargetIds {
    pub fn new(ids: impl IntoIterator<Item = i32>) -> Self {
        ids.into_iter().map(ParticleId::new).collect()
    }

    #[inline]
    pub fn contains(&self, id: ParticleId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticleId> {
        self.0.iter()
    }
}

impl FromIterator<ParticleId> for TargetIds {
    fn from_iter<I: IntoIterator<Item = ParticleId>>(iter: I) -> Self {
        let mut ids: Vec<ParticleId> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }
}

impl<'a> IntoIterator for &'a TargetIds {
    type Item = &'a ParticleId;
    type IntoIter = std::slice::Iter<'a, ParticleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
