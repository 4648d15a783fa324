pub mod multiplicity_filter;
pub mod target_ids;

pub use multiplicity_filter::{FilterConfig, MultiplicityFilter};
pub use target_ids::TargetIds;
