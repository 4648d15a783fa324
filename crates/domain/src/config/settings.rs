// crates/domain/src/config/settings.rs
use serde::{Deserialize, Serialize};

/// Collection read from each event when no label is configured.
pub const DEFAULT_MODULE_LABEL: &str = "generator:unsmeared";

/// Raw filter options as they appear in a configuration file.
///
/// Field names on the wire keep the historical option spelling
/// (`particleIDs`, `multipleOf`, `absID`, `min`, `status`, `moduleLabel`).
/// Missing keys take the documented defaults. Values are not validated here;
/// [`crate::MultiplicityFilter::from_settings`] does that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSettings {
    #[serde(rename = "moduleLabel")]
    pub module_label: String,
    #[serde(rename = "particleIDs")]
    pub particle_ids: Vec<i32>,
    #[serde(rename = "multipleOf")]
    pub multiple_of: u32,
    #[serde(rename = "absID")]
    pub abs_id: bool,
    pub min: u32,
    pub status: i32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            module_label: DEFAULT_MODULE_LABEL.to_string(),
            particle_ids: Vec::new(),
            multiple_of: 1,
            abs_id: false,
            min: 0,
            status: 0,
        }
    }
}
