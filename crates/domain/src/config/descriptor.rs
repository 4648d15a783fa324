// crates/domain/src/config/descriptor.rs
use serde::Serialize;

use super::settings::FilterSettings;

/// Self-description of the filter's configuration surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    pub name: &'static str,
    pub options: Vec<OptionDescription>,
}

/// One named option with its type, default and effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescription {
    pub name: &'static str,
    pub kind: &'static str,
    pub default: String,
    pub effect: &'static str,
}

impl FilterDescriptor {
    pub const NAME: &'static str = "EMJMCFilter";

    /// Describe every option with the defaults of [`FilterSettings::default`].
    pub fn describe() -> Self {
        let defaults = FilterSettings::default();
        let options = vec![
            OptionDescription {
                name: "moduleLabel",
                kind: "string",
                default: defaults.module_label.clone(),
                effect: "particle collection read from each event",
            },
            OptionDescription {
                name: "particleIDs",
                kind: "list of signed integers",
                default: format!("{:?}", defaults.particle_ids),
                effect: "species to count",
            },
            OptionDescription {
                name: "multipleOf",
                kind: "unsigned integer",
                default: defaults.multiple_of.to_string(),
                effect: "required divisor of the match count",
            },
            OptionDescription {
                name: "absID",
                kind: "boolean",
                default: defaults.abs_id.to_string(),
                effect: "fold the sign of the type identifier before matching",
            },
            OptionDescription {
                name: "min",
                kind: "unsigned integer",
                default: defaults.min.to_string(),
                effect: "minimum match count required",
            },
            OptionDescription {
                name: "status",
                kind: "signed integer",
                default: defaults.status.to_string(),
                effect: "0 matches any status, otherwise an exact match is required",
            },
        ];
        Self { name: Self::NAME, options }
    }
}
