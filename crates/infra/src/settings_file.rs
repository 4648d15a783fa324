// crates/infra/src/settings_file.rs
use std::path::Path;

use log::debug;
use mc_multiplicity_domain::FilterSettings;
use mc_multiplicity_shared_kernel::{InfraResult, InfrastructureError};

use crate::format::InputFormat;
use crate::persistence::FileReader;

/// Load filter settings from a JSON or YAML file.
pub fn load_settings(path: &Path) -> InfraResult<FilterSettings> {
    let format = InputFormat::from_path(path)?;
    let text = FileReader::read_to_string(path)?;
    let settings = parse_settings(&text, format)?;
    debug!("loaded filter settings from {}", path.display());
    Ok(settings)
}

/// Parse filter settings; JSON Lines is accepted as a single JSON document.
pub fn parse_settings(text: &str, format: InputFormat) -> InfraResult<FilterSettings> {
    match format {
        InputFormat::Json | InputFormat::JsonLines => {
            serde_json::from_str(text).map_err(|err| InfrastructureError::SerializationError {
                format: "JSON".to_string(),
                details: format!("filter settings: {err}"),
            })
        }
        #[cfg(feature = "yaml")]
        InputFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|err| InfrastructureError::SerializationError {
                format: "YAML".to_string(),
                details: format!("filter settings: {err}"),
            })
        }
    }
}
