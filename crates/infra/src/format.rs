// crates/infra/src/format.rs
use std::path::Path;

use mc_multiplicity_shared_kernel::{InfraResult, InfrastructureError};

/// Serialization of an input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A single JSON document.
    Json,
    /// One JSON document per line; blank lines are skipped.
    JsonLines,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> InfraResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::JsonLines),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::JsonLines => "JSON Lines",
            #[cfg(feature = "yaml")]
            Self::Yaml => "YAML",
        }
    }
}
