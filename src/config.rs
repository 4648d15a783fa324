// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use mc_multiplicity_domain::FilterSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    Yaml,
}

/// Which evaluated events are listed in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    All,
    Accepted,
    Rejected,
    /// Summary only.
    None,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    #[builder(default)]
    pub settings: FilterSettings,
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub listing: Listing,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub describe: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            settings: FilterSettings::default(),
            inputs: Vec::new(),
            jobs: num_cpus::get(),
            strict: false,
            format: OutputFormat::default(),
            listing: Listing::default(),
            output: None,
            describe: false,
        }
    }
}
