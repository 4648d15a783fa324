use clap::ValueEnum;

use crate::config::{Listing, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Jsonl,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliListing {
    All,
    Accepted,
    Rejected,
    None,
}

impl From<CliListing> for Listing {
    fn from(value: CliListing) -> Self {
        match value {
            CliListing::All => Listing::All,
            CliListing::Accepted => Listing::Accepted,
            CliListing::Rejected => Listing::Rejected,
            CliListing::None => Listing::None,
        }
    }
}
