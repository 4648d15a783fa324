// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliListing, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "mc_multiplicity",
    version = crate::VERSION,
    about = "Select generator-level events by the multiplicity of chosen particle species"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Event files (.json, .jsonl/.ndjson, .yaml/.yml), read in order
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "describe")]
    pub inputs: Vec<PathBuf>,

    /// Filter settings file (JSON or YAML, option names as in --describe)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Filter")]
    pub config: Option<PathBuf>,

    /// Particle species to count (comma separated, negative values allowed)
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help_heading = "Filter"
    )]
    pub particle_ids: Option<Vec<i32>>,

    /// Required divisor of the match count (must be at least 1)
    #[arg(long, help_heading = "Filter")]
    pub multiple_of: Option<u32>,

    /// Fold particle/antiparticle signs before matching (`--abs-id=false` turns it off)
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Filter"
    )]
    pub abs_id: Option<bool>,

    /// Minimum match count
    #[arg(long, help_heading = "Filter")]
    pub min: Option<u32>,

    /// Required status code (0 matches any status)
    #[arg(long, allow_negative_numbers = true, help_heading = "Filter")]
    pub status: Option<i32>,

    /// Particle collection to read from each event
    #[arg(long, help_heading = "Filter")]
    pub module_label: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Which evaluated events to list
    #[arg(long, value_enum, default_value = "all", help_heading = "Output")]
    pub only: CliListing,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Print the option table with defaults and exit
    #[arg(long, help_heading = "Output")]
    pub describe: bool,

    /// Abort on the first event whose particle collection is unavailable
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Worker threads (default: logical CPUs)
    #[arg(short, long, help_heading = "Behavior")]
    pub jobs: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
