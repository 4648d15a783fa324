mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliListing, CliOutputFormat};

use mc_multiplicity_domain::FilterSettings;
use mc_multiplicity_infra::load_settings;
use mc_multiplicity_shared_kernel::{ErrorContext, PresentationError, Result};

use crate::config::{RunConfig, RunConfigBuilder};

fn validate_jobs(flag: &str, value: Option<usize>) -> Result<()> {
    if value == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Resolve the settings file (if any) and apply per-option CLI overrides.
///
/// `multipleOf` is not checked here; the filter rejects 0 when it is built.
pub fn resolve_settings(args: &Args) -> Result<FilterSettings> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading filter settings from {}", path.display()))?,
        None => FilterSettings::default(),
    };

    if let Some(ids) = &args.particle_ids {
        settings.particle_ids.clone_from(ids);
    }
    if let Some(multiple_of) = args.multiple_of {
        settings.multiple_of = multiple_of;
    }
    if let Some(abs_id) = args.abs_id {
        settings.abs_id = abs_id;
    }
    if let Some(min) = args.min {
        settings.min = min;
    }
    if let Some(status) = args.status {
        settings.status = status;
    }
    if let Some(label) = &args.module_label {
        settings.module_label.clone_from(label);
    }

    Ok(settings)
}

/// Turn parsed arguments into a [`RunConfig`].
pub fn load_config(args: Args) -> Result<RunConfig> {
    validate_jobs("--jobs", args.jobs)?;
    let settings = resolve_settings(&args)?;

    let mut builder = RunConfigBuilder::default();
    builder
        .settings(settings)
        .inputs(args.inputs)
        .strict(args.strict)
        .format(args.format)
        .listing(args.only)
        .output(args.output)
        .describe(args.describe);
    if let Some(jobs) = args.jobs {
        builder.jobs(jobs);
    }

    builder
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}
