// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use mc_multiplicity_domain::{FilterDescriptor, MultiplicityFilter};
use mc_multiplicity_infra::{InMemoryEventSource, persistence::FileWriter};
use mc_multiplicity_usecase::SelectEvents;

use crate::cli::{self, Args};
use crate::config::RunConfig;
use crate::presentation;

/// Parse-to-report pipeline behind the binary.
///
/// # Errors
///
/// Configuration problems (including `multipleOf` = 0) fail before any input
/// is read. Unavailable particle collections only fail the run in strict mode.
pub fn run(args: Args) -> Result<()> {
    let config = cli::load_config(args).context("invalid command line")?;

    if config.describe {
        let text = presentation::render_descriptor(&FilterDescriptor::describe(), config.format)?;
        return emit(&text, &config);
    }

    let filter =
        MultiplicityFilter::from_settings(&config.settings).context("invalid filter configuration")?;

    let source = InMemoryEventSource::load(&config.inputs).context("failed to load events")?;
    info!("loaded {} events from {} file(s)", source.len(), config.inputs.len());

    let output = SelectEvents::new(&source, &filter, &config.settings.module_label)
        .strict(config.strict)
        .jobs(Some(config.jobs))
        .run()
        .context("event selection failed")?;

    let text = presentation::render_selection(&output, &config)?;
    emit(&text, &config)
}

fn emit(text: &str, config: &RunConfig) -> Result<()> {
    match &config.output {
        Some(path) => FileWriter::atomic_write(path, text.as_bytes())
            .with_context(|| format!("failed to write report to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("failed to write report")?;
            stdout.flush().context("failed to write report")
        }
    }
}
