// src/presentation.rs
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use mc_multiplicity_domain::{FilterDescriptor, FilterSettings};
use mc_multiplicity_shared_kernel::Result;
use mc_multiplicity_usecase::{EventDecision, EventFailure, SelectionOutput, SelectionSummary};
use serde::Serialize;

use crate::config::{Listing, OutputFormat, RunConfig};

#[derive(Serialize)]
struct Report<'a> {
    settings: &'a FilterSettings,
    summary: SelectionSummary,
    decisions: Vec<&'a EventDecision>,
    failures: &'a [EventFailure],
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Line<'a> {
    Decision(&'a EventDecision),
    Failure(&'a EventFailure),
    Summary(SelectionSummary),
}

fn listed<'a>(output: &'a SelectionOutput, listing: Listing) -> Vec<&'a EventDecision> {
    output
        .decisions
        .iter()
        .filter(|d| match listing {
            Listing::All => true,
            Listing::Accepted => d.accepted,
            Listing::Rejected => !d.accepted,
            Listing::None => false,
        })
        .collect()
}

/// Render a selection run in the configured format.
pub fn render_selection(output: &SelectionOutput, config: &RunConfig) -> Result<String> {
    let decisions = listed(output, config.listing);
    let summary = output.summary();

    match config.format {
        OutputFormat::Table => Ok(render_table(&decisions, &output.failures, summary, config)),
        OutputFormat::Json => {
            let report = Report {
                settings: &config.settings,
                summary,
                decisions,
                failures: &output.failures,
            };
            Ok(serde_json::to_string_pretty(&report)? + "\n")
        }
        OutputFormat::Yaml => {
            let report = Report {
                settings: &config.settings,
                summary,
                decisions,
                failures: &output.failures,
            };
            Ok(serde_yaml::to_string(&report)?)
        }
        OutputFormat::Jsonl => {
            let lines = decisions
                .into_iter()
                .map(Line::Decision)
                .chain(output.failures.iter().map(Line::Failure))
                .chain(std::iter::once(Line::Summary(summary)));
            let mut out = String::new();
            for line in lines {
                out.push_str(&serde_json::to_string(&line)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

fn render_table(
    decisions: &[&EventDecision],
    failures: &[EventFailure],
    summary: SelectionSummary,
    config: &RunConfig,
) -> String {
    let mut out = format!(
        "mc_multiplicity v{} · collection={} · parallel={}\n",
        crate::VERSION,
        config.settings.module_label,
        config.jobs
    );

    if !decisions.is_empty() || !failures.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["EVENT", "MATCHES", "DECISION"]);
        for d in decisions {
            table.add_row(vec![
                d.event.to_string(),
                d.match_count.to_string(),
                if d.accepted { "accept" } else { "reject" }.to_string(),
            ]);
        }
        for f in failures {
            table.add_row(vec![f.event.to_string(), "-".to_string(), format!("error: {}", f.reason)]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push_str(&format!(
        "total={} accepted={} rejected={} failed={}\n",
        summary.total, summary.accepted, summary.rejected, summary.failed
    ));
    out
}

/// Render the option table printed by `--describe`.
pub fn render_descriptor(descriptor: &FilterDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(descriptor)? + "\n"),
        OutputFormat::Jsonl => Ok(serde_json::to_string(descriptor)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(descriptor)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["OPTION", "TYPE", "DEFAULT", "EFFECT"]);
            for option in &descriptor.options {
                table.add_row(vec![option.name, option.kind, option.default.as_str(), option.effect]);
            }
            Ok(format!("{}\n{table}\n", descriptor.name))
        }
    }
}
