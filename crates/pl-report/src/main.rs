//! `pl-report` — summarize captured ping logs as a Markdown report.
//!
//! Warnings and errors go to stderr through `tracing`; stdout carries only
//! the report.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pl_log_tools::FileLogSource;
use pl_report::cli::Args;
use pl_report::config::ReportConfig;
use pl_report::runner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let config = ReportConfig::load()?;
    tracing::debug!(?config, inputs = args.inputs.len(), "pl-report starting");

    let stdout = std::io::stdout();
    let summary = runner::run(
        &args.inputs,
        Path::new("."),
        &config,
        &FileLogSource,
        stdout.lock(),
    )?;

    tracing::debug!(
        candidates = summary.candidates,
        analyzed = summary.analyzed,
        skipped = summary.skipped,
        "report complete"
    );
    Ok(())
}
