//! Pipeline driver: discover → analyze each candidate → render.

use std::io::Write;
use std::path::{Path, PathBuf};

use pl_log_tools::{FileAnalysis, LogSource, analyze_file, discover, write_report};

use crate::config::ReportConfig;
use crate::error::ReportError;

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidates accepted by discovery, repeats included.
    pub candidates: usize,
    /// Distinct files rendered in the report.
    pub analyzed: usize,
    /// Candidates that could not be read.
    pub skipped: usize,
}

/// Analyze every candidate, in order.
///
/// Unreadable files are logged and left out. A path seen twice keeps its
/// first position with the latest analysis, so each file renders once.
pub fn analyze_all(
    files: &[PathBuf],
    source: &dyn LogSource,
) -> (Vec<(PathBuf, FileAnalysis)>, usize) {
    let mut results: Vec<(PathBuf, FileAnalysis)> = Vec::with_capacity(files.len());
    let mut skipped = 0;

    for path in files {
        match analyze_file(source, path) {
            Ok(analysis) => match results.iter_mut().find(|(p, _)| p == path) {
                Some(slot) => slot.1 = analysis,
                None => results.push((path.clone(), analysis)),
            },
            Err(e) => {
                tracing::warn!("Error reading file {}: {e}", path.display());
                skipped += 1;
            }
        }
    }

    (results, skipped)
}

/// Run the full pipeline, writing the Markdown report to `out`.
///
/// `root` is searched when `args` is empty. Nothing is written to `out`
/// when the run fails.
pub fn run<W: Write>(
    args: &[String],
    root: &Path,
    config: &ReportConfig,
    source: &dyn LogSource,
    mut out: W,
) -> Result<RunSummary, ReportError> {
    let options = config.discovery_options();
    let discovery = discover(args, root, &options, source);
    if discovery.files.is_empty() {
        return Err(ReportError::NoFilesFound);
    }
    tracing::debug!(
        candidates = discovery.files.len(),
        warnings = discovery.warnings.len(),
        "discovery complete"
    );

    let (results, skipped) = analyze_all(&discovery.files, source);
    if results.is_empty() {
        return Err(ReportError::NoValidData);
    }

    write_report(&results, &mut out)?;
    out.flush()?;

    Ok(RunSummary {
        candidates: discovery.files.len(),
        analyzed: results.len(),
        skipped,
    })
}
