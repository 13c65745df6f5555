//! Fatal report errors.

use thiserror::Error;

/// Conditions that end a run without producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No ping files found to analyze.")]
    NoFilesFound,

    #[error("No valid ping data found in input files.")]
    NoValidData,

    #[error("failed to load config {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
