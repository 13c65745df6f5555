//! Ping log report — library crate behind the `pl-report` binary.
//!
//! Re-exports all modules so external crates (e.g. `pl-e2e-tests`) can
//! drive the full discovery → analysis → rendering pipeline.

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

pub use config::ReportConfig;
pub use error::ReportError;
pub use runner::{RunSummary, run};
