//! Ping log analysis tools.
//!
//! Locates captured ICMP echo logs on disk, extracts target identity, probe
//! round-trip times and `-D` timestamps, reduces them to latency and loss
//! statistics, and renders the results as a Markdown report.

pub mod discover;
pub mod error;
pub mod mock;
pub mod parsers;
pub mod report;
pub mod source;
pub mod stats;
pub mod types;

// Re-export key types for convenience
pub use discover::{Discovery, DiscoveryOptions, DiscoveryWarning, InputArg, discover};
pub use error::{LogError, LogResult};
pub use mock::MockLogSource;
pub use report::{render_report, write_report};
pub use source::{FileLogSource, LogSource};
pub use stats::{analyze, analyze_file};
pub use types::{FileAnalysis, ParsedProbeLog, ProbeSample, ProbeTarget, Stats, TimeRange};
