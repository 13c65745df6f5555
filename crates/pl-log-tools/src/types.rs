//! Core ping log types shared by the parser, aggregator and renderer.

use chrono::{DateTime, Local};

// ── Probe Target ──────────────────────────────────────────────

/// The host a log was captured against, taken from its `PING` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Address as printed by the probe tool. Always populated.
    pub ip: String,
    /// Hostname, only when the header names both a host and a
    /// parenthesized address.
    pub hostname: Option<String>,
}

impl ProbeTarget {
    pub const UNKNOWN_IP: &'static str = "Unknown";

    /// Identity used when the header is missing or unrecognized.
    pub fn unknown() -> Self {
        Self {
            ip: Self::UNKNOWN_IP.to_string(),
            hostname: None,
        }
    }
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self::unknown()
    }
}

impl std::fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.hostname {
            Some(host) => write!(f, "{host} ({})", self.ip),
            None => f.write_str(&self.ip),
        }
    }
}

// ── Probe Sample ──────────────────────────────────────────────

/// One successful echo reply: a line carrying both `icmp_seq=` and `time=`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSample {
    pub sequence: u64,
    pub round_trip_ms: f64,
}

// ── Parsed Log ────────────────────────────────────────────────

/// Raw extraction result for a single file, before aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedProbeLog {
    pub target: ProbeTarget,
    /// True when any non-blank line starts with a `[<epoch>.<fraction>]` prefix.
    pub has_timestamps: bool,
    pub samples: Vec<ProbeSample>,
    /// Epoch seconds from the bracketed prefixes, in file order.
    pub timestamps: Vec<f64>,
    /// Number of lines containing `icmp_seq=`, replies and failures alike.
    pub total_probes: u64,
}

// ── Stats ─────────────────────────────────────────────────────

/// Latency and loss summary. All latency fields are zero when no
/// sample was parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub min_ms: f64,
    pub max_ms: f64,
    pub avg_ms: f64,
    /// Mean absolute deviation about `avg_ms`.
    pub mean_deviation_ms: f64,
    pub total_probes: u64,
    pub packet_loss_percent: f64,
}

// ── Time Range ────────────────────────────────────────────────

/// Earliest and latest `-D` timestamps of a file, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

// ── File Analysis ─────────────────────────────────────────────

/// Everything the renderer needs to describe one log file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAnalysis {
    pub target: ProbeTarget,
    pub stats: Stats,
    pub time_range: Option<TimeRange>,
    pub has_timestamps: bool,
}
