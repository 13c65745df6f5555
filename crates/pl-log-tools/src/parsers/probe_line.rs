//! Per-line matchers for `ping` reply lines.

use regex::Regex;
use std::sync::LazyLock;

// `ping -D` prefix: [1705312801.123456]
static RE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(\d+\.\d+)\]").unwrap());

static RE_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"icmp_seq=(\d+)").unwrap());

static RE_LATENCY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"time=(\d+\.?\d*)").unwrap());

/// Marker counted as one probe attempt, whether or not it was answered.
pub const SEQUENCE_MARKER: &str = "icmp_seq=";

/// Leading `[<epoch>.<fraction>]` prefix, in seconds.
pub fn parse_timestamp(line: &str) -> Option<f64> {
    let caps = RE_TIMESTAMP.captures(line)?;
    caps[1].parse().ok()
}

/// `icmp_seq=<n>` value, saturating at `u64::MAX`.
pub fn parse_sequence(line: &str) -> Option<u64> {
    let caps = RE_SEQUENCE.captures(line)?;
    // digits only, so parsing can fail only on overflow
    Some(caps[1].parse().unwrap_or(u64::MAX))
}

/// `time=<ms>` round-trip value in milliseconds.
pub fn parse_latency(line: &str) -> Option<f64> {
    let caps = RE_LATENCY.captures(line)?;
    caps[1].parse().ok()
}
