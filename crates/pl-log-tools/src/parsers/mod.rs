//! Ping log parsers.
//!
//! The header matcher identifies the probe target; the line matchers pull
//! `-D` timestamps, sequence numbers and round-trip times out of reply lines.

pub mod header;
pub mod probe_line;

pub use header::parse_header;
pub use probe_line::{SEQUENCE_MARKER, parse_latency, parse_sequence, parse_timestamp};

use crate::types::{ParsedProbeLog, ProbeSample, ProbeTarget};

/// True when any non-blank line starts with a bracketed epoch prefix.
pub fn detect_timestamps(lines: &[String]) -> bool {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .any(|l| parse_timestamp(l).is_some())
}

/// Extract target, samples, timestamps and the probe counter from a
/// whole file's lines.
pub fn parse_lines(lines: &[String]) -> ParsedProbeLog {
    let target = lines
        .first()
        .and_then(|l| parse_header(l))
        .unwrap_or_else(ProbeTarget::unknown);
    let has_timestamps = detect_timestamps(lines);

    let mut parsed = ParsedProbeLog {
        target,
        has_timestamps,
        ..Default::default()
    };

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        if line.contains(SEQUENCE_MARKER) {
            parsed.total_probes += 1;
        }

        if has_timestamps && let Some(ts) = parse_timestamp(line) {
            parsed.timestamps.push(ts);
        }

        if let (Some(sequence), Some(round_trip_ms)) = (parse_sequence(line), parse_latency(line)) {
            parsed.samples.push(ProbeSample {
                sequence,
                round_trip_ms,
            });
        }
    }

    parsed
}
