//! Latency/loss aggregation and per-file analysis.

use chrono::{DateTime, Local};
use std::path::Path;

use crate::error::LogResult;
use crate::parsers;
use crate::source::LogSource;
use crate::types::{FileAnalysis, ProbeSample, Stats, TimeRange};

/// Reduce parsed samples to summary statistics.
///
/// Loss treats every `icmp_seq=` line as an attempt and every parsed
/// sample as a success.
pub fn summarize(samples: &[ProbeSample], total_probes: u64) -> Stats {
    let packet_loss_percent = if total_probes == 0 {
        0.0
    } else {
        let lost = total_probes.saturating_sub(samples.len() as u64);
        lost as f64 / total_probes as f64 * 100.0
    };

    if samples.is_empty() {
        return Stats {
            total_probes,
            packet_loss_percent,
            ..Default::default()
        };
    }

    let count = samples.len() as f64;
    let times = samples.iter().map(|s| s.round_trip_ms);
    let min_ms = times.clone().fold(f64::INFINITY, f64::min);
    let max_ms = times.clone().fold(f64::NEG_INFINITY, f64::max);
    let avg_ms = times.clone().sum::<f64>() / count;
    let mean_deviation_ms = times.map(|t| (t - avg_ms).abs()).sum::<f64>() / count;

    Stats {
        min_ms,
        max_ms,
        avg_ms,
        mean_deviation_ms,
        total_probes,
        packet_loss_percent,
    }
}

/// Earliest and latest epoch timestamps, converted to local time.
pub fn time_range(timestamps: &[f64]) -> Option<TimeRange> {
    let earliest = timestamps.iter().copied().reduce(f64::min)?;
    let latest = timestamps.iter().copied().reduce(f64::max)?;
    Some(TimeRange {
        start: epoch_to_local(earliest)?,
        end: epoch_to_local(latest)?,
    })
}

fn epoch_to_local(epoch_secs: f64) -> Option<DateTime<Local>> {
    let secs = epoch_secs.trunc();
    let nanos = ((epoch_secs - secs) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos).map(|dt| dt.with_timezone(&Local))
}

/// Parse and aggregate a file's lines.
pub fn analyze(lines: &[String]) -> FileAnalysis {
    let parsed = parsers::parse_lines(lines);
    FileAnalysis {
        stats: summarize(&parsed.samples, parsed.total_probes),
        time_range: time_range(&parsed.timestamps),
        has_timestamps: parsed.has_timestamps,
        target: parsed.target,
    }
}

/// Read `path` through `source` and analyze it.
pub fn analyze_file(source: &dyn LogSource, path: &Path) -> LogResult<FileAnalysis> {
    let lines = source.read_lines(path)?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "analyzing ping log");
    Ok(analyze(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::mock::MockLogSource;
    use crate::types::ProbeTarget;

    fn samples(times: &[f64]) -> Vec<ProbeSample> {
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| ProbeSample {
                sequence: i as u64 + 1,
                round_trip_ms: t,
            })
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_samples_are_zero() {
        let stats = summarize(&[], 0);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn all_lost() {
        let stats = summarize(&[], 4);
        assert_eq!(stats.total_probes, 4);
        assert!(approx(stats.packet_loss_percent, 100.0));
        assert_eq!(stats.min_ms, 0.0);
        assert_eq!(stats.max_ms, 0.0);
        assert_eq!(stats.avg_ms, 0.0);
        assert_eq!(stats.mean_deviation_ms, 0.0);
    }

    #[test]
    fn single_sample() {
        let stats = summarize(&samples(&[11.2]), 1);
        assert_eq!(stats.min_ms, 11.2);
        assert_eq!(stats.max_ms, 11.2);
        assert_eq!(stats.avg_ms, 11.2);
        assert_eq!(stats.mean_deviation_ms, 0.0);
        assert_eq!(stats.packet_loss_percent, 0.0);
    }

    #[test]
    fn mean_absolute_deviation() {
        // mean 5, deviations 3,1,1,3 -> 2 (population stddev would be ~2.236)
        let stats = summarize(&samples(&[2.0, 4.0, 6.0, 8.0]), 4);
        assert!(approx(stats.avg_ms, 5.0));
        assert!(approx(stats.mean_deviation_ms, 2.0));
        assert_eq!(stats.min_ms, 2.0);
        assert_eq!(stats.max_ms, 8.0);
    }

    #[test]
    fn partial_loss() {
        let stats = summarize(&samples(&[40.0, 60.0]), 4);
        assert!(approx(stats.packet_loss_percent, 50.0));
        assert!(approx(stats.avg_ms, 50.0));
        assert!(approx(stats.mean_deviation_ms, 10.0));
    }

    #[test]
    fn ordering_and_loss_bounds_hold() {
        let sets: [&[f64]; 4] = [&[1.0], &[3.5, 0.2, 9.9], &[7.0, 7.0, 7.0], &[0.01, 250.0]];
        for (i, set) in sets.iter().enumerate() {
            let total = set.len() as u64 + i as u64;
            let stats = summarize(&samples(set), total);
            assert!(stats.min_ms <= stats.avg_ms && stats.avg_ms <= stats.max_ms);
            assert!((0.0..=100.0).contains(&stats.packet_loss_percent));
        }
    }

    #[test]
    fn time_range_spans_min_and_max() {
        let range = time_range(&[1705312803.5, 1705312801.25, 1705312802.0]).unwrap();
        assert_eq!(range.start.timestamp(), 1705312801);
        assert_eq!(range.end.timestamp(), 1705312803);
        assert!(range.start <= range.end);
    }

    #[test]
    fn time_range_absent_without_timestamps() {
        assert!(time_range(&[]).is_none());
    }

    #[test]
    fn analyze_example_reply() {
        let lines = vec![
            "PING example.com (93.184.216.34) 56 data bytes".to_string(),
            "64 bytes from 93.184.216.34: icmp_seq=1 ttl=56 time=11.2 ms".to_string(),
        ];
        let analysis = analyze(&lines);
        assert_eq!(analysis.target.hostname.as_deref(), Some("example.com"));
        assert_eq!(analysis.stats.total_probes, 1);
        assert_eq!(analysis.stats.packet_loss_percent, 0.0);
        assert_eq!(analysis.stats.avg_ms, 11.2);
        assert!(analysis.time_range.is_none());
    }

    #[test]
    fn analyze_empty_file() {
        let analysis = analyze(&[]);
        assert_eq!(analysis.target, ProbeTarget::unknown());
        assert_eq!(analysis.stats, Stats::default());
        assert!(analysis.time_range.is_none());
        assert!(!analysis.has_timestamps);
    }

    #[test]
    fn analyze_file_from_mock() {
        let source = MockLogSource::with_ping_sample();
        let analysis = analyze_file(&source, Path::new("/logs/example.txt")).unwrap();
        assert_eq!(analysis.stats.total_probes, 4);
        assert_eq!(analysis.stats.packet_loss_percent, 0.0);
        assert!(approx(analysis.stats.avg_ms, 12.0));
        assert!(approx(analysis.stats.mean_deviation_ms, 1.2));
    }

    #[test]
    fn analyze_file_with_timeouts() {
        let source = MockLogSource::with_timeout_sample();
        let analysis = analyze_file(&source, Path::new("/logs/flaky.txt")).unwrap();
        assert_eq!(analysis.target.ip, "10.20.30.40");
        assert_eq!(analysis.stats.total_probes, 4);
        assert!(approx(analysis.stats.packet_loss_percent, 50.0));
    }

    #[test]
    fn analyze_file_with_timestamps() {
        let source = MockLogSource::with_timestamped_sample();
        let analysis = analyze_file(&source, Path::new("/logs/gateway.log")).unwrap();
        assert!(analysis.has_timestamps);
        let range = analysis.time_range.unwrap();
        assert_eq!(range.start.timestamp(), 1705312801);
        assert_eq!(range.end.timestamp(), 1705312804);
    }

    #[test]
    fn analyze_file_missing() {
        let source = MockLogSource::new();
        let err = analyze_file(&source, Path::new("/logs/none.txt")).unwrap_err();
        assert!(matches!(err, LogError::NotFound(_)));
    }
}
