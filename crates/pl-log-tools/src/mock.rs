//! Mock log source for testing — serves pre-loaded log content.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{LogError, LogResult};
use crate::source::LogSource;

/// A mock log source that serves pre-loaded content by path.
#[derive(Default)]
pub struct MockLogSource {
    files: HashMap<PathBuf, Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Create a mock with a plain `ping -c 5` capture, one reply missing.
    pub fn with_ping_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/logs/example.txt",
            vec![
                "PING example.com (93.184.216.34) 56(84) bytes of data.".into(),
                "64 bytes from 93.184.216.34: icmp_seq=1 ttl=56 time=11.2 ms".into(),
                "64 bytes from 93.184.216.34: icmp_seq=2 ttl=56 time=12.8 ms".into(),
                "64 bytes from 93.184.216.34: icmp_seq=3 ttl=56 time=10.4 ms".into(),
                "64 bytes from 93.184.216.34: icmp_seq=5 ttl=56 time=13.6 ms".into(),
                "".into(),
                "--- example.com ping statistics ---".into(),
                "5 packets transmitted, 4 received, 20% packet loss, time 4006ms".into(),
                "rtt min/avg/max/mdev = 10.400/12.000/13.600/1.232 ms".into(),
            ],
        );
        m
    }

    /// Create a mock with a `ping -D` capture (bracketed epoch prefixes).
    pub fn with_timestamped_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/logs/gateway.log",
            vec![
                "PING 192.168.1.1 (192.168.1.1) 56(84) bytes of data.".into(),
                "[1705312801.123] 64 bytes from 192.168.1.1: icmp_seq=1 ttl=64 time=1.52 ms".into(),
                "[1705312802.124] 64 bytes from 192.168.1.1: icmp_seq=2 ttl=64 time=1.48 ms".into(),
                "[1705312803.126] 64 bytes from 192.168.1.1: icmp_seq=3 ttl=64 time=2.10 ms".into(),
                "[1705312804.127] 64 bytes from 192.168.1.1: icmp_seq=4 ttl=64 time=1.90 ms".into(),
            ],
        );
        m
    }

    /// Create a mock whose probes time out or report unreachable hosts.
    pub fn with_timeout_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/logs/flaky.txt",
            vec![
                "PING 10.20.30.40 56(84) bytes of data.".into(),
                "64 bytes from 10.20.30.40: icmp_seq=1 ttl=63 time=40.0 ms".into(),
                "no answer yet for icmp_seq=2".into(),
                "From 10.20.30.1 icmp_seq=3 Destination Host Unreachable".into(),
                "64 bytes from 10.20.30.40: icmp_seq=4 ttl=63 time=60.0 ms".into(),
            ],
        );
        m
    }
}

impl LogSource for MockLogSource {
    fn read_lines(&self, path: &Path) -> LogResult<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LogError::NotFound(path.display().to_string()))
    }

    fn read_head(&self, path: &Path, count: usize) -> LogResult<Vec<String>> {
        let all = self.read_lines(path)?;
        Ok(all.into_iter().take(count).collect())
    }
}
