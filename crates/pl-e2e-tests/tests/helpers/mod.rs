//! Shared test harness for E2E report tests.
//!
//! Lays out ping captures in a temporary directory and drives the real
//! `pl_report::run` pipeline against the filesystem.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pl_log_tools::FileLogSource;
use pl_report::{ReportConfig, ReportError, RunSummary};

/// Linux iputils capture against a named host, one reply missing.
pub const LINUX_CAPTURE: &str = "\
PING example.com (93.184.216.34) 56(84) bytes of data.
64 bytes from 93.184.216.34: icmp_seq=1 ttl=56 time=10.0 ms
64 bytes from 93.184.216.34: icmp_seq=2 ttl=56 time=20.0 ms
no answer yet for icmp_seq=3
64 bytes from 93.184.216.34: icmp_seq=4 ttl=56 time=30.0 ms

--- example.com ping statistics ---
4 packets transmitted, 3 received, 25% packet loss, time 3004ms
rtt min/avg/max/mdev = 10.000/20.000/30.000/8.165 ms
";

/// `ping -D` capture against a bare address.
pub const TIMESTAMPED_CAPTURE: &str = "\
PING 192.168.1.1 56(84) bytes of data.
[1705312801.000000] 64 bytes from 192.168.1.1: icmp_seq=1 ttl=64 time=1.5 ms
[1705312802.000000] 64 bytes from 192.168.1.1: icmp_seq=2 ttl=64 time=2.5 ms
[1705312803.000000] 64 bytes from 192.168.1.1: icmp_seq=3 ttl=64 time=1.0 ms
";

/// macOS-style capture where every probe times out.
pub const DEAD_HOST_CAPTURE: &str = "\
PING 203.0.113.9 (203.0.113.9): 56 data bytes
Request timeout for icmp_seq=0
Request timeout for icmp_seq=1

--- 203.0.113.9 ping statistics ---
2 packets transmitted, 0 packets received, 100.0% packet loss
";

/// Temporary directory of captures plus helpers to run the report.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, content).expect("write capture");
        path
    }

    /// Absolute path of `relative` as a CLI argument.
    pub fn arg(&self, relative: &str) -> String {
        self.root().join(relative).to_string_lossy().into_owned()
    }

    /// Run the pipeline with default config, returning the outcome and
    /// whatever was written to stdout.
    pub fn run(&self, args: &[String]) -> (Result<RunSummary, ReportError>, String) {
        self.run_with(args, &ReportConfig::default())
    }

    pub fn run_with(
        &self,
        args: &[String],
        config: &ReportConfig,
    ) -> (Result<RunSummary, ReportError>, String) {
        let mut out = Vec::new();
        let result = pl_report::run(args, self.root(), config, &FileLogSource, &mut out);
        (result, String::from_utf8(out).expect("utf-8 report"))
    }
}
