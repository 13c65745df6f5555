//! Log source abstraction — read ping logs from files or in-memory mocks.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LogError, LogResult};

/// Abstraction for reading ping log content.
///
/// Parsing and header sniffing go through this trait so they can be
/// exercised against `MockLogSource` in tests.
pub trait LogSource {
    /// Read the whole file and split it into lines.
    fn read_lines(&self, path: &Path) -> LogResult<Vec<String>>;

    /// Read at most the first `count` lines.
    fn read_head(&self, path: &Path, count: usize) -> LogResult<Vec<String>>;
}

/// Reads logs from the local filesystem.
pub struct FileLogSource;

impl LogSource for FileLogSource {
    fn read_lines(&self, path: &Path) -> LogResult<Vec<String>> {
        let content = std::fs::read_to_string(path).map_err(|e| LogError::from_io(path, e))?;
        Ok(content.lines().map(String::from).collect())
    }

    fn read_head(&self, path: &Path, count: usize) -> LogResult<Vec<String>> {
        let file = File::open(path).map_err(|e| LogError::from_io(path, e))?;
        BufReader::new(file)
            .lines()
            .take(count)
            .map(|line| line.map_err(|e| LogError::from_io(path, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_lines_strips_terminators() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "PING 10.0.0.1\r\nline two\n\nlast").unwrap();

        let lines = FileLogSource.read_lines(&path).unwrap();
        assert_eq!(lines, vec!["PING 10.0.0.1", "line two", "", "last"]);
    }

    #[test]
    fn read_head_limits_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.log");
        let body: String = (0..20).map(|i| format!("line {i}\n")).collect();
        fs::write(&path, body).unwrap();

        let head = FileLogSource.read_head(&path, 10).unwrap();
        assert_eq!(head.len(), 10);
        assert_eq!(head[9], "line 9");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = FileLogSource
            .read_lines(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, LogError::NotFound(_)));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.log");
        fs::write(&path, [0x50, 0x49, 0xff, 0xfe, 0x0a]).unwrap();

        let err = FileLogSource.read_lines(&path).unwrap_err();
        assert!(matches!(err, LogError::Io(ref msg) if msg.contains("bin.log")));
    }
}
