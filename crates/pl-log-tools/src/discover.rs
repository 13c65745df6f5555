//! Candidate file discovery — expands CLI inputs into ping log paths.
//!
//! Each argument is classified once as a directory (searched recursively)
//! or a glob pattern. Every candidate then passes a header sniff: the
//! first few lines must mention the probe keyword.

use glob::{MatchOptions, Pattern, glob_with};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::LogResult;
use crate::source::LogSource;

/// How a single CLI argument is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputArg {
    /// An existing directory, searched recursively.
    Directory(PathBuf),
    /// Anything else: a glob pattern or a plain file path.
    Pattern(String),
}

impl InputArg {
    pub fn classify(arg: &str) -> Self {
        let path = Path::new(arg);
        if path.is_dir() {
            Self::Directory(path.to_path_buf())
        } else {
            Self::Pattern(arg.to_string())
        }
    }
}

/// Discovery tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Number of leading lines inspected by the header sniff.
    pub sniff_lines: usize,
    /// Case-insensitive keyword the sniffed lines must contain.
    pub sniff_keyword: String,
    /// Accepted file extensions, without the dot. Search order follows
    /// this list.
    pub extensions: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            sniff_lines: 10,
            sniff_keyword: "ping".to_string(),
            extensions: vec!["txt".to_string(), "log".to_string()],
        }
    }
}

impl DiscoveryOptions {
    fn has_accepted_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Non-fatal condition raised while expanding inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryWarning {
    EmptyDirectory(PathBuf),
    NoMatches(String),
    InvalidPattern { pattern: String, message: String },
    Unreadable { path: PathBuf, message: String },
}

impl std::fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDirectory(dir) => {
                write!(f, "No ping files found in directory '{}'", dir.display())
            }
            Self::NoMatches(pattern) => write!(f, "No files found matching pattern '{pattern}'"),
            Self::InvalidPattern { pattern, message } => {
                write!(f, "Invalid glob pattern '{pattern}': {message}")
            }
            Self::Unreadable { path, message } => {
                write!(f, "Error reading file {}: {message}", path.display())
            }
        }
    }
}

/// Outcome of expanding all inputs.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Accepted candidates in discovery order. Repeats are kept.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<DiscoveryWarning>,
}

impl Discovery {
    fn warn(&mut self, warning: DiscoveryWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Sniff each path and keep the ones that look like ping logs.
    /// Returns how many were accepted.
    fn accept_sniffed(
        &mut self,
        paths: Vec<PathBuf>,
        options: &DiscoveryOptions,
        source: &dyn LogSource,
    ) -> usize {
        let mut accepted = 0;
        for path in paths {
            match is_ping_file(source, &path, options) {
                Ok(true) => {
                    self.files.push(path);
                    accepted += 1;
                }
                Ok(false) => tracing::debug!(path = %path.display(), "not a ping log, skipping"),
                Err(e) => self.warn(DiscoveryWarning::Unreadable {
                    path,
                    message: e.to_string(),
                }),
            }
        }
        accepted
    }
}

/// Expand CLI inputs into ping log candidates.
///
/// With no inputs, `root` is searched non-recursively for each accepted
/// extension.
pub fn discover(
    args: &[String],
    root: &Path,
    options: &DiscoveryOptions,
    source: &dyn LogSource,
) -> Discovery {
    let mut discovery = Discovery::default();

    if args.is_empty() {
        for ext in &options.extensions {
            let pattern = resolve_glob(root, &format!("*.{ext}"));
            match expand(&pattern) {
                Ok(paths) => {
                    discovery.accept_sniffed(paths, options, source);
                }
                Err(warning) => discovery.warn(warning),
            }
        }
        return discovery;
    }

    for arg in args {
        match InputArg::classify(arg) {
            InputArg::Directory(dir) => {
                let mut accepted = 0;
                for ext in &options.extensions {
                    let pattern = resolve_glob(&dir, &format!("**/*.{ext}"));
                    match expand(&pattern) {
                        Ok(paths) => accepted += discovery.accept_sniffed(paths, options, source),
                        Err(warning) => discovery.warn(warning),
                    }
                }
                if accepted == 0 {
                    discovery.warn(DiscoveryWarning::EmptyDirectory(dir));
                }
            }
            InputArg::Pattern(pattern) => match expand(&pattern) {
                Ok(paths) if paths.is_empty() => {
                    discovery.warn(DiscoveryWarning::NoMatches(pattern));
                }
                Ok(paths) => {
                    let paths = paths
                        .into_iter()
                        .filter(|p| options.has_accepted_extension(p))
                        .collect();
                    discovery.accept_sniffed(paths, options, source);
                }
                Err(warning) => discovery.warn(warning),
            },
        }
    }

    discovery
}

/// Header sniff: lowercase the first `sniff_lines` lines and look for
/// the keyword.
pub fn is_ping_file(
    source: &dyn LogSource,
    path: &Path,
    options: &DiscoveryOptions,
) -> LogResult<bool> {
    let head = source.read_head(path, options.sniff_lines)?;
    let keyword = options.sniff_keyword.to_lowercase();
    Ok(head.join("\n").to_lowercase().contains(&keyword))
}

/// Join a pattern onto a root directory, escaping glob metacharacters in
/// the root itself.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let escaped = Pattern::escape(&root.to_string_lossy());
    Path::new(&escaped)
        .join(pattern)
        .to_string_lossy()
        .into_owned()
}

/// Regular files matching `pattern`, in the order `glob` yields them.
///
/// Wildcards never match a leading dot, so hidden files and hidden
/// directories are skipped unless named literally.
fn expand(pattern: &str) -> Result<Vec<PathBuf>, DiscoveryWarning> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob_with(pattern, options).map_err(|e| DiscoveryWarning::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect())
}
