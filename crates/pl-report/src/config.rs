//! Report configuration, loadable from TOML.

use serde::Deserialize;

use pl_log_tools::DiscoveryOptions;

use crate::error::ReportError;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "PL_REPORT_CONFIG";

/// Top-level configuration for the report generator.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Leading lines inspected when deciding whether a file is a ping log.
    pub sniff_lines: usize,
    /// Keyword the sniffed lines must contain (case-insensitive).
    pub sniff_keyword: String,
    /// Accepted file extensions, without the dot.
    pub extensions: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let options = DiscoveryOptions::default();
        Self {
            sniff_lines: options.sniff_lines,
            sniff_keyword: options.sniff_keyword,
            extensions: options.extensions,
        }
    }
}

impl ReportConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ReportError::Config {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Load from `PL_REPORT_CONFIG` if set, defaults otherwise.
    pub fn load() -> Result<Self, ReportError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            sniff_lines: self.sniff_lines,
            sniff_keyword: self.sniff_keyword.clone(),
            extensions: self.extensions.clone(),
        }
    }
}
