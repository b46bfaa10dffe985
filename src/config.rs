//! Configuration loading and run options.
//!
//! Two layers:
//!
//! - [`Config`] — the TOML configuration file (`cmdlet-lint.toml` in the
//!   working directory by default). Every field carries a default so the
//!   file can be omitted entirely.
//! - [`Options`] — the validated per-run options handed to the evaluator
//!   and batch driver. Validation happens once, at batch start, before any
//!   command is evaluated.

use crate::aggregate::AggregationMode;
use crate::rule::SeverityFilter;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Hard ceiling on the configurable `max_parameters` threshold.
pub const MAX_PARAMETERS_LIMIT: u32 = 512;

/// Configuration errors, all rejected before evaluation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("max_parameters {0} is out of range (0..={MAX_PARAMETERS_LIMIT})")]
    MaxParametersOutOfRange(u32),
}

/// Main TOML configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Run defaults (severity inclusion, thresholds).
    pub run: RunConfig,
    /// Optional file overrides for the built-in registries.
    pub registry: RegistryConfig,
}

/// Run defaults, overridable from the CLI.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Evaluate Optional-severity rules.
    pub include_optional: bool,
    /// Evaluate WorkInProgress-severity rules (implies `include_optional`).
    pub include_work_in_progress: bool,
    /// Parameter-count ceiling checked by the parameter-count rule.
    pub max_parameters: u32,
    /// Help-URI probe timeout in milliseconds.
    pub probe_timeout_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            include_optional: false,
            include_work_in_progress: false,
            max_parameters: 30,
            probe_timeout_ms: 2000,
        }
    }
}

/// Paths to line-oriented registry files. Absent paths mean the built-in
/// lists apply.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// One standard parameter name per line.
    pub standard_names: Option<PathBuf>,
    /// One approved verb per line.
    pub approved_verbs: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `cmdlet-lint.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(ConfigError::NotFound(p.to_path_buf()));
            }
        } else {
            let default_path = Path::new("cmdlet-lint.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                        path: path.clone(),
                        source,
                    })?;
                toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
            }
            None => Ok(Config::default()),
        }
    }

    /// Builds validated run [`Options`] from this configuration.
    pub fn options(&self, mode: AggregationMode) -> Result<Options, ConfigError> {
        Options {
            severity_filter: severity_filter(
                self.run.include_optional,
                self.run.include_work_in_progress,
            ),
            max_parameters: self.run.max_parameters,
            probe_timeout: Duration::from_millis(self.run.probe_timeout_ms),
            mode,
        }
        .validated()
    }
}

/// Maps the two inclusion toggles onto the ordered [`SeverityFilter`].
/// Including work-in-progress rules implies including optional ones.
pub fn severity_filter(include_optional: bool, include_work_in_progress: bool) -> SeverityFilter {
    if include_work_in_progress {
        SeverityFilter::IncludeWorkInProgress
    } else if include_optional {
        SeverityFilter::IncludeOptional
    } else {
        SeverityFilter::Required
    }
}

/// Validated per-run options shared read-only across a batch.
#[derive(Debug, Clone)]
pub struct Options {
    pub severity_filter: SeverityFilter,
    /// Ceiling for the parameter-count rule. Must be within
    /// `0..=`[`MAX_PARAMETERS_LIMIT`].
    pub max_parameters: u32,
    /// Timeout for one help-URI probe attempt.
    pub probe_timeout: Duration,
    /// Report shape produced by the aggregator.
    pub mode: AggregationMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            severity_filter: SeverityFilter::Required,
            max_parameters: 30,
            probe_timeout: Duration::from_millis(2000),
            mode: AggregationMode::Boolean,
        }
    }
}

impl Options {
    /// Range-checks the options, consuming and returning them.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MaxParametersOutOfRange`] when `max_parameters`
    /// exceeds [`MAX_PARAMETERS_LIMIT`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.max_parameters > MAX_PARAMETERS_LIMIT {
            return Err(ConfigError::MaxParametersOutOfRange(self.max_parameters));
        }
        Ok(self)
    }
}
