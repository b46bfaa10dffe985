//! External collaborator seams.
//!
//! The rule engine never talks to a live shell runtime or the network
//! directly. Two trait seams keep those effects injectable:
//!
//! - [`CommandResolver`] — turns a command name into a
//!   [`CommandDescriptor`]. The shipped [`JsonFileResolver`] replays
//!   descriptor snapshots from a JSON file; a live-runtime resolver is an
//!   external concern.
//! - [`UrlProbe`] — fetches an HTTP status code for the help-URI
//!   reachability rule. No implementation ships with the crate; without an
//!   injected probe that rule is skipped.
//!
//! Implementers must be `Send + Sync`: the batch driver fans command
//! evaluations out across a rayon pool.

use crate::descriptor::CommandDescriptor;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// A command name failed to resolve to a descriptor.
///
/// Reported per command by the batch driver; never aborts the batch.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("command not found: {0}")]
    NotFound(String),
    #[error("descriptor source unavailable: {0}")]
    Source(String),
}

/// The help-URI probe could not complete.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport failure: {0}")]
    Failed(String),
}

/// Resolves command names to descriptors.
pub trait CommandResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<CommandDescriptor, ResolveError>;
}

/// Fetches the HTTP status code behind a help URI.
///
/// The evaluator calls this with a short timeout and retries once on
/// [`TransportError`] before recording the reachability rule as failed.
pub trait UrlProbe: Send + Sync {
    fn fetch_status(&self, uri: &str, timeout: Duration) -> Result<u16, TransportError>;
}

/// Replays descriptor snapshots from a JSON file.
///
/// The file holds a JSON array of descriptors. Lookup is by command name,
/// case-insensitive. Used by the CLI and by integration tests; a resolver
/// backed by live runtime introspection implements the same trait
/// externally.
#[derive(Debug)]
pub struct JsonFileResolver {
    descriptors: Vec<CommandDescriptor>,
}

impl JsonFileResolver {
    /// Loads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Source`] when the file cannot be read or is
    /// not a JSON array of descriptors.
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::Source(format!("{}: {e}", path.display())))?;
        let descriptors: Vec<CommandDescriptor> = serde_json::from_str(&content)
            .map_err(|e| ResolveError::Source(format!("{}: {e}", path.display())))?;
        Ok(JsonFileResolver { descriptors })
    }

    /// Builds a resolver from in-memory descriptors.
    pub fn from_descriptors(descriptors: Vec<CommandDescriptor>) -> Self {
        JsonFileResolver { descriptors }
    }

    /// Every command name in the snapshot, in file order.
    pub fn command_names(&self) -> Vec<String> {
        self.descriptors.iter().map(|d| d.name.clone()).collect()
    }
}

impl CommandResolver for JsonFileResolver {
    fn resolve(&self, name: &str) -> Result<CommandDescriptor, ResolveError> {
        self.descriptors
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}
