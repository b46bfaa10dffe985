//! Output formatting for batch reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//!
//! Use [`format_reports`] to render a batch of
//! [`CommandReport`](crate::evaluate::CommandReport)s in either format.

pub mod json;
pub mod pretty;

use crate::evaluate::CommandReport;

/// Supported output formats for batch reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Formats a batch of [`CommandReport`]s in the requested [`OutputFormat`].
pub fn format_reports(reports: &[CommandReport], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(reports),
        OutputFormat::Json => json::format(reports),
    }
}
