//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document with a batch summary and one
//! entry per command.

use crate::evaluate::CommandReport;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    generated_at: String,
    total: usize,
    passed: usize,
    failed: usize,
    commands: &'a [CommandReport],
}

/// Formats a batch of [`CommandReport`]s as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the reports cannot be serialized (should not happen with valid
/// data).
pub fn format(reports: &[CommandReport]) -> String {
    let (passed, failed) = reports.iter().fold((0, 0), |(p, f), r| {
        if r.passed() {
            (p + 1, f)
        } else {
            (p, f + 1)
        }
    });

    let output = JsonOutput {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total: reports.len(),
        passed,
        failed,
        commands: reports,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
