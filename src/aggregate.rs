//! Result aggregation.
//!
//! [`aggregate`] is a pure function from an
//! [`EvaluationResult`](crate::evaluate::EvaluationResult) to one of four
//! report shapes selected by [`AggregationMode`]. Skipped rules are
//! excluded from both the passed and failed totals in every shape.

use crate::evaluate::{EvaluatedRule, EvaluationResult};
use std::sync::LazyLock;

/// Which report shape [`aggregate`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationMode {
    /// A single pass/fail verdict.
    Boolean,
    /// Passed/failed/skipped counts.
    Summary,
    /// Only the failing rules, each with a short reason.
    #[value(name = "failed")]
    FailedDetail,
    /// Every outcome plus the counts.
    #[value(name = "full")]
    FullDetail,
}

/// One failing rule with its extracted reason.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RuleFailure {
    pub id: &'static str,
    pub reason: String,
    /// Offending values named by the rule, when any.
    pub details: Vec<String>,
}

/// Aggregated per-command report, one variant per [`AggregationMode`].
#[derive(Debug, serde::Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum AggregatedReport {
    Boolean {
        command: String,
        passed: bool,
    },
    Summary {
        command: String,
        passed: usize,
        failed: usize,
        skipped: usize,
    },
    /// `failures` is `None` when zero rules failed — the designated empty
    /// sentinel, distinct from an empty-but-present list.
    FailedDetail {
        command: String,
        failures: Option<Vec<RuleFailure>>,
    },
    FullDetail {
        command: String,
        timestamp: String,
        passed: usize,
        failed: usize,
        skipped: usize,
        outcomes: Vec<EvaluatedRule>,
    },
}

impl AggregatedReport {
    /// Returns `true` when the report records zero failures.
    pub fn passed(&self) -> bool {
        match self {
            AggregatedReport::Boolean { passed, .. } => *passed,
            AggregatedReport::Summary { failed, .. } => *failed == 0,
            AggregatedReport::FailedDetail { failures, .. } => failures.is_none(),
            AggregatedReport::FullDetail { failed, .. } => *failed == 0,
        }
    }

    /// The command this report describes.
    pub fn command(&self) -> &str {
        match self {
            AggregatedReport::Boolean { command, .. }
            | AggregatedReport::Summary { command, .. }
            | AggregatedReport::FailedDetail { command, .. }
            | AggregatedReport::FullDetail { command, .. } => command,
        }
    }
}

/// Reduces an evaluation result to the requested report shape.
pub fn aggregate(result: &EvaluationResult, mode: AggregationMode) -> AggregatedReport {
    let (passed, failed, skipped) = result.counts();
    let command = result.command_name.clone();

    match mode {
        AggregationMode::Boolean => AggregatedReport::Boolean {
            command,
            passed: failed == 0,
        },
        AggregationMode::Summary => AggregatedReport::Summary {
            command,
            passed,
            failed,
            skipped,
        },
        AggregationMode::FailedDetail => {
            let failures: Vec<RuleFailure> = result
                .failures()
                .map(|r| RuleFailure {
                    id: r.id,
                    reason: short_reason(r.rationale),
                    details: match &r.outcome {
                        crate::rule::RuleOutcome::Failed { details } => details.clone(),
                        _ => vec![],
                    },
                })
                .collect();
            AggregatedReport::FailedDetail {
                command,
                failures: if failures.is_empty() {
                    None
                } else {
                    Some(failures)
                },
            }
        }
        AggregationMode::FullDetail => AggregatedReport::FullDetail {
            command,
            timestamp: chrono::Utc::now().to_rfc3339(),
            passed,
            failed,
            skipped,
            outcomes: result.outcomes.clone(),
        },
    }
}

/// Surfaces the trailing "because <reason>" clause of a rationale, or the
/// whole rationale when no such clause exists.
pub fn short_reason(rationale: &str) -> String {
    static RE_BECAUSE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"(?i)\bbecause\s+(.+)$").unwrap());
    match RE_BECAUSE.captures(rationale).and_then(|c| c.get(1)) {
        Some(reason) => reason.as_str().to_string(),
        None => rationale.to_string(),
    }
}
