//! Rule evaluation and batch driving.
//!
//! [`evaluate`] runs the severity-filtered catalogue against one descriptor
//! and collects outcomes in catalogue order. [`run_batch`] fans the
//! resolve-evaluate-aggregate pipeline out over a sequence of command names
//! via [rayon]; the registries and options are shared read-only, so command
//! evaluations never observe one another.

use crate::aggregate::{self, AggregatedReport};
use crate::config::ConfigError;
use crate::descriptor::CommandDescriptor;
use crate::resolve::CommandResolver;
use crate::rule::{Category, RuleContext, RuleOutcome, Severity};
use crate::rules;
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// One evaluated catalogue entry: the rule's metadata plus its outcome.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EvaluatedRule {
    pub id: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub rationale: &'static str,
    pub outcome: RuleOutcome,
}

/// Per-command evaluation result, outcomes in catalogue order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EvaluationResult {
    pub command_name: String,
    pub outcomes: Vec<EvaluatedRule>,
}

impl EvaluationResult {
    /// Count passed, failed, and skipped outcomes in a single pass.
    ///
    /// Returns `(passed, failed, skipped)`. Skips never count toward either
    /// of the other totals.
    pub fn counts(&self) -> (usize, usize, usize) {
        self.outcomes
            .iter()
            .fold((0, 0, 0), |(p, f, s), r| match r.outcome {
                RuleOutcome::Passed => (p + 1, f, s),
                RuleOutcome::Failed { .. } => (p, f + 1, s),
                RuleOutcome::Skipped { .. } => (p, f, s + 1),
            })
    }

    pub fn failed_count(&self) -> usize {
        self.counts().1
    }

    /// The failing entries, in catalogue order.
    pub fn failures(&self) -> impl Iterator<Item = &EvaluatedRule> {
        self.outcomes.iter().filter(|r| r.outcome.is_failed())
    }
}

/// Evaluates every catalogue rule admitted by the context's severity filter
/// against `descriptor`.
///
/// Evaluation is deterministic: identical descriptor, registries, and
/// options yield identical outcomes. A predicate that cannot complete
/// resolves to [`RuleOutcome::Skipped`]; it never terminates the run.
pub fn evaluate(descriptor: &CommandDescriptor, ctx: &RuleContext) -> EvaluationResult {
    let outcomes = rules::catalogue()
        .into_iter()
        .filter(|rule| ctx.options.severity_filter.includes(rule.severity))
        .map(|rule| {
            let outcome = catch_unwind(AssertUnwindSafe(|| rule.evaluate(descriptor, ctx)))
                .unwrap_or_else(|_| RuleOutcome::skipped("rule predicate could not complete"));
            EvaluatedRule {
                id: rule.id,
                category: rule.category,
                severity: rule.severity,
                rationale: rule.rationale,
                outcome,
            }
        })
        .collect();

    EvaluationResult {
        command_name: descriptor.name.clone(),
        outcomes,
    }
}

/// Outcome of one batch entry: an aggregated report, or the resolution
/// error for that command alone.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommandReport {
    Evaluated(AggregatedReport),
    Unresolved { name: String, error: String },
}

impl CommandReport {
    /// Returns `true` when this entry evaluated and found no failures.
    /// Unresolved entries count as not passed.
    pub fn passed(&self) -> bool {
        match self {
            CommandReport::Evaluated(report) => report.passed(),
            CommandReport::Unresolved { .. } => false,
        }
    }
}

/// Runs the full pipeline for each name in `names`, in input order.
///
/// Command evaluations run in parallel and are independent; a name that
/// fails to resolve yields an [`CommandReport::Unresolved`] entry without
/// aborting the batch.
///
/// # Errors
///
/// [`ConfigError`] when the context's options fail validation. Rejected
/// before any command is evaluated.
pub fn run_batch(
    names: &[String],
    resolver: &dyn CommandResolver,
    ctx: &RuleContext,
) -> Result<Vec<CommandReport>, ConfigError> {
    ctx.options.clone().validated()?;

    Ok(names
        .par_iter()
        .map(|name| match resolver.resolve(name) {
            Ok(descriptor) => {
                let result = evaluate(&descriptor, ctx);
                CommandReport::Evaluated(aggregate::aggregate(&result, ctx.options.mode))
            }
            Err(e) => CommandReport::Unresolved {
                name: name.clone(),
                error: e.to_string(),
            },
        })
        .collect())
}
