//! Rule definitions and evaluation outcomes.
//!
//! A [`Rule`] is an immutable catalogue entry: an identifier, a
//! [`Category`], a [`Severity`] class, a rationale string shown on failure,
//! and a pure predicate over a
//! [`CommandDescriptor`](crate::descriptor::CommandDescriptor). Predicates
//! receive everything they depend on through an explicit [`RuleContext`] —
//! no rule reads ambient state, and no rule observes another rule's result.

use crate::config::Options;
use crate::descriptor::CommandDescriptor;
use crate::registry::{ApprovedVerbs, StandardNameRegistry};
use crate::resolve::UrlProbe;
use std::fmt;

/// Rule grouping by what part of a command it inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Input,
    Output,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::General => write!(f, "general"),
            Category::Input => write!(f, "input"),
            Category::Output => write!(f, "output"),
        }
    }
}

/// Severity class controlling default inclusion in a run.
///
/// The order is meaningful: each [`SeverityFilter`] level admits a prefix of
/// this enum. [`RegressionOnly`](Severity::RegressionOnly) rules are never
/// part of a normal run and exist for the crate's own regression tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Required,
    Optional,
    WorkInProgress,
    RegressionOnly,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Required => write!(f, "required"),
            Severity::Optional => write!(f, "optional"),
            Severity::WorkInProgress => write!(f, "work-in-progress"),
            Severity::RegressionOnly => write!(f, "regression-only"),
        }
    }
}

/// Which severity classes a run evaluates.
///
/// One ordered cutoff rather than per-class booleans: each level is a strict
/// superset of the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityFilter {
    /// Required rules only (the default).
    #[default]
    Required,
    /// Required + Optional.
    IncludeOptional,
    /// Required + Optional + WorkInProgress.
    IncludeWorkInProgress,
}

impl SeverityFilter {
    /// Returns `true` if rules of `severity` are evaluated under this filter.
    pub fn includes(self, severity: Severity) -> bool {
        let cutoff = match self {
            SeverityFilter::Required => Severity::Required,
            SeverityFilter::IncludeOptional => Severity::Optional,
            SeverityFilter::IncludeWorkInProgress => Severity::WorkInProgress,
        };
        severity <= cutoff
    }
}

/// Outcome of evaluating one rule against one descriptor.
///
/// `Skipped` is first-class: a rule whose precondition is unmet (no source
/// text for a precompiled command, no parameter of the relevant type, a
/// registry that failed to load) records a skip, never a pass or a fail,
/// and skips are excluded from both totals.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RuleOutcome {
    Passed,
    Failed {
        /// Offending values (parameter names, type names, positions).
        details: Vec<String>,
    },
    Skipped {
        reason: String,
    },
}

impl RuleOutcome {
    pub fn passed() -> Self {
        RuleOutcome::Passed
    }

    /// Failure without itemized offenders.
    pub fn failed() -> Self {
        RuleOutcome::Failed { details: vec![] }
    }

    /// Failure naming the offending values.
    pub fn failed_with<I, S>(details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleOutcome::Failed {
            details: details.into_iter().map(Into::into).collect(),
        }
    }

    pub fn skipped(reason: &str) -> Self {
        RuleOutcome::Skipped {
            reason: reason.to_string(),
        }
    }

    /// Fails with `details` when the offender list is non-empty, passes
    /// otherwise. Most parameter-scanning rules reduce to this.
    pub fn fail_if_any(details: Vec<String>) -> Self {
        if details.is_empty() {
            RuleOutcome::Passed
        } else {
            RuleOutcome::Failed { details }
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, RuleOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RuleOutcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RuleOutcome::Skipped { .. })
    }
}

/// Read-only context shared by every rule in one evaluation.
///
/// The registries are `Option` because their backing files may fail to load;
/// rules that depend on a missing registry record
/// [`RuleOutcome::Skipped`] rather than aborting the run.
pub struct RuleContext<'a> {
    pub standard_names: Option<&'a StandardNameRegistry>,
    pub approved_verbs: Option<&'a ApprovedVerbs>,
    pub options: &'a Options,
    /// Injected transport for the help-URI reachability rule. `None` skips
    /// that rule.
    pub probe: Option<&'a dyn UrlProbe>,
}

/// Predicate signature shared by every catalogue entry.
pub type Predicate = fn(&CommandDescriptor, &RuleContext) -> RuleOutcome;

/// One immutable catalogue entry.
pub struct Rule {
    /// Stable kebab-case identifier (e.g. `"general/single-hyphen"`).
    pub id: &'static str,
    pub category: Category,
    pub severity: Severity,
    /// Human-readable explanation shown on failure. Written so that a
    /// trailing "because <reason>" clause can be surfaced on its own in
    /// failed-detail reports.
    pub rationale: &'static str,
    pub predicate: Predicate,
}

impl Rule {
    /// Evaluates this rule's predicate against `descriptor`.
    pub fn evaluate(&self, descriptor: &CommandDescriptor, ctx: &RuleContext) -> RuleOutcome {
        (self.predicate)(descriptor, ctx)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .finish()
    }
}
