//! # cmdlet-lint
//!
//! Design-guideline linting for verb-noun shell commands.
//!
//! `cmdlet-lint` inspects introspected command metadata — name, parameter
//! list with attributes, parameter sets, output-type declarations, help
//! link — and evaluates a catalogue of independent convention rules against
//! it: naming shape, verb choice, parameter design, parameter-set
//! consistency, pipeline support, and output typing. Per-rule outcomes are
//! aggregated into a boolean verdict, summary counts, failure detail, or a
//! full report.
//!
//! ## Quick start
//!
//! ```rust
//! use cmdlet_lint::aggregate::{aggregate, AggregationMode};
//! use cmdlet_lint::config::Options;
//! use cmdlet_lint::descriptor::CommandDescriptor;
//! use cmdlet_lint::evaluate::evaluate;
//! use cmdlet_lint::registry::{ApprovedVerbs, StandardNameRegistry};
//! use cmdlet_lint::rule::RuleContext;
//!
//! let descriptor = CommandDescriptor::new("Get-Widget");
//! let names = StandardNameRegistry::builtin();
//! let verbs = ApprovedVerbs::builtin();
//! let options = Options::default();
//! let ctx = RuleContext {
//!     standard_names: Some(&names),
//!     approved_verbs: Some(&verbs),
//!     options: &options,
//!     probe: None,
//! };
//!
//! let result = evaluate(&descriptor, &ctx);
//! let report = aggregate(&result, AggregationMode::Summary);
//! assert!(!report.passed());
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`resolve`]** — turn a command name into a
//!    [`descriptor::CommandDescriptor`] through the injected
//!    [`resolve::CommandResolver`] seam.
//! 2. **[`registry`]** — load the standard-name and approved-verb lists
//!    once per batch.
//! 3. **[`rules`]** — the catalogue: isolated predicates grouped into
//!    General, Input, and Output categories, each tagged with a
//!    [`rule::Severity`] class.
//! 4. **[`evaluate`]** — run the severity-filtered catalogue against one
//!    descriptor, or a whole batch in parallel.
//! 5. **[`aggregate`]** — reduce per-rule outcomes to one of four report
//!    shapes.
//! 6. **[`output`]** — render batch reports as pretty text or JSON.
//!
//! ## Severity classes
//!
//! | Class | In default run | Opt-in |
//! |-------|----------------|--------|
//! | Required | yes | — |
//! | Optional | no | `--include-optional` |
//! | WorkInProgress | no | `--include-wip` |
//! | RegressionOnly | never | crate tests only |
//!
//! A rule whose precondition is unmet (no source text for a precompiled
//! command, no parameter of the relevant type) is recorded as skipped —
//! never passed, never failed.

pub mod aggregate;
pub mod config;
pub mod descriptor;
pub mod evaluate;
pub mod output;
pub mod registry;
pub mod resolve;
pub mod rule;
pub mod rules;
