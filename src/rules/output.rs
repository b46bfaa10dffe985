//! Output-category rules: output-type declarations.
//!
//! | ID | Severity | What it checks |
//! |----|----------|----------------|
//! | `output/output-type-declared` | Required | An output type (or `PassThru`) is declared |
//! | `output/output-type-resolves` | Required | Declared output types resolve and are not primitive |

use crate::descriptor::{is_boolean_type, is_primitive_type, is_resolvable_type, CommandDescriptor};
use crate::rule::{Category, Rule, RuleContext, RuleOutcome, Severity};

fn output_type_declared(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if !d.output_types.is_empty() {
        return RuleOutcome::passed();
    }
    // A PassThru parameter stands in for a fixed output type: the command
    // emits whatever it was given.
    if d.parameter("PassThru").is_some() {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed()
    }
}

fn output_type_resolves(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.output_types.is_empty() {
        return RuleOutcome::skipped("no output types declared");
    }
    // Boolean is exempt from the primitive check: Test commands are required
    // to declare it.
    let offending: Vec<String> = d
        .output_types
        .iter()
        .filter(|t| {
            !is_resolvable_type(t) || (is_primitive_type(t) && !is_boolean_type(t))
        })
        .cloned()
        .collect();
    RuleOutcome::fail_if_any(offending)
}

/// Output-category catalogue entries.
pub fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "output/output-type-declared",
            category: Category::Output,
            severity: Severity::Required,
            rationale: "An output type must be declared because downstream commands bind to it by property name",
            predicate: output_type_declared,
        },
        Rule {
            id: "output/output-type-resolves",
            category: Category::Output,
            severity: Severity::Required,
            rationale: "Declared output types must resolve to real non-primitive types because a bare scalar carries no bindable properties",
            predicate: output_type_resolves,
        },
    ]
}
