use cmdlet_lint::config::Options;
use cmdlet_lint::descriptor::{CommandDescriptor, ParameterDescriptor};
use cmdlet_lint::registry::{ApprovedVerbs, StandardNameRegistry};
use cmdlet_lint::rule::{RuleContext, RuleOutcome};
use cmdlet_lint::rules;

fn check(rule_id: &str, descriptor: &CommandDescriptor) -> RuleOutcome {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = RuleContext {
        standard_names: Some(&names),
        approved_verbs: Some(&verbs),
        options: &options,
        probe: None,
    };
    rules::find(rule_id)
        .unwrap_or_else(|| panic!("rule {rule_id} not in catalogue"))
        .evaluate(descriptor, &ctx)
}

// ---------------------------------------------------------------------------
// Rule: output/output-type-declared
// ---------------------------------------------------------------------------

#[test]
fn no_output_types_fail() {
    let d = CommandDescriptor::new("Get-Widget");
    assert!(check("output/output-type-declared", &d).is_failed());
}

#[test]
fn declared_output_type_passes() {
    let mut d = CommandDescriptor::new("Get-Widget");
    d.output_types = vec!["Widget.Info".to_string()];
    assert_eq!(check("output/output-type-declared", &d), RuleOutcome::Passed);
}

#[test]
fn passthru_parameter_stands_in_for_output_type() {
    let mut d = CommandDescriptor::new("Set-Widget");
    d.parameters = vec![ParameterDescriptor {
        name: "PassThru".to_string(),
        type_name: "switch".to_string(),
        ..ParameterDescriptor::default()
    }];
    assert_eq!(check("output/output-type-declared", &d), RuleOutcome::Passed);
}

// ---------------------------------------------------------------------------
// Rule: output/output-type-resolves
// ---------------------------------------------------------------------------

#[test]
fn resolves_rule_skipped_without_output_types() {
    let d = CommandDescriptor::new("Get-Widget");
    assert!(check("output/output-type-resolves", &d).is_skipped());
}

#[test]
fn structured_output_type_passes() {
    let mut d = CommandDescriptor::new("Get-Widget");
    d.output_types = vec!["Widget.Info".to_string(), "Widget.Info[]".to_string()];
    assert_eq!(check("output/output-type-resolves", &d), RuleOutcome::Passed);
}

#[test]
fn unresolvable_output_type_fails() {
    let mut d = CommandDescriptor::new("Get-Widget");
    d.output_types = vec!["Not A Type!!".to_string()];
    match check("output/output-type-resolves", &d) {
        RuleOutcome::Failed { details } => assert_eq!(details, vec!["Not A Type!!"]),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn primitive_output_type_fails() {
    let mut d = CommandDescriptor::new("Get-Widget");
    d.output_types = vec!["System.String".to_string()];
    assert!(check("output/output-type-resolves", &d).is_failed());
}

#[test]
fn boolean_output_is_exempt_from_the_primitive_check() {
    let mut d = CommandDescriptor::new("Test-Widget");
    d.output_types = vec!["System.Boolean".to_string()];
    assert_eq!(check("output/output-type-resolves", &d), RuleOutcome::Passed);
}

#[test]
fn mixed_output_types_name_only_the_offenders() {
    let mut d = CommandDescriptor::new("Get-Widget");
    d.output_types = vec!["Widget.Info".to_string(), "int32".to_string()];
    match check("output/output-type-resolves", &d) {
        RuleOutcome::Failed { details } => assert_eq!(details, vec!["int32"]),
        other => panic!("expected failure, got {other:?}"),
    }
}
