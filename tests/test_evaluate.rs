use cmdlet_lint::aggregate::{AggregatedReport, AggregationMode};
use cmdlet_lint::config::Options;
use cmdlet_lint::descriptor::CommandDescriptor;
use cmdlet_lint::evaluate::{evaluate, run_batch, CommandReport};
use cmdlet_lint::registry::{ApprovedVerbs, StandardNameRegistry};
use cmdlet_lint::resolve::JsonFileResolver;
use cmdlet_lint::rule::{RuleContext, SeverityFilter};

fn context<'a>(
    names: &'a StandardNameRegistry,
    verbs: &'a ApprovedVerbs,
    options: &'a Options,
) -> RuleContext<'a> {
    RuleContext {
        standard_names: Some(names),
        approved_verbs: Some(verbs),
        options,
        probe: None,
    }
}

#[test]
fn evaluation_is_deterministic() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);
    let descriptor = CommandDescriptor::new("Get-Widget");

    let first = evaluate(&descriptor, &ctx);
    let second = evaluate(&descriptor, &ctx);

    assert_eq!(first.outcomes.len(), second.outcomes.len());
    for (a, b) in first.outcomes.iter().zip(&second.outcomes) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.outcome, b.outcome);
    }
}

#[test]
fn severity_filters_are_nested() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let descriptor = CommandDescriptor::new("Get-Widget");

    let count_under = |filter: SeverityFilter| {
        let options = Options {
            severity_filter: filter,
            ..Options::default()
        };
        let ctx = context(&names, &verbs, &options);
        evaluate(&descriptor, &ctx).outcomes.len()
    };

    let required = count_under(SeverityFilter::Required);
    let optional = count_under(SeverityFilter::IncludeOptional);
    let wip = count_under(SeverityFilter::IncludeWorkInProgress);

    assert!(required < optional);
    assert!(optional < wip);
}

#[test]
fn wider_filter_preserves_narrower_outcomes() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let descriptor = CommandDescriptor::new("Get-Widget");

    let narrow_options = Options::default();
    let narrow_ctx = context(&names, &verbs, &narrow_options);
    let narrow = evaluate(&descriptor, &narrow_ctx);

    let wide_options = Options {
        severity_filter: SeverityFilter::IncludeWorkInProgress,
        ..Options::default()
    };
    let wide_ctx = context(&names, &verbs, &wide_options);
    let wide = evaluate(&descriptor, &wide_ctx);

    // Every rule the narrow run evaluated appears in the wide run with the
    // same outcome.
    for narrow_rule in &narrow.outcomes {
        let wide_rule = wide
            .outcomes
            .iter()
            .find(|r| r.id == narrow_rule.id)
            .unwrap_or_else(|| panic!("{} missing from wider run", narrow_rule.id));
        assert_eq!(narrow_rule.outcome, wide_rule.outcome);
    }
}

#[test]
fn counts_exclude_skips_from_both_totals() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);

    // No parameters, no output types, no help URI: plenty of skips.
    let result = evaluate(&CommandDescriptor::new("Get-Widget"), &ctx);
    let (passed, failed, skipped) = result.counts();

    assert!(skipped > 0);
    assert_eq!(passed + failed + skipped, result.outcomes.len());
    assert_eq!(failed, result.failed_count());
}

#[test]
fn bare_descriptor_fails_the_boolean_verdict() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);

    let result = evaluate(&CommandDescriptor::new("Get-Widget"), &ctx);
    let report = cmdlet_lint::aggregate::aggregate(&result, AggregationMode::Boolean);
    assert!(!report.passed());
}

#[test]
fn default_descriptor_summary_reports_failures() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);

    let result = evaluate(&CommandDescriptor::new("Get-Widget"), &ctx);
    match cmdlet_lint::aggregate::aggregate(&result, AggregationMode::Summary) {
        AggregatedReport::Summary { failed, .. } => assert!(failed >= 1),
        other => panic!("expected summary report, got {other:?}"),
    }
}

#[test]
fn batch_preserves_input_order_and_isolates_resolution_failures() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);

    let resolver = JsonFileResolver::from_descriptors(vec![
        CommandDescriptor::new("Get-Widget"),
        CommandDescriptor::new("Set-Widget"),
    ]);
    let batch = vec![
        "Get-Widget".to_string(),
        "Set-Widget".to_string(),
        "Get-Missing".to_string(),
    ];

    let reports = run_batch(&batch, &resolver, &ctx).unwrap();
    assert_eq!(reports.len(), 3);

    match &reports[0] {
        CommandReport::Evaluated(report) => assert_eq!(report.command(), "Get-Widget"),
        other => panic!("expected evaluated report, got {other:?}"),
    }
    match &reports[1] {
        CommandReport::Evaluated(report) => assert_eq!(report.command(), "Set-Widget"),
        other => panic!("expected evaluated report, got {other:?}"),
    }
    match &reports[2] {
        CommandReport::Unresolved { name, error } => {
            assert_eq!(name, "Get-Missing");
            assert!(error.contains("Get-Missing"));
            assert!(!reports[2].passed());
        }
        other => panic!("expected unresolved entry, got {other:?}"),
    }
}

#[test]
fn batch_resolves_names_case_insensitively() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);

    let resolver = JsonFileResolver::from_descriptors(vec![CommandDescriptor::new("Get-Widget")]);
    let reports = run_batch(&["get-widget".to_string()], &resolver, &ctx).unwrap();
    assert!(matches!(reports[0], CommandReport::Evaluated(_)));
}

#[test]
fn batch_rejects_out_of_range_options_before_evaluating() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options {
        max_parameters: 513,
        ..Options::default()
    };
    let ctx = context(&names, &verbs, &options);

    let resolver = JsonFileResolver::from_descriptors(vec![CommandDescriptor::new("Get-Widget")]);
    let result = run_batch(&["Get-Widget".to_string()], &resolver, &ctx);
    assert!(result.is_err());
}

#[test]
fn empty_batch_yields_empty_report_list() {
    let names = StandardNameRegistry::builtin();
    let verbs = ApprovedVerbs::builtin();
    let options = Options::default();
    let ctx = context(&names, &verbs, &options);

    let resolver = JsonFileResolver::from_descriptors(vec![]);
    let reports = run_batch(&[], &resolver, &ctx).unwrap();
    assert!(reports.is_empty());
}
