use cmdlet_lint::aggregate::AggregationMode;
use cmdlet_lint::config::{severity_filter, Config, ConfigError, Options, MAX_PARAMETERS_LIMIT};
use cmdlet_lint::rule::SeverityFilter;
use std::io::Write;

#[test]
fn explicit_missing_path_is_an_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/cmdlet-lint.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn full_config_file_parses() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[run]
include_optional = true
max_parameters = 12
probe_timeout_ms = 500

[registry]
approved_verbs = "verbs.txt"
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert!(config.run.include_optional);
    assert!(!config.run.include_work_in_progress);
    assert_eq!(config.run.max_parameters, 12);
    assert_eq!(config.run.probe_timeout_ms, 500);
    assert_eq!(
        config.registry.approved_verbs.as_deref(),
        Some(std::path::Path::new("verbs.txt"))
    );
    assert!(config.registry.standard_names.is_none());
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[run]\ninclude_optional = true\n").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.run.max_parameters, 30);
    assert_eq!(config.run.probe_timeout_ms, 2000);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[run\ninclude_optional = maybe").unwrap();

    let result = Config::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn options_inherit_the_configured_thresholds() {
    let mut config = Config::default();
    config.run.max_parameters = 8;
    config.run.include_work_in_progress = true;

    let options = config.options(AggregationMode::Summary).unwrap();
    assert_eq!(options.max_parameters, 8);
    assert_eq!(
        options.severity_filter,
        SeverityFilter::IncludeWorkInProgress
    );
    assert_eq!(options.mode, AggregationMode::Summary);
}

#[test]
fn out_of_range_ceiling_is_rejected() {
    let mut config = Config::default();
    config.run.max_parameters = MAX_PARAMETERS_LIMIT + 1;

    let result = config.options(AggregationMode::Boolean);
    assert!(matches!(
        result,
        Err(ConfigError::MaxParametersOutOfRange(n)) if n == MAX_PARAMETERS_LIMIT + 1
    ));
}

#[test]
fn ceiling_at_the_limit_is_accepted() {
    let options = Options {
        max_parameters: MAX_PARAMETERS_LIMIT,
        ..Options::default()
    };
    assert!(options.validated().is_ok());
}

#[test]
fn severity_filter_mapping_treats_wip_as_the_widest() {
    assert_eq!(severity_filter(false, false), SeverityFilter::Required);
    assert_eq!(severity_filter(true, false), SeverityFilter::IncludeOptional);
    assert_eq!(
        severity_filter(false, true),
        SeverityFilter::IncludeWorkInProgress
    );
    assert_eq!(
        severity_filter(true, true),
        SeverityFilter::IncludeWorkInProgress
    );
}

#[test]
fn default_options_run_required_rules_in_boolean_mode() {
    let options = Options::default();
    assert_eq!(options.severity_filter, SeverityFilter::Required);
    assert_eq!(options.max_parameters, 30);
    assert_eq!(options.mode, AggregationMode::Boolean);
}
