//! Input-category rules: parameter design, parameter-set consistency, and
//! pipeline support.
//!
//! | ID | Severity | What it checks |
//! |----|----------|----------------|
//! | `input/switch-not-positional` | Required | Switch parameters are named-only |
//! | `input/no-dontshow-parameters` | Required | No hidden public parameters |
//! | `input/non-functional-marker` | Required | No stub-parameter marker in the source |
//! | `input/get-verb-no-mandatory` | Required | Get commands have no mandatory default-set parameters |
//! | `input/positional-when-mandatory` | Required | Mandatory parameters imply a positional one |
//! | `input/strongly-typed-parameters` | Required | Not every parameter is free-form text |
//! | `input/no-boolean-parameters` | Required | Boolean parameters are switches (except `All`) |
//! | `input/validate-set-not-boolean` | Optional | `{true, false}` value sets become switches |
//! | `input/pipeline-input-support` | Required | At least one parameter accepts pipeline input |
//! | `input/input-object-present` | WIP | An `InputObject` parameter exists |
//! | `input/test-verb-boolean-output` | Required | Test commands declare a boolean output |
//! | `input/path-has-pspath-alias` | Required | `Path` carries a `PSPath` alias |
//! | `input/path-is-string` | Required | `Path` is string-typed |
//! | `input/uri-typed-parameter` | Required | `Uri` uses a dedicated URI type |
//! | `input/numeric-range-declared` | Optional | Numeric parameters declare a range |
//! | `input/input-object-type-resolves` | Required | `InputObject`'s type reference resolves |
//! | `input/parameter-count-ceiling` | Required | Parameter count stays under the ceiling |
//! | `input/positional-count-ceiling` | Required | At most 4 positional parameters per set |
//! | `input/position-collision` | Required | No duplicate positions within a set |
//! | `input/one-pipeline-by-value` | Required | At most one by-value pipeline parameter per set |
//! | `input/parameter-set-distinctness` | Required | Each of 3+ sets has a unique parameter |
//! | `input/default-set-required` | Required | Ambiguous set layouts declare a default |
//! | `input/standard-name-casing` | Optional | Standard names use canonical casing |
//! | `input/credential-typed-parameter` | Optional | `Credential` uses the credential type |

use crate::descriptor::{
    is_boolean_type, is_credential_type, is_numeric_type, is_resolvable_type, is_string_type,
    is_switch_type, is_uri_type, CommandDescriptor, ParameterDescriptor, ALL_PARAMETER_SETS,
};
use crate::rule::{Category, Rule, RuleContext, RuleOutcome, Severity};
use crate::rules::NO_SOURCE_TEXT;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Ceiling on positional parameters within one parameter set.
const MAX_POSITIONAL_PER_SET: usize = 4;

/// Marker phrase documenting a parameter stub in definition text.
static RE_NON_FUNCTIONAL: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)\bis not functional\b").unwrap());

/// Named parameter sets, excluding the all-sets marker.
fn named_sets(d: &CommandDescriptor) -> Vec<String> {
    d.set_names()
        .into_iter()
        .filter(|s| s != ALL_PARAMETER_SETS)
        .collect()
}

/// Parameters exclusive to `set`: members of that set and no other.
fn unique_params<'a>(d: &'a CommandDescriptor, set: &str) -> Vec<&'a ParameterDescriptor> {
    d.parameters
        .iter()
        .filter(|p| !p.in_all_sets() && p.member_of_sets.len() == 1 && p.member_of_sets[0] == set)
        .collect()
}

fn switch_not_positional(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let offending: Vec<String> = d
        .user_parameters()
        .filter(|p| is_switch_type(&p.type_name) && p.position.is_some())
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn no_dontshow_parameters(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let offending: Vec<String> = d
        .user_parameters()
        .filter(|p| p.dont_show)
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn non_functional_marker(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(source) = d.raw_definition.as_deref() else {
        return RuleOutcome::skipped(NO_SOURCE_TEXT);
    };
    if RE_NON_FUNCTIONAL.is_match(source) {
        RuleOutcome::failed()
    } else {
        RuleOutcome::passed()
    }
}

fn get_verb_no_mandatory(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if !d.verb().eq_ignore_ascii_case("Get") {
        return RuleOutcome::skipped("verb is not Get");
    }
    let default = d.default_set();
    let offending: Vec<String> = d
        .user_parameters()
        .filter(|p| p.mandatory)
        .filter(|p| p.in_all_sets() || default.map(|s| p.in_set(s)).unwrap_or(false))
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn positional_when_mandatory(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if !d.user_parameters().any(|p| p.mandatory) {
        return RuleOutcome::skipped("no mandatory parameters");
    }
    if d.user_parameters().any(|p| p.position.is_some()) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed()
    }
}

fn strongly_typed_parameters(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let mut params = d.user_parameters().peekable();
    if params.peek().is_none() {
        return RuleOutcome::skipped("command declares no parameters");
    }
    // An empty type declaration is as weak as an explicit string.
    let all_free_form = params.all(|p| p.type_name.is_empty() || is_string_type(&p.type_name));
    if all_free_form {
        RuleOutcome::failed()
    } else {
        RuleOutcome::passed()
    }
}

fn no_boolean_parameters(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let offending: Vec<String> = d
        .user_parameters()
        .filter(|p| is_boolean_type(&p.type_name) && !p.name.eq_ignore_ascii_case("All"))
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn validate_set_not_boolean(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let offending: Vec<String> = d
        .user_parameters()
        .filter(|p| {
            let Some(values) = p.valid_values.as_ref() else {
                return false;
            };
            if values.len() != 2 {
                return false;
            }
            let normalized: Vec<String> = values
                .iter()
                .map(|v| v.trim().trim_start_matches('$').to_lowercase())
                .collect();
            normalized.contains(&"true".to_string()) && normalized.contains(&"false".to_string())
        })
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn pipeline_input_support(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.parameters.iter().any(|p| p.accepts_pipeline()) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed()
    }
}

fn input_object_present(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.parameter("InputObject").is_some() {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed()
    }
}

fn test_verb_boolean_output(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if !d.verb().eq_ignore_ascii_case("Test") {
        return RuleOutcome::skipped("verb is not Test");
    }
    if d.output_types.iter().any(|t| is_boolean_type(t)) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed()
    }
}

fn path_has_pspath_alias(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(path) = d.parameter("Path") else {
        return RuleOutcome::skipped("no Path parameter");
    };
    if d.raw_definition.is_none() {
        return RuleOutcome::skipped(NO_SOURCE_TEXT);
    }
    if path.aliases.iter().any(|a| a.eq_ignore_ascii_case("PSPath")) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([path.name.clone()])
    }
}

fn path_is_string(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(path) = d.parameter("Path") else {
        return RuleOutcome::skipped("no Path parameter");
    };
    if is_string_type(&path.type_name) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([path.type_name.clone()])
    }
}

fn uri_typed_parameter(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(uri) = d.parameter("Uri") else {
        return RuleOutcome::skipped("no Uri parameter");
    };
    if is_uri_type(&uri.type_name) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([uri.type_name.clone()])
    }
}

fn numeric_range_declared(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let mut numeric = d
        .user_parameters()
        .filter(|p| is_numeric_type(&p.type_name))
        .peekable();
    if numeric.peek().is_none() {
        return RuleOutcome::skipped("no numeric parameters");
    }
    let offending: Vec<String> = numeric
        .filter(|p| p.min_range.is_none() && p.max_range.is_none())
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn input_object_type_resolves(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(input_object) = d.parameter("InputObject") else {
        return RuleOutcome::skipped("no InputObject parameter");
    };
    if is_resolvable_type(&input_object.type_name) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([input_object.type_name.clone()])
    }
}

fn parameter_count_ceiling(d: &CommandDescriptor, ctx: &RuleContext) -> RuleOutcome {
    let count = d.user_parameters().count();
    let ceiling = ctx.options.max_parameters as usize;
    if count > ceiling {
        RuleOutcome::failed_with([format!("{count} parameters (ceiling {ceiling})")])
    } else {
        RuleOutcome::passed()
    }
}

fn positional_count_ceiling(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let mut offending = Vec::new();
    for set in d.set_names() {
        let positional = d
            .parameters_in_set(&set)
            .filter(|p| p.position.is_some())
            .count();
        if positional > MAX_POSITIONAL_PER_SET {
            offending.push(format!("{set} ({positional} positional)"));
        }
    }
    RuleOutcome::fail_if_any(offending)
}

fn position_collision(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let mut offending = Vec::new();
    for set in d.set_names() {
        let mut by_position: HashMap<i32, Vec<&str>> = HashMap::new();
        for param in d.parameters_in_set(&set) {
            if let Some(pos) = param.position {
                by_position.entry(pos).or_default().push(&param.name);
            }
        }
        let mut collisions: Vec<_> = by_position
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .collect();
        collisions.sort_by_key(|(pos, _)| *pos);
        for (pos, names) in collisions {
            offending.push(format!("{set}: position {pos} ({})", names.join(", ")));
        }
    }
    RuleOutcome::fail_if_any(offending)
}

fn one_pipeline_by_value(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let mut offending = Vec::new();
    for set in d.set_names() {
        let by_value: Vec<&str> = d
            .parameters_in_set(&set)
            .filter(|p| p.value_from_pipeline)
            .map(|p| p.name.as_str())
            .collect();
        if by_value.len() > 1 {
            offending.push(format!("{set} ({})", by_value.join(", ")));
        }
    }
    RuleOutcome::fail_if_any(offending)
}

fn parameter_set_distinctness(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let sets = named_sets(d);
    if sets.len() < 3 {
        return RuleOutcome::skipped("fewer than three parameter sets");
    }
    let offending: Vec<String> = sets
        .into_iter()
        .filter(|set| unique_params(d, set).is_empty())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn default_set_required(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.default_set().is_some() {
        return RuleOutcome::skipped("default parameter set declared");
    }
    let sets = named_sets(d);
    if sets.len() < 2 {
        return RuleOutcome::skipped("fewer than two parameter sets");
    }
    // Resolution between two sets is ambiguous when their exclusive
    // parameters carry equal mandatory counts; only a declared default
    // breaks the tie.
    let mandatory_counts: Vec<(String, usize)> = sets
        .into_iter()
        .map(|set| {
            let count = unique_params(d, &set).iter().filter(|p| p.mandatory).count();
            (set, count)
        })
        .collect();
    let mut offending = Vec::new();
    for (i, (set_a, count_a)) in mandatory_counts.iter().enumerate() {
        for (set_b, count_b) in &mandatory_counts[i + 1..] {
            if count_a == count_b {
                offending.push(format!("{set_a} / {set_b}"));
            }
        }
    }
    RuleOutcome::fail_if_any(offending)
}

fn standard_name_casing(d: &CommandDescriptor, ctx: &RuleContext) -> RuleOutcome {
    let Some(registry) = ctx.standard_names else {
        return RuleOutcome::skipped("standard-name registry unavailable");
    };
    let mut params = d.user_parameters().peekable();
    if params.peek().is_none() {
        return RuleOutcome::skipped("command declares no parameters");
    }
    let offending: Vec<String> = params
        .filter_map(|p| {
            registry
                .canonical(&p.name)
                .filter(|canonical| *canonical != p.name)
                .map(|canonical| format!("{} (use {canonical})", p.name))
        })
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn credential_typed_parameter(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(credential) = d.parameter("Credential") else {
        return RuleOutcome::skipped("no Credential parameter");
    };
    if is_credential_type(&credential.type_name) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([credential.type_name.clone()])
    }
}

/// Input-category catalogue entries.
pub fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "input/switch-not-positional",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Switch parameters must not be positional because a bare flag given by position reads as a value",
            predicate: switch_not_positional,
        },
        Rule {
            id: "input/no-dontshow-parameters",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Public parameters must not set DontShow because hiding a parameter defeats discoverability",
            predicate: no_dontshow_parameters,
        },
        Rule {
            id: "input/non-functional-marker",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "The definition must not document a non-functional parameter because stub parameters mislead callers",
            predicate: non_functional_marker,
        },
        Rule {
            id: "input/get-verb-no-mandatory",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Get commands must not require default-set parameters because a bare Get call should always work",
            predicate: get_verb_no_mandatory,
        },
        Rule {
            id: "input/positional-when-mandatory",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "A command with mandatory parameters must make one positional because the most common argument should not need a name",
            predicate: positional_when_mandatory,
        },
        Rule {
            id: "input/strongly-typed-parameters",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Not every parameter should be free-form text because strong typing catches bad input before the command runs",
            predicate: strongly_typed_parameters,
        },
        Rule {
            id: "input/no-boolean-parameters",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Boolean parameters should be switches because -Flag reads better than -Flag $true",
            predicate: no_boolean_parameters,
        },
        Rule {
            id: "input/validate-set-not-boolean",
            category: Category::Input,
            severity: Severity::Optional,
            rationale: "A true/false value set should be a switch because the validation attribute re-implements one",
            predicate: validate_set_not_boolean,
        },
        Rule {
            id: "input/pipeline-input-support",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "At least one parameter must accept pipeline input because composability is the point of the pipeline",
            predicate: pipeline_input_support,
        },
        Rule {
            id: "input/input-object-present",
            category: Category::Input,
            severity: Severity::WorkInProgress,
            rationale: "An InputObject parameter should exist because it is the conventional pipeline entry point",
            predicate: input_object_present,
        },
        Rule {
            id: "input/test-verb-boolean-output",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Test commands must declare a boolean output because callers branch on the result",
            predicate: test_verb_boolean_output,
        },
        Rule {
            id: "input/path-has-pspath-alias",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "A Path parameter must alias PSPath because provider-qualified paths arrive under that name",
            predicate: path_has_pspath_alias,
        },
        Rule {
            id: "input/path-is-string",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "A Path parameter must be string-typed because paths with wildcards do not survive other types",
            predicate: path_is_string,
        },
        Rule {
            id: "input/uri-typed-parameter",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "A Uri parameter must use the dedicated URI type because string URIs skip scheme validation",
            predicate: uri_typed_parameter,
        },
        Rule {
            id: "input/numeric-range-declared",
            category: Category::Input,
            severity: Severity::Optional,
            rationale: "Numeric parameters should declare a range because unbounded numbers invite nonsense input",
            predicate: numeric_range_declared,
        },
        Rule {
            id: "input/input-object-type-resolves",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "The InputObject type must resolve because an unresolvable type fails at first pipeline bind",
            predicate: input_object_type_resolves,
        },
        Rule {
            id: "input/parameter-count-ceiling",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "The parameter count must stay under the ceiling because an oversized surface means the command does too much",
            predicate: parameter_count_ceiling,
        },
        Rule {
            id: "input/positional-count-ceiling",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Each parameter set allows at most four positional parameters because longer positional runs are unreadable",
            predicate: positional_count_ceiling,
        },
        Rule {
            id: "input/position-collision",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Two parameters in one set must not share a position because binding would be ambiguous",
            predicate: position_collision,
        },
        Rule {
            id: "input/one-pipeline-by-value",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Only one parameter per set may bind the pipeline by value because the binder cannot split one object two ways",
            predicate: one_pipeline_by_value,
        },
        Rule {
            id: "input/parameter-set-distinctness",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "Each of three or more parameter sets needs a unique parameter because otherwise the sets cannot be told apart",
            predicate: parameter_set_distinctness,
        },
        Rule {
            id: "input/default-set-required",
            category: Category::Input,
            severity: Severity::Required,
            rationale: "A default parameter set must be declared because resolution between the sets is otherwise ambiguous",
            predicate: default_set_required,
        },
        Rule {
            id: "input/standard-name-casing",
            category: Category::Input,
            severity: Severity::Optional,
            rationale: "Standard parameter names should use their canonical casing because near-miss spellings confuse completion",
            predicate: standard_name_casing,
        },
        Rule {
            id: "input/credential-typed-parameter",
            category: Category::Input,
            severity: Severity::Optional,
            rationale: "A Credential parameter should use the credential type because string credentials leak into logs",
            predicate: credential_typed_parameter,
        },
    ]
}
