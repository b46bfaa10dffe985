//! General-category rules: command naming, verb choice, help link, and
//! confirmation support.
//!
//! | ID | Severity | What it checks |
//! |----|----------|----------------|
//! | `general/approved-verb` | Required | Verb appears in the approved-verb list |
//! | `general/name-special-chars` | Required | Name has no shell-special characters |
//! | `general/single-hyphen` | Required | Exactly one verb-noun hyphen |
//! | `general/singular-noun` | Required | Noun is singular |
//! | `general/pascal-case-name` | Required | Name segments are Pascal case |
//! | `general/pascal-case-parameters` | Required | Parameter names are Pascal case |
//! | `general/reserved-parameter-names` | Required | No collision with common parameters |
//! | `general/help-uri-present` | Required | A help URI is declared |
//! | `general/help-uri-resolves` | Required | The help URI answers with a non-error status |
//! | `general/confirm-for-destructive-verb` | Required | Destructive verbs expose `Confirm` |
//! | `general/force-with-high-impact` | Required | High-impact confirmable commands expose `Force` |
//! | `general/avoid-invoke-verb` | Required | `Invoke` only with script/command nouns |
//! | `general/noun-not-empty` | Optional | Name carries a noun segment |

use crate::descriptor::{CommandDescriptor, CommandKind, COMMON_PARAMETER_NAMES};
use crate::rule::{Category, Rule, RuleContext, RuleOutcome, Severity};
use crate::rules::{is_pascal_case, NO_SOURCE_TEXT};
use std::sync::LazyLock;

/// Characters with shell meaning that must not appear in a command name.
const SPECIAL_NAME_CHARS: &[char] = &[
    '#', ',', '(', ')', '{', '}', '[', ']', '&', '/', '\\', '$', '^', ';', ':', '"', '\'', '<',
    '>', '|', '?', '@', '`', '*', '%', '+', '=', '~', ' ',
];

/// Noun suffixes that look plural but are allowed.
const SINGULAR_EXCEPTIONS: &[&str] = &["status", "ous", "ss", "ics"];

/// Verbs whose effect is destructive enough to require confirmation support.
const DESTRUCTIVE_VERBS: &[&str] = &["Stop", "Remove", "Revoke"];

/// Nouns that justify the generic `Invoke` verb.
const INVOKE_NOUN_MARKERS: &[&str] = &["script", "command", "method"];

/// Declaration of an engine-provided common parameter inside source text.
static RE_RESERVED_DECLARATION: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)\$(Verbose|Debug|ErrorAction|WarningAction|InformationAction|ErrorVariable|WarningVariable|InformationVariable|OutVariable|OutBuffer|PipelineVariable|UseTransaction|Confirm|WhatIf)\b",
    )
    .unwrap()
});

/// A `ConfirmImpact = High` declaration inside source text.
static RE_HIGH_IMPACT: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r#"(?i)ConfirmImpact\s*=\s*['"]?High"#).unwrap());

fn approved_verb(d: &CommandDescriptor, ctx: &RuleContext) -> RuleOutcome {
    if d.kind == CommandKind::Alias {
        return RuleOutcome::skipped("aliases carry the target command's verb");
    }
    let Some(verbs) = ctx.approved_verbs else {
        return RuleOutcome::skipped("approved-verb list unavailable");
    };
    if verbs.contains(d.verb()) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([d.verb().to_string()])
    }
}

fn name_special_chars(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let offending: Vec<String> = d
        .name
        .chars()
        .filter(|c| SPECIAL_NAME_CHARS.contains(c))
        .map(|c| c.to_string())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn single_hyphen(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.name.matches('-').count() == 1 {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([d.name.clone()])
    }
}

fn singular_noun(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let noun = d.noun();
    if noun.is_empty() {
        return RuleOutcome::skipped("name has no noun segment");
    }
    let lower = noun.to_lowercase();
    if !lower.ends_with('s') {
        return RuleOutcome::passed();
    }
    if SINGULAR_EXCEPTIONS.iter().any(|suf| lower.ends_with(suf)) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([noun.to_string()])
    }
}

fn pascal_case_name(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let offending: Vec<String> = d
        .name
        .split('-')
        .filter(|seg| !is_pascal_case(seg))
        .map(|seg| seg.to_string())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn pascal_case_parameters(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let mut params = d.user_parameters().peekable();
    if params.peek().is_none() {
        return RuleOutcome::skipped("command declares no parameters");
    }
    let offending: Vec<String> = params
        .filter(|p| !is_pascal_case(&p.name))
        .map(|p| p.name.clone())
        .collect();
    RuleOutcome::fail_if_any(offending)
}

fn reserved_parameter_names(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.kind == CommandKind::Compiled {
        return RuleOutcome::skipped("precompiled command");
    }
    // Introspected parameter tables merge engine-provided common parameters
    // with user declarations, so the collision has to be found in the source
    // text, where only user declarations appear.
    let Some(source) = d.raw_definition.as_deref() else {
        return RuleOutcome::skipped(NO_SOURCE_TEXT);
    };
    let offending: Vec<String> = RE_RESERVED_DECLARATION
        .captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| {
            // Report the canonical casing, not whatever the source used.
            COMMON_PARAMETER_NAMES
                .iter()
                .find(|n| n.eq_ignore_ascii_case(m.as_str()))
                .map(|n| n.to_string())
                .unwrap_or_else(|| m.as_str().to_string())
        })
        .collect();
    let mut deduped = offending;
    deduped.sort();
    deduped.dedup();
    RuleOutcome::fail_if_any(deduped)
}

fn help_uri_present(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    match d.help_uri.as_deref() {
        Some(uri) if !uri.trim().is_empty() => RuleOutcome::passed(),
        _ => RuleOutcome::failed(),
    }
}

fn help_uri_resolves(d: &CommandDescriptor, ctx: &RuleContext) -> RuleOutcome {
    let Some(uri) = d.help_uri.as_deref().filter(|u| !u.trim().is_empty()) else {
        return RuleOutcome::skipped("no help URI declared");
    };
    let Some(probe) = ctx.probe else {
        return RuleOutcome::skipped("no URL probe configured");
    };
    let timeout = ctx.options.probe_timeout;
    // One retry on transport failure; an unreachable help page is then a
    // failure, not a skip.
    let status = probe
        .fetch_status(uri, timeout)
        .or_else(|_| probe.fetch_status(uri, timeout));
    match status {
        Ok(code) if code < 400 => RuleOutcome::passed(),
        Ok(code) => RuleOutcome::failed_with([format!("{uri} returned status {code}")]),
        Err(e) => RuleOutcome::failed_with([format!("{uri}: {e}")]),
    }
}

fn confirm_for_destructive_verb(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if !DESTRUCTIVE_VERBS
        .iter()
        .any(|v| v.eq_ignore_ascii_case(d.verb()))
    {
        return RuleOutcome::skipped("verb is not destructive");
    }
    if d.parameter("Confirm").is_some() {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([d.verb().to_string()])
    }
}

fn force_with_high_impact(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    let Some(source) = d.raw_definition.as_deref() else {
        return RuleOutcome::skipped(NO_SOURCE_TEXT);
    };
    if !RE_HIGH_IMPACT.is_match(source) || d.parameter("Confirm").is_none() {
        return RuleOutcome::passed();
    }
    if d.parameter("Force").is_some() {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed()
    }
}

fn avoid_invoke_verb(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if !d.verb().eq_ignore_ascii_case("Invoke") {
        return RuleOutcome::passed();
    }
    let noun = d.noun().to_lowercase();
    if noun == "item" || INVOKE_NOUN_MARKERS.iter().any(|m| noun.contains(m)) {
        RuleOutcome::passed()
    } else {
        RuleOutcome::failed_with([d.noun().to_string()])
    }
}

fn noun_not_empty(d: &CommandDescriptor, _ctx: &RuleContext) -> RuleOutcome {
    if d.noun().is_empty() {
        RuleOutcome::failed_with([d.name.clone()])
    } else {
        RuleOutcome::passed()
    }
}

/// General-category catalogue entries.
pub fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "general/approved-verb",
            category: Category::General,
            severity: Severity::Required,
            rationale: "The verb must come from the approved-verb list because nonstandard verbs make commands hard to discover",
            predicate: approved_verb,
        },
        Rule {
            id: "general/name-special-chars",
            category: Category::General,
            severity: Severity::Required,
            rationale: "The name must avoid shell-special characters because they break tab completion and tokenization",
            predicate: name_special_chars,
        },
        Rule {
            id: "general/single-hyphen",
            category: Category::General,
            severity: Severity::Required,
            rationale: "The name must contain exactly one hyphen because the verb-noun split is defined by it",
            predicate: single_hyphen,
        },
        Rule {
            id: "general/singular-noun",
            category: Category::General,
            severity: Severity::Required,
            rationale: "The noun must be singular because commands operate on one kind of thing and pluralization is expressed by the pipeline",
            predicate: singular_noun,
        },
        Rule {
            id: "general/pascal-case-name",
            category: Category::General,
            severity: Severity::Required,
            rationale: "Name segments must use Pascal case because mixed casing is the convention every standard command follows",
            predicate: pascal_case_name,
        },
        Rule {
            id: "general/pascal-case-parameters",
            category: Category::General,
            severity: Severity::Required,
            rationale: "Parameter names must use Pascal case because mixed casing is the convention every standard parameter follows",
            predicate: pascal_case_parameters,
        },
        Rule {
            id: "general/reserved-parameter-names",
            category: Category::General,
            severity: Severity::Required,
            rationale: "Parameters must not collide with common parameter names because the engine provides those automatically",
            predicate: reserved_parameter_names,
        },
        Rule {
            id: "general/help-uri-present",
            category: Category::General,
            severity: Severity::Required,
            rationale: "A help URI must be declared because online help is the primary documentation channel",
            predicate: help_uri_present,
        },
        Rule {
            id: "general/help-uri-resolves",
            category: Category::General,
            severity: Severity::Required,
            rationale: "The help URI must resolve because a dead documentation link is worse than none",
            predicate: help_uri_resolves,
        },
        Rule {
            id: "general/confirm-for-destructive-verb",
            category: Category::General,
            severity: Severity::Required,
            rationale: "Destructive verbs must support -Confirm because irreversible actions need an interactive guard",
            predicate: confirm_for_destructive_verb,
        },
        Rule {
            id: "general/force-with-high-impact",
            category: Category::General,
            severity: Severity::Required,
            rationale: "High-impact confirmable commands must offer -Force because unattended scripts need a way past the prompt",
            predicate: force_with_high_impact,
        },
        Rule {
            id: "general/avoid-invoke-verb",
            category: Category::General,
            severity: Severity::Required,
            rationale: "The generic Invoke verb should be avoided because a specific verb describes the action better",
            predicate: avoid_invoke_verb,
        },
        Rule {
            id: "general/noun-not-empty",
            category: Category::General,
            severity: Severity::Optional,
            rationale: "The name should carry a noun segment because a bare verb says nothing about the target",
            predicate: noun_not_empty,
        },
    ]
}
