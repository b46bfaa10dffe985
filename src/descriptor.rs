//! Command descriptor data model.
//!
//! A [`CommandDescriptor`] is an immutable snapshot of one callable command's
//! shape — name, parameters with their attributes, parameter-set membership,
//! output-type declarations, help link, and (for source-visible commands) the
//! raw definition text. Descriptors are produced by an external
//! [`CommandResolver`](crate::resolve::CommandResolver) and are never mutated
//! by the rule engine.
//!
//! All types derive [`serde::Deserialize`] so descriptor snapshots can be
//! stored as JSON fixtures and replayed through the CLI without a live shell
//! runtime.

use serde::{Deserialize, Serialize};

/// Marker set name for parameters that belong to every parameter set.
pub const ALL_PARAMETER_SETS: &str = "__AllParameterSets";

/// Common engine-provided parameter names that every advanced command
/// receives automatically. User-declared parameters must not collide with
/// these, and they are excluded from parameter-count ceilings.
pub const COMMON_PARAMETER_NAMES: &[&str] = &[
    "Verbose",
    "Debug",
    "ErrorAction",
    "WarningAction",
    "InformationAction",
    "ErrorVariable",
    "WarningVariable",
    "InformationVariable",
    "OutVariable",
    "OutBuffer",
    "PipelineVariable",
    "UseTransaction",
    "Confirm",
    "WhatIf",
];

/// How the command is implemented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Script function with visible definition text.
    #[default]
    Function,
    /// Alias to another command.
    Alias,
    /// Precompiled binary command — no source text available.
    Compiled,
}

/// One declared parameter and its attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Declared type name (e.g. `string`, `System.Uri`, `int32`).
    #[serde(rename = "type")]
    pub type_name: String,
    pub aliases: Vec<String>,
    pub mandatory: bool,
    /// Declared position, or `None` when the parameter is named-only.
    pub position: Option<i32>,
    pub value_from_pipeline: bool,
    pub value_from_pipeline_by_property_name: bool,
    /// Internal-only visibility flag. Must never be set on a public parameter.
    pub dont_show: bool,
    pub min_range: Option<f64>,
    pub max_range: Option<f64>,
    /// Allowed-value set from a validation attribute, when declared.
    pub valid_values: Option<Vec<String>>,
    /// Parameter sets this parameter belongs to. Empty means "all sets".
    pub member_of_sets: Vec<String>,
}

impl ParameterDescriptor {
    /// Returns `true` if the parameter accepts pipeline input by value or by
    /// property name.
    pub fn accepts_pipeline(&self) -> bool {
        self.value_from_pipeline || self.value_from_pipeline_by_property_name
    }

    /// Returns `true` if this parameter belongs to the named set.
    ///
    /// An empty `member_of_sets` (or an explicit [`ALL_PARAMETER_SETS`]
    /// marker) places the parameter in every set.
    pub fn in_set(&self, set: &str) -> bool {
        self.member_of_sets.is_empty()
            || self
                .member_of_sets
                .iter()
                .any(|s| s == set || s == ALL_PARAMETER_SETS)
    }

    /// Returns `true` if the parameter applies to every parameter set.
    pub fn in_all_sets(&self) -> bool {
        self.member_of_sets.is_empty()
            || self.member_of_sets.iter().any(|s| s == ALL_PARAMETER_SETS)
    }

    /// Returns `true` if this is an engine-provided common parameter.
    pub fn is_common(&self) -> bool {
        COMMON_PARAMETER_NAMES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&self.name))
    }
}

/// A named, mutually exclusive grouping of parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSetDescriptor {
    pub name: String,
    pub is_default: bool,
}

/// Immutable snapshot of one command's introspected metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandDescriptor {
    pub name: String,
    /// Verb segment of the name. Derived from `name` when left empty.
    pub verb: String,
    /// Noun segment of the name. Derived from `name` when left empty.
    pub noun: String,
    pub kind: CommandKind,
    /// Parameters in declaration order. Names are unique within a parameter
    /// set, but one parameter may belong to several sets.
    pub parameters: Vec<ParameterDescriptor>,
    pub parameter_sets: Vec<ParameterSetDescriptor>,
    pub default_parameter_set: Option<String>,
    /// Declared output type names.
    pub output_types: Vec<String>,
    pub help_uri: Option<String>,
    /// Source text of the command body. Absent for precompiled commands;
    /// rules that scan it must skip when it is missing.
    pub raw_definition: Option<String>,
}

impl CommandDescriptor {
    /// Creates a descriptor for `name`, deriving the verb/noun split at the
    /// first hyphen.
    pub fn new(name: &str) -> Self {
        let (verb, noun) = split_verb_noun(name);
        CommandDescriptor {
            name: name.to_string(),
            verb,
            noun,
            ..CommandDescriptor::default()
        }
    }

    /// Verb segment, falling back to the part of `name` before the first
    /// hyphen when the field was not populated by the provider.
    pub fn verb(&self) -> &str {
        if self.verb.is_empty() {
            self.name.split('-').next().unwrap_or("")
        } else {
            &self.verb
        }
    }

    /// Noun segment, falling back to the part of `name` after the first
    /// hyphen when the field was not populated by the provider.
    pub fn noun(&self) -> &str {
        if self.noun.is_empty() {
            match self.name.split_once('-') {
                Some((_, noun)) => noun,
                None => "",
            }
        } else {
            &self.noun
        }
    }

    /// User-declared parameters, with engine-provided common parameters
    /// filtered out.
    pub fn user_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| !p.is_common())
    }

    /// Finds a parameter by name, case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All parameter-set names in play: the declared sets plus any set only
    /// referenced from a parameter's membership list. Yields a single
    /// [`ALL_PARAMETER_SETS`] entry for commands without named sets.
    pub fn set_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .parameter_sets
            .iter()
            .map(|s| s.name.clone())
            .collect();
        for param in &self.parameters {
            for set in &param.member_of_sets {
                if set != ALL_PARAMETER_SETS && !names.iter().any(|n| n == set) {
                    names.push(set.clone());
                }
            }
        }
        if names.is_empty() {
            names.push(ALL_PARAMETER_SETS.to_string());
        }
        names
    }

    /// Parameters belonging to the named set (including all-sets parameters).
    pub fn parameters_in_set<'a>(
        &'a self,
        set: &'a str,
    ) -> impl Iterator<Item = &'a ParameterDescriptor> {
        self.parameters.iter().filter(move |p| p.in_set(set))
    }

    /// The declared default parameter set, from either the explicit field or
    /// a set flagged `is_default`.
    pub fn default_set(&self) -> Option<&str> {
        self.default_parameter_set
            .as_deref()
            .or_else(|| {
                self.parameter_sets
                    .iter()
                    .find(|s| s.is_default)
                    .map(|s| s.name.as_str())
            })
    }
}

/// Splits `Verb-Noun` at the first hyphen. Names without a hyphen become a
/// bare verb with an empty noun.
fn split_verb_noun(name: &str) -> (String, String) {
    match name.split_once('-') {
        Some((verb, noun)) => (verb.to_string(), noun.to_string()),
        None => (name.to_string(), String::new()),
    }
}

// ---------------------------------------------------------------------------
// Type-name classification
// ---------------------------------------------------------------------------
// Descriptors carry declared types as plain strings (`string`,
// `System.Management.Automation.SwitchParameter`, `int[]`). Classification
// compares the final dotted segment, case-insensitively, with any array
// suffix stripped. Live type resolution belongs to the external
// introspection provider, not to this crate.

/// Final dotted segment of a type name, lowercased, `[]` suffix stripped.
fn base_type(type_name: &str) -> String {
    let trimmed = type_name.trim().trim_end_matches("[]");
    trimmed
        .rsplit('.')
        .next()
        .unwrap_or(trimmed)
        .to_lowercase()
}

/// Free-form text type.
pub fn is_string_type(type_name: &str) -> bool {
    base_type(type_name) == "string"
}

/// Plain boolean type (not a switch).
pub fn is_boolean_type(type_name: &str) -> bool {
    matches!(base_type(type_name).as_str(), "bool" | "boolean")
}

/// Flag-style switch type.
pub fn is_switch_type(type_name: &str) -> bool {
    matches!(base_type(type_name).as_str(), "switch" | "switchparameter")
}

/// Dedicated URI type.
pub fn is_uri_type(type_name: &str) -> bool {
    base_type(type_name) == "uri"
}

/// Credential type accepted by the `Credential` standard parameter.
pub fn is_credential_type(type_name: &str) -> bool {
    base_type(type_name) == "pscredential"
}

/// 16/32/64-bit signed or unsigned integer type.
pub fn is_numeric_type(type_name: &str) -> bool {
    matches!(
        base_type(type_name).as_str(),
        "int16"
            | "int32"
            | "int64"
            | "uint16"
            | "uint32"
            | "uint64"
            | "short"
            | "int"
            | "long"
            | "ushort"
            | "uint"
            | "ulong"
    )
}

/// Built-in scalar types that carry no structure worth declaring as a
/// command's output.
pub fn is_primitive_type(type_name: &str) -> bool {
    matches!(
        base_type(type_name).as_str(),
        "string"
            | "char"
            | "bool"
            | "boolean"
            | "byte"
            | "sbyte"
            | "int16"
            | "int32"
            | "int64"
            | "uint16"
            | "uint32"
            | "uint64"
            | "short"
            | "int"
            | "long"
            | "ushort"
            | "uint"
            | "ulong"
            | "single"
            | "float"
            | "double"
            | "decimal"
            | "object"
    )
}

/// Returns `true` when `type_name` has the shape of a resolvable type
/// reference: a non-empty dotted identifier path with an optional `[]`
/// suffix. The actual lookup against a live type system is the
/// introspection provider's concern.
pub fn is_resolvable_type(type_name: &str) -> bool {
    static RE_TYPE_SHAPE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
        regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_+]*(\.[A-Za-z_][A-Za-z0-9_+]*)*(\[\])?$").unwrap()
    });
    RE_TYPE_SHAPE.is_match(type_name.trim())
}
