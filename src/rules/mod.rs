//! The rule catalogue.
//!
//! Rules are grouped by [`Category`](crate::rule::Category) into one module
//! each. Every module exposes a `rules()` function returning its catalogue
//! entries; [`catalogue`] concatenates them in a fixed order. Each rule is
//! an isolated predicate — adding a rule means writing one function and one
//! catalogue entry, nothing else.
//!
//! | Category | Module | Concern |
//! |----------|--------|---------|
//! | General  | [`general`] | naming, verbs, help link, confirmation |
//! | Input    | [`input`]   | parameter design, sets, pipeline support |
//! | Output   | [`output`]  | output-type declarations |

pub mod general;
pub mod input;
pub mod output;

use crate::rule::Rule;
use std::sync::LazyLock;

/// The shape every hyphen-delimited name segment must match: one to three
/// leading uppercase letters, one or more lowercase/digit/underscore
/// characters, up to two trailing uppercase letters, repeatable.
static RE_PASCAL_SEGMENT: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([A-Z]{1,3}[a-z0-9_]+[A-Z]{0,2})+$").unwrap());

/// Returns `true` when every hyphen-delimited segment of `name` matches the
/// Pascal-case shape. An empty string or empty segment never matches.
pub(crate) fn is_pascal_case(name: &str) -> bool {
    !name.is_empty() && name.split('-').all(|seg| RE_PASCAL_SEGMENT.is_match(seg))
}

/// Skip reason used by rules that scan the command's definition text.
pub(crate) const NO_SOURCE_TEXT: &str = "definition text unavailable";

/// The full catalogue, in evaluation order: General, Input, Output.
pub fn catalogue() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(general::rules());
    rules.extend(input::rules());
    rules.extend(output::rules());
    rules
}

/// Finds a catalogue rule by id.
pub fn find(id: &str) -> Option<Rule> {
    catalogue().into_iter().find(|r| r.id == id)
}
