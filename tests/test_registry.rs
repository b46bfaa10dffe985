use cmdlet_lint::registry::{ApprovedVerbs, StandardNameRegistry};
use std::io::Write;

#[test]
fn from_lines_trims_and_drops_blanks_and_comments() {
    let registry = StandardNameRegistry::from_lines([
        "  Path  ",
        "",
        "# canonical names",
        "Name",
        "   ",
    ]);
    assert_eq!(registry.len(), 2);
    assert!(registry.contains("Path"));
    assert!(registry.contains("Name"));
}

#[test]
fn duplicate_entries_keep_their_first_spelling() {
    let registry = StandardNameRegistry::from_lines(["Path", "path", "PATH"]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.canonical("PATH"), Some("Path"));
}

#[test]
fn membership_is_case_insensitive() {
    let registry = StandardNameRegistry::builtin();
    assert!(registry.contains("path"));
    assert!(registry.contains("INPUTOBJECT"));
    assert!(!registry.contains("WidgetLabel"));
}

#[test]
fn canonical_returns_none_for_unknown_names() {
    let registry = StandardNameRegistry::builtin();
    assert_eq!(registry.canonical("WidgetLabel"), None);
    assert_eq!(registry.canonical("literalpath"), Some("LiteralPath"));
}

#[test]
fn builtin_registries_are_nonempty() {
    assert!(!StandardNameRegistry::builtin().is_empty());
    assert!(!ApprovedVerbs::builtin().is_empty());
}

#[test]
fn approved_verbs_match_case_insensitively() {
    let verbs = ApprovedVerbs::builtin();
    assert!(verbs.contains("Get"));
    assert!(verbs.contains("get"));
    assert!(!verbs.contains("Delete"));
    assert!(!verbs.contains("Retrieve"));
}

#[test]
fn load_reads_a_line_oriented_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# project verbs").unwrap();
    writeln!(file, "Get").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  Frobnicate  ").unwrap();

    let verbs = ApprovedVerbs::load(file.path()).unwrap();
    assert_eq!(verbs.len(), 2);
    assert!(verbs.contains("Frobnicate"));
}

#[test]
fn load_propagates_io_errors() {
    let missing = std::path::Path::new("/nonexistent/approved-verbs.txt");
    assert!(ApprovedVerbs::load(missing).is_err());
    assert!(StandardNameRegistry::load(missing).is_err());
}
