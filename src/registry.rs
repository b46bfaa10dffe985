//! Standard-name and approved-verb registries.
//!
//! Both registries are loaded once per batch from a line-oriented source
//! (one entry per line, `#` comments and blank lines ignored) and are
//! read-only for the remainder of the run. When no file is configured, the
//! built-in lists apply. A load failure is not fatal to the batch: rules
//! that depend on a missing registry record a skip instead.

use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Canonical parameter names recommended by the design guidelines.
///
/// Several naming rules fuzzy-match user parameters against this list — a
/// parameter spelled like a standard name but cased differently is flagged.
#[derive(Debug, Clone)]
pub struct StandardNameRegistry {
    names: Vec<String>,
}

impl StandardNameRegistry {
    /// Builds a registry from an iterator of raw lines.
    ///
    /// Lines are trimmed; blank lines and `#` comments are dropped.
    /// Duplicate entries (case-insensitive) keep their first spelling.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for line in lines {
            let entry = line.as_ref().trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if seen.insert(entry.to_lowercase()) {
                names.push(entry.to_string());
            }
        }
        StandardNameRegistry { names }
    }

    /// Loads a registry from a one-name-per-line file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(content.lines()))
    }

    /// The built-in standard parameter names.
    pub fn builtin() -> Self {
        Self::from_lines(STANDARD_PARAMETER_NAMES.iter().copied())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Returns the canonical spelling for `name`, matched case-insensitively.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(|n| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Verbs sanctioned by the design guidelines.
#[derive(Debug, Clone)]
pub struct ApprovedVerbs {
    verbs: Vec<String>,
}

impl ApprovedVerbs {
    /// Builds the list from an iterator of raw lines (same line format as
    /// [`StandardNameRegistry::from_lines`]).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut verbs = Vec::new();
        for line in lines {
            let entry = line.as_ref().trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if seen.insert(entry.to_lowercase()) {
                verbs.push(entry.to_string());
            }
        }
        ApprovedVerbs { verbs }
    }

    /// Loads the list from a one-verb-per-line file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(content.lines()))
    }

    /// The built-in approved-verb list.
    pub fn builtin() -> Self {
        Self::from_lines(APPROVED_VERBS.iter().copied())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, verb: &str) -> bool {
        self.verbs.iter().any(|v| v.eq_ignore_ascii_case(verb))
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

/// Built-in canonical parameter names.
const STANDARD_PARAMETER_NAMES: &[&str] = &[
    "All",
    "AsJob",
    "ComputerName",
    "Confirm",
    "Credential",
    "Culture",
    "Description",
    "Destination",
    "Exclude",
    "Filter",
    "Force",
    "Id",
    "Include",
    "InputObject",
    "LiteralPath",
    "Name",
    "NoClobber",
    "PassThru",
    "Path",
    "Port",
    "Property",
    "Recurse",
    "Scope",
    "Source",
    "State",
    "Timeout",
    "Uri",
    "Value",
    "Version",
    "Wait",
    "WhatIf",
];

/// Built-in approved verbs.
const APPROVED_VERBS: &[&str] = &[
    "Add", "Approve", "Assert", "Backup", "Block", "Build", "Checkpoint", "Clear", "Close",
    "Compare", "Complete", "Compress", "Confirm", "Connect", "Convert", "ConvertFrom", "ConvertTo",
    "Copy", "Debug", "Deny", "Deploy", "Disable", "Disconnect", "Dismount", "Edit", "Enable",
    "Enter", "Exit", "Expand", "Export", "Find", "Format", "Get", "Grant", "Group", "Hide",
    "Import", "Initialize", "Install", "Invoke", "Join", "Limit", "Lock", "Measure", "Merge",
    "Mount", "Move", "New", "Open", "Optimize", "Out", "Ping", "Pop", "Protect", "Publish",
    "Push", "Read", "Receive", "Redo", "Register", "Remove", "Rename", "Repair", "Request",
    "Reset", "Resize", "Resolve", "Restart", "Restore", "Resume", "Revoke", "Save", "Search",
    "Select", "Send", "Set", "Show", "Skip", "Split", "Start", "Step", "Stop", "Submit",
    "Suspend", "Switch", "Sync", "Test", "Trace", "Unblock", "Undo", "Uninstall", "Unlock",
    "Unprotect", "Unpublish", "Unregister", "Update", "Use", "Wait", "Watch", "Write",
];
