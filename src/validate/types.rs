//! Violation and report types.

use crate::error::{Result, SpecError};
use serde::Serialize;
use std::fmt;

/// Category of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Name does not match the lowercase-hyphenated pattern.
    InvalidName,
    /// Version is not `X.Y.Z`.
    InvalidVersion,
    /// A collection that must have entries is empty.
    Empty,
    /// A name reference does not resolve.
    UnknownReference,
    /// A reference string is not of the form `step.port`.
    MalformedReference,
    /// A name that must be unique appears more than once.
    Duplicate,
    /// `depends_on` edges form a cycle.
    Cycle,
    /// A field is set where it does not apply.
    MisplacedField,
    /// A task lacks the field its type implies.
    MissingTaskField,
    /// A tool outside the canonical vocabulary.
    NonCanonicalTool,
    /// Two fields that must agree do not.
    Mismatch,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidVersion => "invalid_version",
            Self::Empty => "empty",
            Self::UnknownReference => "unknown_reference",
            Self::MalformedReference => "malformed_reference",
            Self::Duplicate => "duplicate",
            Self::Cycle => "cycle",
            Self::MisplacedField => "misplaced_field",
            Self::MissingTaskField => "missing_task_field",
            Self::NonCanonicalTool => "non_canonical_tool",
            Self::Mismatch => "mismatch",
        }
    }
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Dotted path to the offending field, e.g. `workflow.steps[1].depends_on[0]`.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Result of validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create a passing report.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Create a report from collected violations.
    pub fn fail(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Pass when `violations` is empty, fail otherwise.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::pass()
        } else {
            Self::fail(violations)
        }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Append another report's violations.
    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    /// Violations at `path` or below it.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| {
            v.path == path
                || v.path
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }

    /// Format the report for a terminal.
    ///
    /// ```text
    /// 2 violations found
    ///
    ///   x team.orchestrator: 'lead' is not one of the team's agents
    ///   x workflow.steps[1].depends_on[0]: unknown step 'fetch'
    /// ```
    pub fn format_error(&self) -> String {
        if self.passed() {
            return String::new();
        }

        let count = self.violations.len();
        let mut msg = format!(
            "{} violation{} found\n\n",
            count,
            if count == 1 { "" } else { "s" }
        );
        for violation in &self.violations {
            msg.push_str(&format!("  x {}\n", violation));
        }
        msg
    }

    /// `Ok(())` if passed, otherwise a validation error carrying the report text.
    pub fn into_result(self) -> Result<()> {
        if self.passed() {
            Ok(())
        } else {
            Err(SpecError::ValidationError(self.format_error()))
        }
    }
}
