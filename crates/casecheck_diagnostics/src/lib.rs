//! Diagnostics produced by casecheck checks.

use std::fmt;

use casecheck_text_size::{Ranged, TextRange};
use get_size2::GetSize;
use is_macro::Is;

/// A problem found by a check, independent of where it was found.
pub trait Violation: fmt::Debug {
    /// Stable name of the check that reports this violation.
    fn rule_name(&self) -> &'static str;

    /// Human-readable description, ending with a period.
    fn message(&self) -> String;

    fn severity(&self) -> Severity {
        Severity::Warning
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Is, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// The rendered form of a [`Violation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticKind {
    /// Rule name, e.g. `NamingConvention`.
    pub name: String,
    /// Message body.
    pub body: String,
}

impl<T: Violation> From<T> for DiagnosticKind {
    fn from(violation: T) -> Self {
        Self {
            name: violation.rule_name().to_string(),
            body: violation.message(),
        }
    }
}

/// A violation attached to a location in source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new<T: Violation>(violation: T, range: TextRange) -> Self {
        let severity = violation.severity();
        Self {
            kind: DiagnosticKind::from(violation),
            severity,
            range,
        }
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}
