use casecheck_diagnostics::{Diagnostic, Severity, Violation};
use casecheck_text_size::{Ranged, TextRange};
use serde::{Deserialize, Serialize};

use crate::casing::CasingStyle;
use crate::occurrence::{Occurrence, Role};

/// An identifier whose casing does not match the style expected for its role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamingViolation {
    pub occurrence: Occurrence,
    pub expected: CasingStyle,
    pub actual: CasingStyle,
    /// The name respelled in the expected style, when it can be.
    pub suggested: Option<String>,
}

impl NamingViolation {
    pub fn name(&self) -> &str {
        &self.occurrence.name
    }

    pub fn role(&self) -> Role {
        self.occurrence.role
    }

    /// Flat, serializable form of this violation.
    pub fn to_record(&self) -> ViolationRecord {
        ViolationRecord {
            line: self.occurrence.line,
            column: self.occurrence.column,
            identifier_name: self.occurrence.name.clone(),
            role: self.occurrence.role,
            expected_style: self.expected,
            actual_style: self.actual,
            suggested_name: self.suggested.clone(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.clone(), self.range())
    }
}

impl Violation for NamingViolation {
    fn rule_name(&self) -> &'static str {
        "NamingConvention"
    }

    fn message(&self) -> String {
        format!(
            "Name '{}' must be {} (found {}).",
            self.occurrence.name,
            self.expected.description(),
            self.actual.description()
        )
    }

    /// A name that fits no known style is an error; a name in the wrong
    /// style is a warning.
    fn severity(&self) -> Severity {
        if self.actual.is_unrecognized() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

impl Ranged for NamingViolation {
    fn range(&self) -> TextRange {
        self.occurrence.range
    }
}

/// One violation as reported to users and other tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationRecord {
    pub line: usize,
    pub column: usize,
    pub identifier_name: String,
    pub role: Role,
    pub expected_style: CasingStyle,
    pub actual_style: CasingStyle,
    pub suggested_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use casecheck_text_size::TextSize;

    use super::*;

    fn violation() -> NamingViolation {
        NamingViolation {
            occurrence: Occurrence {
                name: "_privateVar".to_string(),
                role: Role::Field,
                line: 2,
                column: 17,
                range: TextRange::at(TextSize::new(41), TextSize::new(11)),
            },
            expected: CasingStyle::CamelCase,
            actual: CasingStyle::LeadingUnderscore,
            suggested: Some("privateVar".to_string()),
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(
            violation().message(),
            "Name '_privateVar' must be camelCase (found a leading underscore)."
        );
    }

    #[test]
    fn test_diagnostic() {
        let diagnostic = violation().to_diagnostic();
        assert_eq!(diagnostic.kind.name, "NamingConvention");
        assert_eq!(diagnostic.range(), violation().range());
        assert_eq!(diagnostic.kind.body, violation().message());
        assert_eq!(diagnostic.severity, Severity::Warning);
    }

    #[test]
    fn test_unrecognized_name_is_an_error() {
        let violation = NamingViolation {
            actual: CasingStyle::Unrecognized,
            suggested: None,
            ..violation()
        };
        assert!(violation.to_diagnostic().severity.is_error());
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(violation().to_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "line": 2,
                "column": 17,
                "identifierName": "_privateVar",
                "role": "field",
                "expectedStyle": "camelCase",
                "actualStyle": "_leadingUnderscore",
                "suggestedName": "privateVar",
            })
        );

        let unsuggested = NamingViolation {
            suggested: None,
            ..violation()
        };
        let json = serde_json::to_value(unsuggested.to_record()).unwrap();
        assert_eq!(json["suggestedName"], serde_json::Value::Null);
    }
}
