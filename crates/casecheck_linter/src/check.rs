use casecheck_java_lexer::LexError;

use crate::casing::{classify, suggest};
use crate::extract::extract_occurrences;
use crate::rules::{NamingRules, NamingViolation};

/// Input that cannot be checked. No partial results are produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("input is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("cannot tokenize input: {0}")]
    Lex(#[from] LexError),
}

/// Reports every declared identifier whose casing differs from the style
/// `rules` expects for its role, in order of appearance.
///
/// Roles without an expected style are not checked. Empty input yields no
/// violations. Names written with `\uXXXX` escapes are decoded before they
/// are classified.
pub fn check(source: &str, rules: &NamingRules) -> Result<Vec<NamingViolation>, InputError> {
    let occurrences = extract_occurrences(source)?;
    let total = occurrences.len();

    let violations: Vec<_> = occurrences
        .into_iter()
        .filter_map(|occurrence| {
            let expected = rules.expected(occurrence.role)?;
            let actual = classify(&occurrence.name);
            (actual != expected).then(|| NamingViolation {
                suggested: suggest(&occurrence.name, expected),
                occurrence,
                expected,
                actual,
            })
        })
        .collect();

    tracing::debug!(
        identifiers = total,
        violations = violations.len(),
        "checked naming conventions"
    );
    Ok(violations)
}

/// Like [`check`], decoding `bytes` as UTF-8 first.
pub fn check_bytes(bytes: &[u8], rules: &NamingRules) -> Result<Vec<NamingViolation>, InputError> {
    let source = std::str::from_utf8(bytes)?;
    check(source, rules)
}

#[cfg(test)]
mod tests {
    use casecheck_text_size::TextSize;

    use super::*;
    use crate::casing::CasingStyle;
    use crate::occurrence::Role;

    const FIXTURE: &str = r#"public class TestClass {
    private int _privateVar = 1;    // Should be flagged (leading underscore)
    private int PascalCaseVar = 2;  // Should be flagged (PascalCase)
    private int snake_case_var = 3; // Should be flagged (snake_case)
    private int normalVar = 4;      // This is correct (camelCase)

    public void TestMethod() {      // Should be flagged (PascalCase method)
        int localVar = 5;           // This is correct
    }
}
"#;

    fn field_and_method_rules() -> NamingRules {
        NamingRules::empty()
            .with(Role::Field, CasingStyle::CamelCase)
            .with(Role::Method, CasingStyle::CamelCase)
    }

    fn flagged(violations: &[NamingViolation]) -> Vec<&str> {
        violations.iter().map(NamingViolation::name).collect()
    }

    #[test]
    fn test_fixture_violations() {
        let violations = check(FIXTURE, &field_and_method_rules()).unwrap();
        assert_eq!(
            flagged(&violations),
            vec!["_privateVar", "PascalCaseVar", "snake_case_var", "TestMethod"]
        );

        let actual: Vec<_> = violations.iter().map(|v| v.actual).collect();
        assert_eq!(
            actual,
            vec![
                CasingStyle::LeadingUnderscore,
                CasingStyle::PascalCase,
                CasingStyle::SnakeCase,
                CasingStyle::PascalCase,
            ]
        );
        assert!(violations.iter().all(|v| v.expected == CasingStyle::CamelCase));
        assert_eq!(violations[3].role(), Role::Method);

        let suggested: Vec<_> = violations.iter().map(|v| v.suggested.as_deref()).collect();
        assert_eq!(
            suggested,
            vec![
                Some("privateVar"),
                Some("pascalCaseVar"),
                Some("snakeCaseVar"),
                Some("testMethod"),
            ]
        );
    }

    #[test]
    fn test_fixture_with_default_rules() {
        let violations = check(FIXTURE, &NamingRules::default()).unwrap();
        assert_eq!(
            flagged(&violations),
            vec!["_privateVar", "PascalCaseVar", "snake_case_var", "TestMethod"]
        );
    }

    #[test]
    fn test_unchecked_role_is_not_reported() {
        let source = "class bad_name { void m() { int Local_Var = 1; } }";
        let violations = check(source, &field_and_method_rules()).unwrap();
        assert!(violations.is_empty());

        let violations = check(source, &NamingRules::default()).unwrap();
        assert_eq!(flagged(&violations), vec!["bad_name", "Local_Var"]);
    }

    #[test]
    fn test_constants() {
        let source = "class A {\n    static final int MAX_SIZE = 1;\n    static final int maxSize = 2;\n}";
        let violations = check(source, &NamingRules::default()).unwrap();
        assert_eq!(flagged(&violations), vec!["maxSize"]);
        assert_eq!(violations[0].expected, CasingStyle::UpperSnakeCase);
        assert_eq!((violations[0].occurrence.line, violations[0].occurrence.column), (3, 22));
    }

    #[test]
    fn test_unrecognized_style_is_reported_when_it_differs() {
        let violations = check("class A { int $count; }", &NamingRules::default()).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].actual, CasingStyle::Unrecognized);

        let rules = NamingRules::empty().with(Role::Field, CasingStyle::Unrecognized);
        assert!(check("class A { int $count; }", &rules).unwrap().is_empty());
    }

    #[test]
    fn test_acronym_type_name_is_flagged() {
        let violations = check("class URL {}", &NamingRules::default()).unwrap();
        assert_eq!(flagged(&violations), vec!["URL"]);
        assert_eq!(violations[0].expected, CasingStyle::PascalCase);
        assert_eq!(violations[0].actual, CasingStyle::UpperSnakeCase);
        assert_eq!(violations[0].suggested.as_deref(), Some("Url"));

        let violations = check("class Point { int X1; }", &NamingRules::default()).unwrap();
        assert_eq!(violations[0].actual, CasingStyle::UpperSnakeCase);
    }

    #[test]
    fn test_unicode_escaped_names() {
        let source = "class A { int \\u0061b; int my\\u005fvalue; }";
        let violations = check(source, &NamingRules::default()).unwrap();
        assert_eq!(flagged(&violations), vec!["my_value"]);
        assert_eq!(violations[0].actual, CasingStyle::SnakeCase);
        assert_eq!((violations[0].occurrence.line, violations[0].occurrence.column), (1, 28));
        assert_eq!(&source[violations[0].occurrence.range], "my\\u005fvalue");
    }

    #[test]
    fn test_check_is_idempotent() {
        let rules = field_and_method_rules();
        assert_eq!(check(FIXTURE, &rules), check(FIXTURE, &rules));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(check("", &NamingRules::default()), Ok(vec![]));
        assert_eq!(check_bytes(b"", &NamingRules::default()), Ok(vec![]));
    }

    #[test]
    fn test_bytes_match_str() {
        let rules = NamingRules::default();
        assert_eq!(check_bytes(FIXTURE.as_bytes(), &rules), check(FIXTURE, &rules));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = check_bytes(b"class A { int \xff; }", &NamingRules::default()).unwrap_err();
        assert!(matches!(err, InputError::NotUtf8(_)));
    }

    #[test]
    fn test_lex_error() {
        let err = check("class A { /* never closed", &NamingRules::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::Lex(LexError::UnterminatedComment(TextSize::new(10)))
        );
    }
}
