//! Casing style classification.
//!
//! [`classify`] is total: every string, including the empty string, maps to
//! exactly one [`CasingStyle`].

use std::fmt;
use std::str::FromStr;

use is_macro::Is;
use serde::{Deserialize, Serialize};

/// The lexical convention used to separate words within an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Is, Serialize, Deserialize)]
pub enum CasingStyle {
    /// `normalVar`
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `PascalCaseVar`
    #[serde(rename = "PascalCase")]
    PascalCase,
    /// `snake_case_var`
    #[serde(rename = "snake_case")]
    SnakeCase,
    /// `MAX_SIZE`
    #[serde(rename = "UPPER_SNAKE_CASE")]
    UpperSnakeCase,
    /// `_privateVar`
    #[serde(rename = "_leadingUnderscore")]
    LeadingUnderscore,
    /// Anything else: empty, leading digit, `$`, caseless letters.
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl CasingStyle {
    pub const ALL: [CasingStyle; 6] = [
        CasingStyle::CamelCase,
        CasingStyle::PascalCase,
        CasingStyle::SnakeCase,
        CasingStyle::UpperSnakeCase,
        CasingStyle::LeadingUnderscore,
        CasingStyle::Unrecognized,
    ];

    /// Canonical spelling, as accepted in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            CasingStyle::CamelCase => "camelCase",
            CasingStyle::PascalCase => "PascalCase",
            CasingStyle::SnakeCase => "snake_case",
            CasingStyle::UpperSnakeCase => "UPPER_SNAKE_CASE",
            CasingStyle::LeadingUnderscore => "_leadingUnderscore",
            CasingStyle::Unrecognized => "unrecognized",
        }
    }

    /// Prose description used in messages.
    pub const fn description(self) -> &'static str {
        match self {
            CasingStyle::CamelCase => "camelCase",
            CasingStyle::PascalCase => "PascalCase",
            CasingStyle::SnakeCase => "snake_case",
            CasingStyle::UpperSnakeCase => "UPPER_SNAKE_CASE",
            CasingStyle::LeadingUnderscore => "a leading underscore",
            CasingStyle::Unrecognized => "an unrecognized style",
        }
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style name that is neither canonical nor a known alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown casing style '{0}'")]
pub struct UnknownStyle(pub String);

impl FromStr for CasingStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(style) = CasingStyle::ALL.into_iter().find(|style| style.as_str() == s) {
            return Ok(style);
        }

        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "camel" | "camelcase" | "camel_case" => Ok(CasingStyle::CamelCase),
            "pascal" | "pascalcase" | "pascal_case" => Ok(CasingStyle::PascalCase),
            "snake" | "snake_case" => Ok(CasingStyle::SnakeCase),
            "upper_snake" | "upper_snake_case" | "screaming_snake" | "screaming_snake_case" => {
                Ok(CasingStyle::UpperSnakeCase)
            }
            "leading_underscore" | "_leadingunderscore" => Ok(CasingStyle::LeadingUnderscore),
            "unrecognized" => Ok(CasingStyle::Unrecognized),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

/// Classifies the casing style of `name`.
///
/// Checks run in priority order: a leading underscore wins over everything,
/// and underscore-delimited styles win over case-based ones. An
/// underscore-free name of two or more characters without any lowercase
/// letter (`MAX`, `ID`) counts as `UPPER_SNAKE_CASE`; a lone uppercase letter
/// counts as `PascalCase`.
pub fn classify(name: &str) -> CasingStyle {
    let Some(first) = name.chars().next() else {
        return CasingStyle::Unrecognized;
    };

    if first == '_' {
        return CasingStyle::LeadingUnderscore;
    }

    if !first.is_alphabetic() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return CasingStyle::Unrecognized;
    }

    let has_lowercase = name.chars().any(char::is_lowercase);
    let has_uppercase = name.chars().any(char::is_uppercase);

    if name.contains('_') {
        return if has_uppercase && !has_lowercase {
            CasingStyle::UpperSnakeCase
        } else {
            CasingStyle::SnakeCase
        };
    }

    if has_uppercase && !has_lowercase && name.chars().count() > 1 {
        return CasingStyle::UpperSnakeCase;
    }

    if first.is_uppercase() {
        CasingStyle::PascalCase
    } else if first.is_lowercase() {
        CasingStyle::CamelCase
    } else {
        CasingStyle::Unrecognized
    }
}

/// Respells `name` in `style`, keeping its words.
///
/// Returns `None` for [`CasingStyle::Unrecognized`], for names without
/// words, and when the respelled name would not itself classify as `style`
/// (a word starting with a digit, caseless letters).
pub fn suggest(name: &str, style: CasingStyle) -> Option<String> {
    let words = split_words(name);
    if words.is_empty() {
        return None;
    }

    let camel = || -> String {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| if i == 0 { word.to_lowercase() } else { capitalize(word) })
            .collect()
    };
    let suggestion = match style {
        CasingStyle::CamelCase => camel(),
        CasingStyle::PascalCase => words.iter().map(|word| capitalize(word)).collect(),
        CasingStyle::SnakeCase => join(&words, str::to_lowercase),
        CasingStyle::UpperSnakeCase => join(&words, str::to_uppercase),
        CasingStyle::LeadingUnderscore => format!("_{}", camel()),
        CasingStyle::Unrecognized => return None,
    };

    (suggestion != name && classify(&suggestion) == style).then_some(suggestion)
}

/// Splits on `_`, `$` and case changes. An uppercase run followed by a
/// lowercase letter ends before its last letter (`URLParser` is `URL`,
/// `Parser`); digits stay with the word before them.
fn split_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for segment in name.split(['_', '$']) {
        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let mut start = 0;
        for (k, &(offset, c)) in chars.iter().enumerate().skip(1) {
            let previous = chars[k - 1].1;
            let next_is_lower = chars.get(k + 1).is_some_and(|&(_, next)| next.is_lowercase());
            let starts_word = c.is_uppercase()
                && (previous.is_lowercase()
                    || previous.is_numeric()
                    || (previous.is_uppercase() && next_is_lower));
            if starts_word {
                words.push(&segment[start..offset]);
                start = offset;
            }
        }
        if start < segment.len() {
            words.push(&segment[start..]);
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join(words: &[&str], case: fn(&str) -> String) -> String {
    words.iter().map(|word| case(word)).collect::<Vec<_>>().join("_")
}
