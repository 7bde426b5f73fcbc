//! Identifier naming-convention checks for Java source.
//!
//! The pipeline is: tokenize, extract declared identifiers with their role
//! ([`extract_occurrences`]), classify each name ([`classify`]), and compare
//! against the expected style for the role ([`check`]).

use std::collections::HashMap;

use casecheck_source_file::{LineIndex, SourceLocation};
use casecheck_text_size::TextSize;

mod casing;
mod check;
mod extract;
mod occurrence;
pub mod rules;

pub use casing::{CasingStyle, UnknownStyle, classify, suggest};
pub use check::{InputError, check, check_bytes};
pub use extract::extract_occurrences;
pub use occurrence::{Occurrence, Role, UnknownRole};
pub use rules::{NamingRules, NamingViolation, RuleError, ViolationRecord};

/// Raw key/value configuration for a rule.
pub type Properties<'a> = HashMap<&'a str, &'a str>;

/// Rules that can be built from configuration properties.
pub trait FromConfig {
    /// Name of the configuration module, used in log messages.
    const MODULE_NAME: &'static str;

    fn from_config(properties: &Properties) -> Self;
}

/// Source text and its line index, shared by everything that inspects one file.
#[derive(Debug)]
pub struct CheckContext<'a> {
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line_index: LineIndex::from_source_text(source),
        }
    }

    /// 1-based line and column of a byte offset.
    pub fn location(&self, offset: TextSize) -> SourceLocation {
        self.line_index.line_column(offset, self.source)
    }
}
