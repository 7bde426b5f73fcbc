use std::fmt;
use std::str::FromStr;

use casecheck_text_size::{Ranged, TextRange};
use is_macro::Is;
use serde::{Deserialize, Serialize};

/// Syntactic role of a declared identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Is, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Field,
    Method,
    LocalVariable,
    /// Classes, interfaces, enums, records and annotation types.
    Class,
    /// `static final` fields and fields of interfaces and annotation types.
    Constant,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Field,
        Role::Method,
        Role::LocalVariable,
        Role::Class,
        Role::Constant,
    ];

    /// Configuration key for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Field => "field",
            Role::Method => "method",
            Role::LocalVariable => "localVariable",
            Role::Class => "class",
            Role::Constant => "constant",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name that is not one of [`Role::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "field" | "member" => Ok(Role::Field),
            "method" => Ok(Role::Method),
            "localVariable" | "local_variable" | "local" => Ok(Role::LocalVariable),
            "class" | "type" => Ok(Role::Class),
            "constant" => Ok(Role::Constant),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// An identifier declaration found in source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub name: String,
    pub role: Role,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// Byte range of the identifier token.
    pub range: TextRange,
}

impl Ranged for Occurrence {
    fn range(&self) -> TextRange {
        self.range
    }
}
