//! Naming convention rules.
//!
//! One table maps every [`Role`](crate::Role) to the casing style its
//! identifiers must use.

mod naming_rules;
mod naming_violation;

pub use naming_rules::{NamingRules, RuleError};
pub use naming_violation::{NamingViolation, ViolationRecord};
