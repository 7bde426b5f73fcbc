//! Rule tables and the violations they produce.

pub mod naming;

pub use naming::{NamingRules, NamingViolation, RuleError, ViolationRecord};
