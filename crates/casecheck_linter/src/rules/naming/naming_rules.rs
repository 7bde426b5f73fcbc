//! NamingRules implementation.
//!
//! Maps each role to its expected casing style. A role without an entry is
//! not checked.

use crate::casing::{CasingStyle, UnknownStyle};
use crate::occurrence::{Role, UnknownRole};
use crate::{FromConfig, Properties};

/// Values that switch a role off instead of naming a style.
const DISABLED_VALUES: &[&str] = &["off", "none", "ignore"];

/// Invalid naming configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),

    #[error("invalid style for role '{role}': {source}")]
    UnknownStyle {
        role: Role,
        #[source]
        source: UnknownStyle,
    },

    #[error("expected ROLE=STYLE, got '{0}'")]
    MalformedOverride(String),
}

/// Expected casing style per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamingRules {
    expected: [Option<CasingStyle>; Role::ALL.len()],
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl NamingRules {
    /// Java conventions: camelCase members and locals, PascalCase types,
    /// UPPER_SNAKE_CASE constants.
    pub const DEFAULT: NamingRules = NamingRules {
        expected: [
            Some(CasingStyle::CamelCase),
            Some(CasingStyle::CamelCase),
            Some(CasingStyle::CamelCase),
            Some(CasingStyle::PascalCase),
            Some(CasingStyle::UpperSnakeCase),
        ],
    };

    /// A table that checks nothing.
    pub const fn empty() -> Self {
        Self {
            expected: [None; Role::ALL.len()],
        }
    }

    /// The expected style for `role`, or `None` if the role is not checked.
    pub fn expected(&self, role: Role) -> Option<CasingStyle> {
        self.expected[role.index()]
    }

    #[must_use]
    pub fn with(mut self, role: Role, style: CasingStyle) -> Self {
        self.set(role, Some(style));
        self
    }

    pub fn set(&mut self, role: Role, style: Option<CasingStyle>) {
        self.expected[role.index()] = style;
    }

    /// Applies one `role = style` entry; `off` disables the role.
    pub fn apply(&mut self, role: &str, style: &str) -> Result<(), RuleError> {
        let role: Role = role.parse()?;
        if DISABLED_VALUES.contains(&style.trim().to_ascii_lowercase().as_str()) {
            self.set(role, None);
            return Ok(());
        }
        let style = style
            .parse::<CasingStyle>()
            .map_err(|source| RuleError::UnknownStyle { role, source })?;
        self.set(role, Some(style));
        Ok(())
    }

    /// Applies a `ROLE=STYLE` override as given on the command line.
    pub fn apply_override(&mut self, entry: &str) -> Result<(), RuleError> {
        let Some((role, style)) = entry.split_once('=') else {
            return Err(RuleError::MalformedOverride(entry.to_string()));
        };
        self.apply(role.trim(), style.trim())
    }

    /// Builds the table from configuration, starting from [`NamingRules::DEFAULT`].
    ///
    /// Entries are applied in key order, so the first error is deterministic.
    pub fn try_from_config(properties: &Properties) -> Result<Self, RuleError> {
        let mut rules = Self::DEFAULT;
        for (role, style) in sorted_entries(properties) {
            rules.apply(role, style)?;
        }
        Ok(rules)
    }
}

/// Entries in key order; aliases of one role (`field`, `member`) then
/// resolve the same way on every run.
fn sorted_entries<'p>(properties: &'p Properties) -> Vec<(&'p str, &'p str)> {
    let mut entries: Vec<_> = properties.iter().map(|(role, style)| (*role, *style)).collect();
    entries.sort_unstable();
    entries
}

impl FromConfig for NamingRules {
    const MODULE_NAME: &'static str = "NamingConvention";

    fn from_config(properties: &Properties) -> Self {
        let mut rules = Self::DEFAULT;
        for (role, style) in sorted_entries(properties) {
            if let Err(err) = rules.apply(role, style) {
                tracing::warn!(module = Self::MODULE_NAME, "ignoring naming entry: {err}");
            }
        }
        rules
    }
}
