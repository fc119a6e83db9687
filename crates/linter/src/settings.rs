use crate::config::{FullLintConfig, LintConfig, LintRuleConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default cap on the number of diagnostics returned for one document.
pub const DEFAULT_MAX_NUMBER_OF_PROBLEMS: usize = 1000;

/// Everything the engine reads from the host's configuration.
///
/// An immutable value: hand one to [`crate::Linter::new`] per configuration.
/// Keys are camelCase to match the host's workspace settings object:
///
/// ```json
/// {
///   "maxNumberOfProblems": 100,
///   "lint": { "extends": "recommended", "rules": { "leading-comma": "error" } }
/// }
/// ```
///
/// A top-level `rules` mapping is accepted as well. On its own it configures
/// exactly the rules it names; next to `lint` it overrides `lint`'s entries:
///
/// ```json
/// { "rules": { "final-newline": { "enabled": false }, "leading-comma": "warn" } }
/// ```
///
/// Other top-level keys belong to the host and are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSettings")]
pub struct Settings {
    /// Diagnostics beyond this many (after sorting) are dropped
    pub max_number_of_problems: usize,
    /// Which rules run, at what severity, with which options
    pub lint: LintConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_number_of_problems: DEFAULT_MAX_NUMBER_OF_PROBLEMS,
            lint: LintConfig::recommended(),
        }
    }
}

/// Wire shape of [`Settings`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSettings {
    max_number_of_problems: usize,
    lint: Option<LintConfig>,
    rules: Option<HashMap<String, LintRuleConfig>>,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            max_number_of_problems: DEFAULT_MAX_NUMBER_OF_PROBLEMS,
            lint: None,
            rules: None,
        }
    }
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        let rules = raw.rules.map(|rules| {
            LintConfig::Full(FullLintConfig {
                extends: None,
                rules,
            })
        });

        let lint = match (raw.lint, rules) {
            (Some(lint), Some(rules)) => lint.merge(&rules),
            (Some(lint), None) => lint,
            (None, Some(rules)) => rules,
            (None, None) => LintConfig::recommended(),
        };

        Self {
            max_number_of_problems: raw.max_number_of_problems,
            lint,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new(lint: LintConfig) -> Self {
        Self {
            lint,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_number_of_problems(mut self, max: usize) -> Self {
        self.max_number_of_problems = max;
        self
    }
}
