//! Rule engine for SQL documents.
//!
//! [`Linter`] instantiates the rules a [`Settings`] value asks for, runs them
//! against a parsed [`FileMap`](sqlint_syntax::FileMap) and returns one sorted
//! list of [`LintDiagnostic`]s. Unknown rule ids are ignored and a rule that
//! fails is isolated from the rest, so `lint` never fails.
//!
//! ```
//! use sqlint_linter::{lint, Settings};
//!
//! let diagnostics = lint("SELECT 1\n  ,col2\nFROM t\n", &Settings::default());
//! assert_eq!(diagnostics[0].source, "leading-comma");
//! ```

mod config;
mod diagnostics;
#[cfg(feature = "async")]
mod error;
mod linter;
mod registry;
mod rules;
mod settings;
mod traits;

pub use config::{
    ExtendsConfig, FullLintConfig, LintConfig, LintRuleConfig, RuleInstanceConfig,
    RECOMMENDED_PRESET,
};
pub use diagnostics::LintDiagnostic;
#[cfg(feature = "async")]
pub use error::{LintError, Result};
#[cfg(feature = "async")]
pub use linter::parse_async;
pub use linter::{lint, Linter};
pub use registry::{all_rule_names, all_rules, build_rules, RuleKind};
pub use rules::{
    CommaPosition, DistinctParenthesesRule, FinalNewlineRule, IsNullRule, LeadingCommaOptions,
    LeadingCommaRule, LeadingWhitespaceRule, Rule, SelectModifiersRule, SelectTrailingCommaRule,
    TrailingWhitespaceRule,
};
pub use settings::{Settings, DEFAULT_MAX_NUMBER_OF_PROBLEMS};
pub use sqlint_syntax::{parse, FileMap, StatementAst, StatementId};
pub use sqlint_types::{CodeFix, DiagnosticSeverity, Position, Range, RuleSeverity, TextEdit};
pub use traits::{LintRule, RuleMetadata, RuleState};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust,ignore
/// use sqlint_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{LintConfig, LintRuleConfig};
    pub use crate::diagnostics::LintDiagnostic;
    pub use crate::linter::{lint, Linter};
    pub use crate::settings::Settings;
    pub use crate::traits::LintRule;
    pub use sqlint_types::{DiagnosticSeverity, Position, Range, RuleSeverity};
}
