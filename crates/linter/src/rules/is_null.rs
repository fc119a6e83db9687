use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::rules::next_significant_if;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::{FileMap, TokenKind};
use sqlint_types::{CodeFix, DiagnosticSeverity};

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "is-null",
    code: "CV05",
    description: "Requires IS / IS NOT for comparisons with NULL",
    default_severity: DiagnosticSeverity::Warning,
    message: "Comparisons with NULL should use “IS” or “IS NOT”.",
};

/// Lint rule that flags `= NULL`, `!= NULL` and `<> NULL`
///
/// Assignments in an `UPDATE .. SET` list are not comparisons and are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsNullRule {
    state: RuleState,
}

impl IsNullRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

impl LintRule for IsNullRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for statement in map.statements() {
            let mut in_set_clause = false;

            for (index, token) in statement.significant_tokens() {
                if token.is_keyword("SET") {
                    in_set_clause = true;
                    continue;
                }
                if token.is_keyword("WHERE") || token.is_keyword("FROM") {
                    in_set_clause = false;
                    continue;
                }
                if in_set_clause || token.kind != TokenKind::Punctuation {
                    continue;
                }

                let replacement = match token.text.as_str() {
                    "=" => "IS",
                    "!=" | "<>" => "IS NOT",
                    _ => continue,
                };
                if next_significant_if(map, index, |next| next.is_keyword("NULL")).is_none() {
                    continue;
                }

                diagnostics.push(self.diagnostic(token.range).with_fix(CodeFix::replace(
                    format!("Replace with {replacement}"),
                    token.range,
                    replacement,
                )));
            }
        }

        diagnostics
    }
}
