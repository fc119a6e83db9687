use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::rules::next_significant_if;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::FileMap;
use sqlint_types::DiagnosticSeverity;

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "select-modifiers",
    code: "LT10",
    description: "Requires SELECT modifiers to share a line with SELECT",
    default_severity: DiagnosticSeverity::Error,
    message: "SELECT modifiers (e.g. DISTINCT) must be on the same line as SELECT",
};

const MODIFIERS: &[&str] = &["DISTINCT", "ALL", "AS", "WITH"];

/// Lint rule that flags `SELECT` followed by a modifier on a later line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectModifiersRule {
    state: RuleState,
}

impl SelectModifiersRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

impl LintRule for SelectModifiersRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let tokens = map.tokens();
        let mut diagnostics = Vec::new();

        for (index, select) in tokens.iter().enumerate() {
            if !select.is_keyword("SELECT") {
                continue;
            }
            let Some(modifier) = next_significant_if(map, index, |next| {
                MODIFIERS.iter().any(|keyword| next.is_keyword(keyword))
            }) else {
                continue;
            };

            let modifier = &tokens[modifier];
            if modifier.range.start.line != select.range.end.line {
                diagnostics.push(self.diagnostic(select.range.cover(&modifier.range)));
            }
        }

        diagnostics
    }
}
