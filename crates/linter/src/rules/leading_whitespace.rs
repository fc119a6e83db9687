use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::FileMap;
use sqlint_types::{CodeFix, DiagnosticSeverity, Range};

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "leading-whitespace",
    code: "LT13",
    description: "Disallows blank lines or whitespace before the first token of a file",
    default_severity: DiagnosticSeverity::Error,
    message: "Files must not begin with newlines or whitespace.",
};

/// Lint rule that flags a document whose first token is whitespace or a newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingWhitespaceRule {
    state: RuleState,
}

impl LeadingWhitespaceRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

impl LintRule for LeadingWhitespaceRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let tokens = map.tokens();
        let Some(first) = tokens.first().filter(|token| token.is_trivia()) else {
            return Vec::new();
        };

        let content_start = tokens
            .iter()
            .find(|token| !token.is_trivia())
            .map_or(map.end(), |token| token.range.start);
        let fix = CodeFix::delete(
            "Remove leading whitespace",
            Range::new(first.range.start, content_start),
        );

        vec![self.diagnostic(first.range).with_fix(fix)]
    }
}
