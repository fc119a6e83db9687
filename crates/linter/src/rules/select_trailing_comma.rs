use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::rules::next_significant_if;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::FileMap;
use sqlint_types::{CodeFix, DiagnosticSeverity};

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "select-trailing-comma",
    code: "CV03",
    description: "Disallows a comma after the last item of a select list",
    default_severity: DiagnosticSeverity::Warning,
    message: "Trailing comma within select clause.",
};

/// Lint rule that flags a comma directly followed by `FROM`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTrailingCommaRule {
    state: RuleState,
}

impl SelectTrailingCommaRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

impl LintRule for SelectTrailingCommaRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        map.tokens()
            .iter()
            .enumerate()
            .filter(|(i, token)| {
                token.is_punct(",")
                    && next_significant_if(map, *i, |next| next.is_keyword("FROM")).is_some()
            })
            .map(|(_, token)| {
                self.diagnostic(token.range)
                    .with_fix(CodeFix::delete("Remove trailing comma", token.range))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{on, run};
    use sqlint_types::{Position, Range};

    fn check(text: &str) -> Vec<LintDiagnostic> {
        run(&SelectTrailingCommaRule::new(&on(), 0), text)
    }

    #[test]
    fn test_no_trailing_comma() {
        assert!(check("select a, b from t\n").is_empty());
        assert!(check("select ',' from t\n").is_empty());
    }

    #[test]
    fn test_trailing_comma_before_from() {
        let diagnostics = check("select\n  a,\n  b,\nFROM t\n");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.message, "Trailing comma within select clause.");
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(
            diag.range,
            Range::new(Position::new(2, 3), Position::new(2, 4))
        );
        assert!(diag.fix.as_ref().unwrap().edits[0].is_deletion());
    }

    #[test]
    fn test_comment_between_comma_and_from() {
        assert_eq!(check("select a, -- last\nfrom t\n").len(), 1);
    }
}
