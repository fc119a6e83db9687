use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::{FileMap, TokenKind};
use sqlint_types::{CodeFix, DiagnosticSeverity, Range};

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "final-newline",
    code: "LT12",
    description: "Requires exactly one line break at the end of a file",
    default_severity: DiagnosticSeverity::Error,
    message: "Files must end with a single trailing newline.",
};

/// Lint rule that requires the document to end with exactly one line break
/// after its last non-blank token
///
/// Whitespace before that single line break is left to `trailing-whitespace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalNewlineRule {
    state: RuleState,
}

impl FinalNewlineRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

impl LintRule for FinalNewlineRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let tokens = map.tokens();
        let Some(last_content) = tokens.iter().rposition(|token| !token.is_trivia()) else {
            return Vec::new();
        };

        let tail = &tokens[last_content + 1..];
        let newlines = tail
            .iter()
            .filter(|token| token.kind == TokenKind::Newline)
            .count();
        let ends_with_newline = tail
            .last()
            .is_some_and(|token| token.kind == TokenKind::Newline);
        if newlines == 1 && ends_with_newline {
            return Vec::new();
        }

        let fix = CodeFix::replace(
            "Fix trailing newline",
            Range::new(tokens[last_content].range.end, map.end()),
            "\n",
        );
        vec![self.diagnostic(Range::at(map.end())).with_fix(fix)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{on, run};
    use sqlint_types::Position;

    fn check(text: &str) -> Vec<LintDiagnostic> {
        run(&FinalNewlineRule::new(&on(), 0), text)
    }

    #[test]
    fn test_single_trailing_newline_passes() {
        assert!(check("select 1\n").is_empty());
        assert!(check("select 1;\r\n").is_empty());
        assert!(check("select 1  \n").is_empty());
        assert!(check("select 1; -- done\n").is_empty());
    }

    #[test]
    fn test_missing_newline() {
        let diagnostics = check("select 1");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(diag.message, "Files must end with a single trailing newline.");
        assert_eq!(diag.range, Range::at(Position::new(0, 8)));

        let fix = diag.fix.as_ref().unwrap();
        assert_eq!(fix.label, "Fix trailing newline");
        assert_eq!(fix.edits[0].range, Range::at(Position::new(0, 8)));
        assert_eq!(fix.edits[0].new_text, "\n");
    }

    #[test]
    fn test_extra_blank_lines() {
        let diagnostics = check("select 1\n\n\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, Range::at(Position::new(3, 0)));
        assert_eq!(
            diagnostics[0].fix.as_ref().unwrap().edits[0].range,
            Range::new(Position::new(0, 8), Position::new(3, 0))
        );
    }

    #[test]
    fn test_whitespace_after_final_newline() {
        let diagnostics = check("select 1\n  ");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range, Range::at(Position::new(1, 2)));
    }
}
