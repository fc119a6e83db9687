use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::{FileMap, TokenKind};
use sqlint_types::{CodeFix, DiagnosticSeverity};

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "trailing-whitespace",
    code: "LT01",
    description: "Disallows whitespace at the end of a line",
    default_severity: DiagnosticSeverity::Warning,
    message: "Trailing whitespace.",
};

/// Lint rule that flags whitespace runs immediately before a line break or the
/// end of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingWhitespaceRule {
    state: RuleState,
}

impl TrailingWhitespaceRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

impl LintRule for TrailingWhitespaceRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let tokens = map.tokens();

        tokens
            .iter()
            .enumerate()
            .filter(|(i, token)| {
                token.kind == TokenKind::Whitespace
                    && tokens
                        .get(i + 1)
                        .is_none_or(|next| next.kind == TokenKind::Newline)
            })
            .map(|(_, token)| {
                self.diagnostic(token.range)
                    .with_fix(CodeFix::delete("Remove trailing whitespace", token.range))
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
        run(&TrailingWhitespaceRule::new(&on(), 0), text)
    }

    #[test]
    fn test_clean_lines() {
        assert!(check("select 1\nselect 2\n").is_empty());
        assert!(check("select  a,  b\n").is_empty());
    }

    #[test]
    fn test_trailing_spaces() {
        let diagnostics = check("select 1  \nselect 2\n");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(diag.message, "Trailing whitespace.");
        assert_eq!(
            diag.range,
            Range::new(Position::new(0, 8), Position::new(0, 10))
        );
        assert_eq!(diag.fix.as_ref().unwrap().label, "Remove trailing whitespace");
    }

    #[test]
    fn test_trailing_tab_at_end_of_document_and_after_comment() {
        let diagnostics = check("select 1 -- note \t\nfrom t\t");
        let ranges: Vec<_> = diagnostics.iter().map(|d| d.range).collect();
        assert_eq!(
            ranges,
            vec![
                Range::new(Position::new(0, 16), Position::new(0, 18)),
                Range::new(Position::new(1, 6), Position::new(1, 7)),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let diagnostics = check("select 1 \r\nselect 2\r\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start, Position::new(0, 8));
    }

    #[test]
    fn test_whitespace_inside_block_comment_is_ignored() {
        assert!(check("/* a  \n b */ select 1\n").is_empty());
    }
}
