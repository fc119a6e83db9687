use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::rules::next_significant_if;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::{FileMap, TokenKind};
use sqlint_types::{CodeFix, DiagnosticSeverity};

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "distinct-parentheses",
    code: "ST08",
    description: "Disallows parentheses around a single DISTINCT column",
    default_severity: DiagnosticSeverity::Error,
    message: "DISTINCT used with parentheses.",
};

/// Lint rule that flags `SELECT DISTINCT(col)` and `SELECT DISTINCT(tbl.col)`
///
/// The parentheses suggest DISTINCT applies to one column when it applies to
/// the whole row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctParenthesesRule {
    state: RuleState,
}

impl DistinctParenthesesRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        Self {
            state: RuleState::new(&METADATA, config, index),
        }
    }
}

/// Match `( ident )` or `( ident . ident )` starting at the `(` at `open`.
/// Returns the index of the closing `)` and the column text.
fn parenthesized_column(map: &FileMap, open: usize) -> Option<(usize, String)> {
    let is_ident = |token: &sqlint_syntax::Token| token.kind == TokenKind::Identifier;

    let first = next_significant_if(map, open, is_ident)?;
    let mut column = map.tokens()[first].text.clone();
    let mut last = first;

    if let Some(dot) = next_significant_if(map, first, |token| token.is_punct(".")) {
        let second = next_significant_if(map, dot, is_ident)?;
        column.push('.');
        column.push_str(&map.tokens()[second].text);
        last = second;
    }

    let close = next_significant_if(map, last, |token| token.is_punct(")"))?;
    Some((close, column))
}

impl LintRule for DistinctParenthesesRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let tokens = map.tokens();
        let mut diagnostics = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if !token.is_keyword("SELECT") {
                continue;
            }
            let Some(distinct) = next_significant_if(map, index, |t| t.is_keyword("DISTINCT"))
            else {
                continue;
            };
            let Some(open) = next_significant_if(map, distinct, |t| t.is_punct("(")) else {
                continue;
            };
            let Some((close, column)) = parenthesized_column(map, open) else {
                continue;
            };

            let range = tokens[distinct].range.cover(&tokens[close].range);
            let fix = CodeFix::replace(
                "Remove parentheses",
                range,
                format!("{} {column}", tokens[distinct].text),
            );
            diagnostics.push(self.diagnostic(range).with_fix(fix));
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{on, run};
    use sqlint_types::{Position, Range};

    fn check(text: &str) -> Vec<LintDiagnostic> {
        run(&DistinctParenthesesRule::new(&on(), 0), text)
    }

    #[test]
    fn test_plain_distinct_passes() {
        assert!(check("select distinct a from t\n").is_empty());
        assert!(check("select distinct (a + b) from t\n").is_empty());
        assert!(check("select count(distinct(a)) from t\n").is_empty());
    }

    #[test]
    fn test_parenthesized_column() {
        let diagnostics = check("SELECT DISTINCT(a) FROM t\n");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.message, "DISTINCT used with parentheses.");
        assert_eq!(
            diag.range,
            Range::new(Position::new(0, 7), Position::new(0, 18))
        );
        assert_eq!(diag.fix.as_ref().unwrap().edits[0].new_text, "DISTINCT a");
    }

    #[test]
    fn test_qualified_column() {
        let diagnostics = check("select distinct (t.a) from t\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].fix.as_ref().unwrap().edits[0].new_text, "distinct t.a");
    }
}
