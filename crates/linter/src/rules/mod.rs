//! Rule implementations.
//!
//! Each rule lives in its own file, owns its [`RuleMetadata`] and implements
//! [`LintRule`]. [`Rule`] closes over the whole set so the engine can hold
//! instances of different rules in one `Vec` without trait objects.

mod distinct_parentheses;
mod final_newline;
mod is_null;
mod leading_comma;
mod leading_whitespace;
mod select_modifiers;
mod select_trailing_comma;
mod trailing_whitespace;

pub use distinct_parentheses::DistinctParenthesesRule;
pub use final_newline::FinalNewlineRule;
pub use is_null::IsNullRule;
pub use leading_comma::{CommaPosition, LeadingCommaOptions, LeadingCommaRule};
pub use leading_whitespace::LeadingWhitespaceRule;
pub use select_modifiers::SelectModifiersRule;
pub use select_trailing_comma::SelectTrailingCommaRule;
pub use trailing_whitespace::TrailingWhitespaceRule;

pub(crate) use distinct_parentheses::METADATA as DISTINCT_PARENTHESES;
pub(crate) use final_newline::METADATA as FINAL_NEWLINE;
pub(crate) use is_null::METADATA as IS_NULL;
pub(crate) use leading_comma::METADATA as LEADING_COMMA;
pub(crate) use leading_whitespace::METADATA as LEADING_WHITESPACE;
pub(crate) use select_modifiers::METADATA as SELECT_MODIFIERS;
pub(crate) use select_trailing_comma::METADATA as SELECT_TRAILING_COMMA;
pub(crate) use trailing_whitespace::METADATA as TRAILING_WHITESPACE;

use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::registry::RuleKind;
use crate::traits::{LintRule, RuleMetadata, RuleState};
use sqlint_syntax::{FileMap, Token, TokenKind};

/// One configured rule instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    LeadingWhitespace(LeadingWhitespaceRule),
    TrailingWhitespace(TrailingWhitespaceRule),
    FinalNewline(FinalNewlineRule),
    LeadingComma(LeadingCommaRule),
    SelectTrailingComma(SelectTrailingCommaRule),
    IsNull(IsNullRule),
    SelectModifiers(SelectModifiersRule),
    DistinctParentheses(DistinctParenthesesRule),
}

macro_rules! dispatch {
    ($rule:expr, $inner:ident => $body:expr) => {
        match $rule {
            Rule::LeadingWhitespace($inner) => $body,
            Rule::TrailingWhitespace($inner) => $body,
            Rule::FinalNewline($inner) => $body,
            Rule::LeadingComma($inner) => $body,
            Rule::SelectTrailingComma($inner) => $body,
            Rule::IsNull($inner) => $body,
            Rule::SelectModifiers($inner) => $body,
            Rule::DistinctParentheses($inner) => $body,
        }
    };
}

impl Rule {
    /// Build instance `index` of `kind` from its resolved configuration.
    #[must_use]
    pub fn new(kind: RuleKind, config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        match kind {
            RuleKind::LeadingWhitespace => {
                Self::LeadingWhitespace(LeadingWhitespaceRule::new(config, index))
            }
            RuleKind::TrailingWhitespace => {
                Self::TrailingWhitespace(TrailingWhitespaceRule::new(config, index))
            }
            RuleKind::FinalNewline => Self::FinalNewline(FinalNewlineRule::new(config, index)),
            RuleKind::LeadingComma => Self::LeadingComma(LeadingCommaRule::new(config, index)),
            RuleKind::SelectTrailingComma => {
                Self::SelectTrailingComma(SelectTrailingCommaRule::new(config, index))
            }
            RuleKind::IsNull => Self::IsNull(IsNullRule::new(config, index)),
            RuleKind::SelectModifiers => {
                Self::SelectModifiers(SelectModifiersRule::new(config, index))
            }
            RuleKind::DistinctParentheses => {
                Self::DistinctParentheses(DistinctParenthesesRule::new(config, index))
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::LeadingWhitespace(_) => RuleKind::LeadingWhitespace,
            Self::TrailingWhitespace(_) => RuleKind::TrailingWhitespace,
            Self::FinalNewline(_) => RuleKind::FinalNewline,
            Self::LeadingComma(_) => RuleKind::LeadingComma,
            Self::SelectTrailingComma(_) => RuleKind::SelectTrailingComma,
            Self::IsNull(_) => RuleKind::IsNull,
            Self::SelectModifiers(_) => RuleKind::SelectModifiers,
            Self::DistinctParentheses(_) => RuleKind::DistinctParentheses,
        }
    }
}

impl LintRule for Rule {
    fn metadata(&self) -> &'static RuleMetadata {
        dispatch!(self, rule => rule.metadata())
    }

    fn state(&self) -> &RuleState {
        dispatch!(self, rule => rule.state())
    }

    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        dispatch!(self, rule => rule.check(map))
    }
}

/// `true` if only whitespace separates `tokens[index]` from the start of its line.
pub(crate) fn starts_line(tokens: &[Token], index: usize) -> bool {
    tokens[..index]
        .iter()
        .rev()
        .find(|token| token.kind != TokenKind::Whitespace)
        .is_none_or(|token| token.kind == TokenKind::Newline)
}

/// `true` if only whitespace and a line comment follow `tokens[index]` on its line.
pub(crate) fn ends_line(tokens: &[Token], index: usize) -> bool {
    tokens[index + 1..]
        .iter()
        .find(|token| token.kind != TokenKind::Whitespace && !token.is_line_comment())
        .is_none_or(|token| token.kind == TokenKind::Newline)
}

/// Index of the next significant token after `index`, if it satisfies `pred`.
pub(crate) fn next_significant_if(
    map: &FileMap,
    index: usize,
    pred: impl Fn(&Token) -> bool,
) -> Option<usize> {
    map.next_significant(index)
        .filter(|&next| pred(&map.tokens()[next]))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::RuleInstanceConfig;
    use crate::diagnostics::LintDiagnostic;
    use crate::traits::LintRule;
    use sqlint_types::RuleSeverity;

    pub fn on() -> RuleInstanceConfig<'static> {
        RuleInstanceConfig {
            severity: RuleSeverity::On,
            options: None,
        }
    }

    /// Parse `text` and collect the rule's findings (empty for "no findings").
    pub fn run(rule: &impl LintRule, text: &str) -> Vec<LintDiagnostic> {
        rule.evaluate(&sqlint_syntax::parse(text))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlint_syntax::tokenize;

    #[test]
    fn test_starts_line() {
        let tokens = tokenize("a\n  , b , c");
        let commas: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.text == ",")
            .map(|(i, _)| i)
            .collect();
        assert!(starts_line(&tokens, commas[0]));
        assert!(!starts_line(&tokens, commas[1]));
        assert!(starts_line(&tokens, 0));
    }

    #[test]
    fn test_ends_line() {
        let tokens = tokenize("a, -- note\nb ,c");
        let commas: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.text == ",")
            .map(|(i, _)| i)
            .collect();
        assert!(ends_line(&tokens, commas[0]));
        assert!(!ends_line(&tokens, commas[1]));
        assert!(ends_line(&tokens, tokens.len() - 1));
    }

    #[test]
    fn test_every_kind_round_trips_through_rule() {
        for &kind in RuleKind::ALL {
            let rule = Rule::new(kind, &test_support::on(), 3);
            assert_eq!(rule.kind(), kind);
            assert_eq!(rule.name(), kind.name());
            assert_eq!(rule.index(), 3);
            assert!(rule.enabled());
            assert_eq!(rule.severity(), rule.default_severity());
        }
    }

    #[test]
    fn test_disabled_rule_never_fires() {
        let offending = "  select a\n  , b ,  \nfrom t where c = null  ";
        for &kind in RuleKind::ALL {
            let rule = Rule::new(kind, &RuleInstanceConfig::off(), 0);
            assert!(!rule.enabled());
            assert_eq!(rule.evaluate(&sqlint_syntax::parse(offending)), None);
        }
    }

    #[test]
    fn test_empty_file_map_has_no_findings() {
        for &kind in RuleKind::ALL {
            let rule = Rule::new(kind, &test_support::on(), 0);
            assert_eq!(rule.evaluate(&sqlint_syntax::parse("")), None);
            assert_eq!(rule.evaluate(&sqlint_syntax::parse(" \n\n")), None);
        }
    }
}
