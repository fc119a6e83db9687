use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use crate::rules::{ends_line, starts_line};
use crate::traits::{LintRule, RuleMetadata, RuleState};
use serde::Deserialize;
use sqlint_syntax::FileMap;
use sqlint_types::DiagnosticSeverity;

pub(crate) static METADATA: RuleMetadata = RuleMetadata {
    name: "leading-comma",
    code: "LT04",
    description: "Enforces a consistent position for commas in multi-line lists",
    default_severity: DiagnosticSeverity::Warning,
    message: "Commas should not appear at the start of a line.",
};

const END_OF_LINE_MESSAGE: &str = "Commas should not appear at the end of a line.";

/// Where commas are required to sit when a list is broken over lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommaPosition {
    /// `a,\n b` (commas close the line)
    #[default]
    Trailing,
    /// `a\n, b` (commas open the line)
    Leading,
}

/// Options for the `leading-comma` rule
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LeadingCommaOptions {
    pub position: CommaPosition,
}

impl LeadingCommaOptions {
    fn from_json(value: Option<&serde_json::Value>) -> Self {
        value
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

/// Lint rule that flags commas placed on the wrong side of a line break
///
/// With the default `trailing` position a comma that is the first token on
/// its line is reported; with `leading`, a comma that is the last token on
/// its line (comments aside) is reported instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingCommaRule {
    state: RuleState,
    position: CommaPosition,
}

impl LeadingCommaRule {
    #[must_use]
    pub fn new(config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        let options = LeadingCommaOptions::from_json(config.options);
        let state = RuleState::new(&METADATA, config, index);
        let state = match options.position {
            CommaPosition::Trailing => state,
            CommaPosition::Leading => state.with_message(END_OF_LINE_MESSAGE),
        };
        Self {
            state,
            position: options.position,
        }
    }

    #[must_use]
    pub const fn position(&self) -> CommaPosition {
        self.position
    }
}

impl LintRule for LeadingCommaRule {
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
            .filter(|(_, token)| token.is_punct(","))
            .filter(|&(i, _)| match self.position {
                CommaPosition::Trailing => starts_line(tokens, i),
                CommaPosition::Leading => ends_line(tokens, i),
            })
            .map(|(_, token)| self.diagnostic(token.range))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{on, run};
    use serde_json::json;
    use sqlint_types::{Position, Range, RuleSeverity};

    fn check(text: &str) -> Vec<LintDiagnostic> {
        run(&LeadingCommaRule::new(&on(), 0), text)
    }

    fn check_leading(text: &str) -> Vec<LintDiagnostic> {
        let options = json!({ "position": "leading" });
        let config = RuleInstanceConfig {
            severity: RuleSeverity::Error,
            options: Some(&options),
        };
        run(&LeadingCommaRule::new(&config, 0), text)
    }

    #[test]
    fn test_trailing_commas_pass() {
        assert!(check("SELECT a,\n  b,\n  c\nFROM t\n").is_empty());
        assert!(check("SELECT a, b FROM t\n").is_empty());
    }

    #[test]
    fn test_comma_at_start_of_line() {
        let diagnostics = check("SELECT 1\n  ,col2\nFROM t\n");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.source, "leading-comma");
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(diag.message, "Commas should not appear at the start of a line.");
        assert_eq!(
            diag.range,
            Range::new(Position::new(1, 2), Position::new(1, 3))
        );
    }

    #[test]
    fn test_comma_inside_string_is_ignored() {
        assert!(check("SELECT \"\"\"a\n, b\"\"\"\n").is_empty());
        assert!(check("SELECT a /* x\n, y */\nFROM t\n").is_empty());
    }

    #[test]
    fn test_leading_position_flags_line_end_commas() {
        let diagnostics = check_leading("SELECT a, -- first\n  b\n  , c\nFROM t\n");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.message, "Commas should not appear at the end of a line.");
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(diag.range.start, Position::new(0, 8));
    }

    #[test]
    fn test_unknown_options_fall_back_to_default() {
        let options = json!({ "position": "sideways" });
        let config = RuleInstanceConfig {
            severity: RuleSeverity::On,
            options: Some(&options),
        };
        let rule = LeadingCommaRule::new(&config, 0);
        assert_eq!(rule.position(), CommaPosition::Trailing);
    }
}
