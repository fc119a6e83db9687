use serde::Serialize;
use sqlint_types::{CodeFix, DiagnosticSeverity, Range};

/// A positioned finding produced by one rule.
///
/// Maps one-to-one onto a protocol diagnostic: `message`, `severity`, `range`
/// and `source` need no further transformation by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintDiagnostic {
    /// Human-readable message
    pub message: String,
    /// Severity (from rule default or config override)
    pub severity: DiagnosticSeverity,
    /// Editor coordinates of the offending text
    pub range: Range,
    /// Rule identifier (e.g., `"trailing-whitespace"`)
    pub source: String,
    /// Short rule code (e.g., `"LT01"`)
    pub code: String,
    /// Optional auto-fix for this diagnostic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<CodeFix>,
}

impl LintDiagnostic {
    /// Create a new lint diagnostic
    #[must_use]
    pub fn new(
        range: Range,
        severity: DiagnosticSeverity,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            range,
            source: source.into(),
            code: String::new(),
            fix: None,
        }
    }

    /// Create a warning diagnostic
    #[must_use]
    pub fn warning(range: Range, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(range, DiagnosticSeverity::Warning, message, source)
    }

    /// Create an error diagnostic
    #[must_use]
    pub fn error(range: Range, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(range, DiagnosticSeverity::Error, message, source)
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Attach a fix to this diagnostic
    #[must_use]
    pub fn with_fix(mut self, fix: CodeFix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Sort key used by the engine: start position, then rule id.
    pub(crate) fn sort_key(&self) -> (u32, u32, &str) {
        (
            self.range.start.line,
            self.range.start.character,
            self.source.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlint_types::Position;

    fn range() -> Range {
        Range::new(Position::new(1, 2), Position::new(1, 3))
    }

    #[test]
    fn test_lint_diagnostic_warning() {
        let diag = LintDiagnostic::warning(range(), "Test warning", "test-rule");
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(diag.message, "Test warning");
        assert_eq!(diag.source, "test-rule");
        assert!(diag.fix.is_none());
    }

    #[test]
    fn test_with_fix_and_code() {
        let diag = LintDiagnostic::error(range(), "Oops", "test-rule")
            .with_code("XX01")
            .with_fix(CodeFix::delete("Remove", range()));
        assert_eq!(diag.code, "XX01");
        assert_eq!(diag.fix.unwrap().label, "Remove");
    }

    #[test]
    fn test_serializes_protocol_fields() {
        let diag = LintDiagnostic::error(range(), "Oops", "test-rule");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["message"], "Oops");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["source"], "test-rule");
        assert_eq!(json["range"]["start"]["line"], 1);
        assert!(json.get("fix").is_none());
    }
}
