//! Snapshot testing assertions for SQL lint diagnostics
//!
//! Diagnostics are rendered one per line, numbered, with their range, severity,
//! rule id and message, so snapshots read like an editor's problem list.

use sqlint_linter::LintDiagnostic;

/// Format a list of diagnostics for snapshot testing.
///
/// # Example
///
/// ```
/// use sqlint_linter::{lint, Settings};
/// use sqlint_test_utils::format_diagnostics;
///
/// let diagnostics = lint("select 1", &Settings::default());
/// assert_eq!(
///     format_diagnostics(&diagnostics),
///     "[1] 0:8-0:8 error final-newline: Files must end with a single trailing newline. \
///      (fix: Fix trailing newline)"
/// );
/// ```
#[must_use]
pub fn format_diagnostics(diagnostics: &[LintDiagnostic]) -> String {
    if diagnostics.is_empty() {
        return String::from("(no diagnostics)");
    }

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let mut line = format!(
                "[{}] {} {} {}: {}",
                i + 1,
                d.range,
                d.severity,
                d.source,
                d.message
            );
            if let Some(fix) = &d.fix {
                line.push_str(&format!(" (fix: {})", fix.label));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format diagnostics with their messages only (without position info).
/// Useful when you only care about the messages, not positions.
#[must_use]
pub fn format_diagnostic_messages<T: AsRef<str>>(messages: &[T]) -> String {
    if messages.is_empty() {
        return String::from("(no diagnostics)");
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("[{}] {}", i + 1, m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
