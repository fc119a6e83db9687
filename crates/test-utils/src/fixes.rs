//! Apply code fixes to source text.

use sqlint_linter::LintDiagnostic;
use sqlint_syntax::LineIndex;
use sqlint_types::{CodeFix, Position, TextEdit};

/// Byte offset of `position` in `text`.
#[must_use]
pub fn offset_at(text: &str, position: Position) -> usize {
    LineIndex::new(text).offset(text, position)
}

/// Apply the edits of one fix to `text`.
///
/// Edits are applied back to front so earlier ranges stay valid.
#[must_use]
pub fn apply_fix(text: &str, fix: &CodeFix) -> String {
    apply_edits(text, fix.edits.iter().collect())
}

/// Apply every fix carried by `diagnostics`, skipping any fix whose edits
/// overlap an edit already taken.
#[must_use]
pub fn apply_fixes(text: &str, diagnostics: &[LintDiagnostic]) -> String {
    let mut taken: Vec<&TextEdit> = Vec::new();

    for fix in diagnostics.iter().filter_map(|d| d.fix.as_ref()) {
        let clashes = fix.edits.iter().any(|edit| {
            taken.iter().any(|other| {
                edit.range.overlaps(&other.range)
                    || (edit.range.is_empty() && edit.range.start == other.range.start)
            })
        });
        if !clashes {
            taken.extend(&fix.edits);
        }
    }

    apply_edits(text, taken)
}

fn apply_edits(text: &str, mut edits: Vec<&TextEdit>) -> String {
    let index = LineIndex::new(text);
    edits.sort_by_key(|edit| std::cmp::Reverse(edit.range.start));

    let mut result = text.to_string();
    for edit in edits {
        let start = index.offset(text, edit.range.start);
        let end = index.offset(text, edit.range.end);
        result.replace_range(start..end, &edit.new_text);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlint_types::Range;

    fn span(line: u32, start: u32, end: u32) -> Range {
        Range::new(Position::new(line, start), Position::new(line, end))
    }

    #[test]
    fn test_offset_at() {
        assert_eq!(offset_at("ab\ncd", Position::new(1, 1)), 4);
    }

    #[test]
    fn test_apply_fix_multiple_edits() {
        let fix = CodeFix::new(
            "Tidy",
            vec![
                TextEdit::delete(span(0, 0, 1)),
                TextEdit::replace(span(1, 2, 3), "IS"),
            ],
        );
        assert_eq!(apply_fix(" a\nb = NULL\n", &fix), "a\nb IS NULL\n");
    }

    #[test]
    fn test_apply_fixes_skips_overlapping() {
        let first = LintDiagnostic::warning(span(0, 1, 3), "m", "r")
            .with_fix(CodeFix::delete("first", span(0, 1, 3)));
        let second = LintDiagnostic::warning(span(0, 2, 4), "m", "r")
            .with_fix(CodeFix::replace("second", span(0, 2, 4), "X"));
        assert_eq!(apply_fixes("abcdef", &[first, second]), "adef");
    }
}
