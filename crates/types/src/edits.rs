//! Text edit types for code fixes.

use crate::Range;
use serde::{Deserialize, Serialize};

/// A text edit representing a change to apply to source code.
///
/// Edits are expressed in editor coordinates so a host can forward
/// them without re-reading the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// Range to replace
    pub range: Range,
    /// The text to replace the range with (empty string means deletion)
    pub new_text: String,
}

impl TextEdit {
    /// Create a new text edit that replaces a range with new text.
    #[must_use]
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Create a deletion edit (replace range with empty string).
    #[must_use]
    pub const fn delete(range: Range) -> Self {
        Self {
            range,
            new_text: String::new(),
        }
    }

    /// Returns `true` if this edit is a deletion (empty `new_text`).
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        self.new_text.is_empty() && !self.range.is_empty()
    }

    /// Returns `true` if this edit is an insertion (zero-width range).
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.range.is_empty() && !self.new_text.is_empty()
    }
}

/// A code fix that can be applied to resolve a diagnostic.
///
/// Code fixes have a human-readable label and one or more text edits
/// that should be applied together atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFix {
    /// Human-readable description of what the fix does
    pub label: String,
    /// The text edits to apply (in order)
    pub edits: Vec<TextEdit>,
}

impl CodeFix {
    /// Create a new code fix with a label and edits.
    #[must_use]
    pub fn new(label: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self {
            label: label.into(),
            edits,
        }
    }

    /// Create a simple deletion fix.
    #[must_use]
    pub fn delete(label: impl Into<String>, range: Range) -> Self {
        Self {
            label: label.into(),
            edits: vec![TextEdit::delete(range)],
        }
    }

    /// Create a single replacement fix.
    #[must_use]
    pub fn replace(label: impl Into<String>, range: Range, new_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edits: vec![TextEdit::replace(range, new_text)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn span(a: u32, b: u32) -> Range {
        Range::new(Position::new(0, a), Position::new(0, b))
    }

    #[test]
    fn test_text_edit_replace() {
        let edit = TextEdit::replace(span(10, 20), "replacement");
        assert_eq!(edit.range, span(10, 20));
        assert_eq!(edit.new_text, "replacement");
        assert!(!edit.is_deletion());
        assert!(!edit.is_insertion());
    }

    #[test]
    fn test_text_edit_delete() {
        let edit = TextEdit::delete(span(5, 15));
        assert!(edit.is_deletion());
        assert!(!edit.is_insertion());
    }

    #[test]
    fn test_text_edit_insert() {
        let edit = TextEdit::replace(span(10, 10), "\n");
        assert!(edit.is_insertion());
        assert!(!edit.is_deletion());
    }

    #[test]
    fn test_code_fix_constructors() {
        let fix = CodeFix::delete("Remove trailing whitespace", span(8, 10));
        assert_eq!(fix.label, "Remove trailing whitespace");
        assert_eq!(fix.edits.len(), 1);
        assert_eq!(fix.edits[0].new_text, "");

        let fix = CodeFix::replace("Use IS", span(3, 4), "IS");
        assert_eq!(fix.edits[0].new_text, "IS");
    }

    #[test]
    fn test_text_edit_serializes_camel_case() {
        let edit = TextEdit::replace(span(0, 1), "x");
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json["newText"], "x");
    }
}
