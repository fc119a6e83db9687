//! Position and range types for source locations.

use serde::{Deserialize, Serialize};

/// Byte offset range in a source document.
///
/// Used internally for slicing the source text. Byte offsets are
/// converted to line/character [`Position`]s when presenting to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetRange {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl OffsetRange {
    /// Create a new offset range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-width range at a specific offset.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of this range in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this is a zero-width range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range` for slicing.
    #[must_use]
    pub const fn as_std(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Position in a source document (editor coordinates, 0-indexed).
///
/// - `line` is 0-indexed (first line is 0)
/// - `character` is 0-indexed UTF-16 code units from line start
///
/// Editors count characters in UTF-16 code units, not bytes or
/// Unicode scalar values, so a character outside the BMP counts as 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: u32,
    /// Character offset within the line (0-indexed, UTF-16 code units)
    pub character: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.character.cmp(&other.character),
            ord => ord,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Range in a source document (editor coordinates).
///
/// A range represents a span of text from `start` (inclusive) to `end` (exclusive).
/// `start <= end` always holds for ranges built by [`Range::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Range {
    /// Create a new range. The endpoints are swapped if given out of order.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Create a zero-width range at a specific position.
    #[must_use]
    pub const fn at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns `true` if this is a zero-width range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.line == self.end.line && self.start.character == self.end.character
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn cover(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns `true` if the two half-open ranges share at least one position.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range_creation() {
        let range = OffsetRange::new(10, 20);
        assert_eq!(range.start, 10);
        assert_eq!(range.end, 20);
        assert_eq!(range.len(), 10);
        assert!(!range.is_empty());
        assert_eq!(range.as_std(), 10..20);
    }

    #[test]
    fn test_offset_range_at() {
        let range = OffsetRange::at(15);
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_offset_range_display() {
        let range = OffsetRange::new(10, 20);
        assert_eq!(format!("{range}"), "10..20");
    }

    #[test]
    fn test_position_ordering() {
        let p1 = Position::new(0, 5);
        let p2 = Position::new(0, 10);
        let p3 = Position::new(1, 0);

        assert!(p1 < p2);
        assert!(p2 < p3);
        assert!(p1 < p3);
        assert_eq!(p1.cmp(&p1), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_range_new_orders_endpoints() {
        let range = Range::new(Position::new(2, 0), Position::new(1, 4));
        assert_eq!(range.start, Position::new(1, 4));
        assert_eq!(range.end, Position::new(2, 0));
    }

    #[test]
    fn test_range_at() {
        let pos = Position::new(5, 10);
        let range = Range::at(pos);
        assert_eq!(range.start, pos);
        assert_eq!(range.end, pos);
        assert!(range.is_empty());
    }

    #[test]
    fn test_range_cover_and_overlap() {
        let a = Range::new(Position::new(0, 0), Position::new(0, 4));
        let b = Range::new(Position::new(0, 4), Position::new(1, 2));
        assert!(!a.overlaps(&b));
        assert_eq!(
            a.cover(&b),
            Range::new(Position::new(0, 0), Position::new(1, 2))
        );

        let c = Range::new(Position::new(0, 3), Position::new(0, 6));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_range_serializes_like_editor_range() {
        let range = Range::new(Position::new(1, 2), Position::new(1, 3));
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": { "line": 1, "character": 2 },
                "end": { "line": 1, "character": 3 }
            })
        );
    }
}
