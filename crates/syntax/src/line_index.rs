use sqlint_types::Position;

/// Line index for a document (for position conversions).
/// Maps byte offsets to line/character positions in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new line index from source text.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line, matching the lexer.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = text.as_bytes();

        for (i, b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {}
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column pair (0-based, column in bytes).
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));

        let col = offset - self.line_starts[line];
        (line, col)
    }

    /// Convert a byte offset in `text` to an editor [`Position`].
    ///
    /// Offsets past the end clamp to the end of the document; offsets inside
    /// a multi-byte character clamp to the start of that character.
    #[must_use]
    pub fn position(&self, text: &str, offset: usize) -> Position {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let (line, col) = self.line_col(offset);
        let line_start = offset - col;
        let character: usize = text[line_start..offset]
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .map(char::len_utf16)
            .sum();

        Position::new(line as u32, character as u32)
    }

    /// Convert an editor [`Position`] back to a byte offset in `text`.
    ///
    /// Characters past the end of a line clamp to the line's end (before its
    /// line break); lines past the end clamp to the end of the document.
    #[must_use]
    pub fn offset(&self, text: &str, position: Position) -> usize {
        let Some(line_start) = self.line_start(position.line as usize) else {
            return text.len();
        };

        let mut remaining = position.character as usize;
        let mut offset = line_start;
        for c in text[line_start..].chars() {
            if remaining == 0 || c == '\n' || c == '\r' {
                break;
            }
            remaining = remaining.saturating_sub(c.len_utf16());
            offset += c.len_utf8();
        }
        offset
    }

    /// Get the byte offset of the start of a line.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get the number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
