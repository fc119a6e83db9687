//! Token types produced by the lexer.

use sqlint_types::{OffsetRange, Range};

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of spaces, tabs or other non-newline whitespace on one line
    Whitespace,
    /// A single line break (`\n`, `\r\n` or a lone `\r`)
    Newline,
    /// A bare, backtick-quoted or `@`-prefixed identifier
    Identifier,
    /// A reserved keyword (case-insensitive)
    Keyword,
    /// Structural punctuation and operators
    Punctuation,
    /// A quoted string or bytes literal, delimiters included
    StringLiteral,
    /// An integer, decimal, exponent or hex literal
    NumberLiteral,
    /// A line or block comment, delimiters included
    Comment,
    /// Anything the lexer could not classify (including unterminated literals)
    Other,
}

/// A position-tagged slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Editor coordinates of the token
    pub range: Range,
    /// Byte offsets of the token in the source
    pub offset: OffsetRange,
}

impl Token {
    /// Whitespace or newline.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Newline)
    }

    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment)
    }

    /// Returns `true` for tokens that carry meaning: not trivia and not a comment.
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        !self.is_trivia() && !self.is_comment()
    }

    /// `--` and `#` comments, which always end at a line break.
    #[must_use]
    pub fn is_line_comment(&self) -> bool {
        self.is_comment() && (self.text.starts_with("--") || self.text.starts_with('#'))
    }

    /// Case-insensitive keyword check.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(keyword)
    }

    /// Exact punctuation check.
    #[must_use]
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == punct
    }
}

/// Render tokens back into the text they were scanned from.
#[must_use]
pub fn join_token_text(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlint_types::Position;

    fn token(kind: TokenKind, text: &str) -> Token {
        let len = text.len();
        Token {
            kind,
            text: text.to_string(),
            range: Range::new(Position::new(0, 0), Position::new(0, len as u32)),
            offset: OffsetRange::new(0, len),
        }
    }

    #[test]
    fn test_classification_helpers() {
        assert!(token(TokenKind::Whitespace, "  ").is_trivia());
        assert!(token(TokenKind::Newline, "\n").is_trivia());
        assert!(!token(TokenKind::Comment, "-- x").is_significant());
        assert!(token(TokenKind::Comment, "-- x").is_line_comment());
        assert!(token(TokenKind::Comment, "# x").is_line_comment());
        assert!(!token(TokenKind::Comment, "/* x */").is_line_comment());
        assert!(token(TokenKind::Identifier, "col").is_significant());
    }

    #[test]
    fn test_keyword_and_punct_checks() {
        let select = token(TokenKind::Keyword, "select");
        assert!(select.is_keyword("SELECT"));
        assert!(!select.is_keyword("FROM"));

        let ident = token(TokenKind::Identifier, "select");
        assert!(!ident.is_keyword("SELECT"));

        let comma = token(TokenKind::Punctuation, ",");
        assert!(comma.is_punct(","));
        assert!(!comma.is_punct(";"));
    }

    #[test]
    fn test_join_token_text() {
        let tokens = vec![
            token(TokenKind::Keyword, "SELECT"),
            token(TokenKind::Whitespace, " "),
            token(TokenKind::NumberLiteral, "1"),
        ];
        assert_eq!(join_token_text(&tokens), "SELECT 1");
    }
}
