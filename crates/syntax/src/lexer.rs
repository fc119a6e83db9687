//! Lexer: raw document text to a position-tagged token stream.
//!
//! The lexer is total. Every byte of the input ends up in exactly one token,
//! and input it cannot classify (stray characters, unterminated literals)
//! becomes [`TokenKind::Other`] instead of an error.

use crate::keywords;
use crate::token::{Token, TokenKind};
use sqlint_types::{OffsetRange, Position, Range};

/// Multi-character operators, longest match first.
const OPERATORS: &[&str] = &["<=", ">=", "<>", "!=", "||", "<<", ">>", "=>"];

/// Single characters scanned as [`TokenKind::Punctuation`].
const PUNCTUATION: &str = ",;()[]{}.+-*/%=<>!|&^~:?@";

/// Tokenize a whole document.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(text).collect();
    tracing::trace!(tokens = tokens.len(), bytes = text.len(), "Tokenized document");
    tokens
}

/// Streaming lexer over a document. Yields tokens in document order.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    offset: usize,
    line: u32,
    character: u32,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            line: 0,
            character: 0,
        }
    }

    fn rest(&self) -> &'a str {
        let text = self.text;
        &text[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    const fn current_position(&self) -> Position {
        Position::new(self.line, self.character)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.character = 0;
            }
            // The `\n` of a `\r\n` pair does the line change
            '\r' if self.peek() != Some('\n') => {
                self.line += 1;
                self.character = 0;
            }
            _ => self.character += c.len_utf16() as u32,
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn bump_to(&mut self, target: usize) {
        while self.offset < target && self.bump().is_some() {}
    }

    fn scan(&mut self, c: char) -> TokenKind {
        match c {
            '\n' => {
                self.bump();
                TokenKind::Newline
            }
            '\r' => {
                self.bump();
                if self.peek() == Some('\n') {
                    self.bump();
                }
                TokenKind::Newline
            }
            c if c.is_whitespace() => {
                self.bump_while(|c| c.is_whitespace() && c != '\n' && c != '\r');
                TokenKind::Whitespace
            }
            '-' if self.peek_nth(1) == Some('-') => self.line_comment(),
            '#' => self.line_comment(),
            '/' if self.peek_nth(1) == Some('*') => self.block_comment(),
            '\'' | '"' => self.string(c, false),
            '`' => self.quoted_identifier(),
            '@' => self.parameter(),
            c if c.is_ascii_digit() => self.number(),
            '.' if self.peek_nth(1).is_some_and(|n| n.is_ascii_digit()) => self.number(),
            c if is_ident_start(c) => self.word(),
            _ => self.punctuation(c),
        }
    }

    /// `--` or `#` to the end of the line. Trailing blanks stay outside the
    /// comment so layout rules still see them.
    fn line_comment(&mut self) -> TokenKind {
        let rest = self.rest();
        let line_len = rest.find(['\n', '\r']).unwrap_or(rest.len());
        let content_len = rest[..line_len].trim_end().len();
        self.bump_to(self.offset + content_len);
        TokenKind::Comment
    }

    fn block_comment(&mut self) -> TokenKind {
        match self.rest()[2..].find("*/") {
            Some(idx) => {
                self.bump_to(self.offset + 2 + idx + 2);
                TokenKind::Comment
            }
            None => {
                self.bump_to(self.text.len());
                TokenKind::Other
            }
        }
    }

    fn string(&mut self, quote: char, raw: bool) -> TokenKind {
        let triple: String = std::iter::repeat(quote).take(3).collect();

        if self.rest().starts_with(triple.as_str()) {
            self.bump_to(self.offset + 3);
            loop {
                if self.rest().starts_with(triple.as_str()) {
                    self.bump_to(self.offset + 3);
                    return TokenKind::StringLiteral;
                }
                match self.bump() {
                    None => return TokenKind::Other,
                    Some('\\') if !raw => {
                        self.bump();
                    }
                    Some(_) => {}
                }
            }
        }

        self.bump();
        loop {
            match self.peek() {
                None | Some('\n' | '\r') => return TokenKind::Other,
                Some('\\') if !raw => {
                    self.bump();
                    if !matches!(self.peek(), Some('\n' | '\r')) {
                        self.bump();
                    }
                }
                Some(c) if c == quote => {
                    self.bump();
                    return TokenKind::StringLiteral;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn quoted_identifier(&mut self) -> TokenKind {
        self.bump();
        loop {
            match self.peek() {
                None | Some('\n' | '\r') => return TokenKind::Other,
                Some('\\') => {
                    self.bump();
                    if !matches!(self.peek(), Some('\n' | '\r')) {
                        self.bump();
                    }
                }
                Some('`') => {
                    self.bump();
                    return TokenKind::Identifier;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    /// `@param` and `@@system_variable`; a lone `@` is punctuation.
    fn parameter(&mut self) -> TokenKind {
        let rest = self.rest();
        let sigils = if rest.starts_with("@@") { 2 } else { 1 };
        if rest[sigils..].chars().next().is_some_and(is_ident_start) {
            self.bump_to(self.offset + sigils);
            self.bump_while(is_ident_continue);
            TokenKind::Identifier
        } else {
            self.bump();
            TokenKind::Punctuation
        }
    }

    fn number(&mut self) -> TokenKind {
        let rest = self.rest();
        if (rest.starts_with("0x") || rest.starts_with("0X"))
            && rest[2..].chars().next().is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.bump_to(self.offset + 2);
            self.bump_while(|c| c.is_ascii_hexdigit());
            return TokenKind::NumberLiteral;
        }

        self.bump_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.bump();
            self.bump_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let has_exponent = match self.peek_nth(1) {
                Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if has_exponent {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                self.bump_while(|c| c.is_ascii_digit());
            }
        }

        TokenKind::NumberLiteral
    }

    /// Identifiers, keywords, and prefixed string literals (`r'..'`, `b".."`, `rb'..'`).
    fn word(&mut self) -> TokenKind {
        let text = self.text;
        let start = self.offset;
        self.bump_while(is_ident_continue);
        let word = &text[start..self.offset];

        if let Some(quote @ ('\'' | '"')) = self.peek() {
            let prefix = word.to_ascii_lowercase();
            if matches!(prefix.as_str(), "r" | "b" | "rb" | "br") {
                return self.string(quote, prefix.contains('r'));
            }
        }

        if keywords::is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    fn punctuation(&mut self, c: char) -> TokenKind {
        let rest = self.rest();
        if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            self.bump_to(self.offset + op.len());
            return TokenKind::Punctuation;
        }

        self.bump();
        if PUNCTUATION.contains(c) {
            TokenKind::Punctuation
        } else {
            TokenKind::Other
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.peek()?;
        let start_offset = self.offset;
        let start = self.current_position();
        let kind = self.scan(c);

        Some(Token {
            kind,
            text: self.text[start_offset..self.offset].to_string(),
            range: Range::new(start, self.current_position()),
            offset: OffsetRange::new(start_offset, self.offset),
        })
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
