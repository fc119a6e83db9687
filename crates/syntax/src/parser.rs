//! Statement parser: splits the token stream into top-level statements.
//!
//! This is a structural scanner, not a grammar. It tracks bracket nesting so
//! that `;` inside `( .. )`, `[ .. ]` or `{ .. }` does not end a statement,
//! and relies on the lexer having already folded strings and comments into
//! single tokens.

use crate::line_index::LineIndex;
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};
use sqlint_types::{OffsetRange, Position, Range};
use std::sync::Arc;

/// Key of a statement in a [`FileMap`]: its 0-based sequence number among
/// the statements that were kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementId(usize);

impl StatementId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for StatementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One top-level statement.
///
/// Holds the tokens between two terminators (leading whitespace and
/// comments included, the `;` itself excluded). Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementAst {
    id: StatementId,
    document_tokens: Arc<[Token]>,
    token_span: std::ops::Range<usize>,
    range: Range,
    offset: OffsetRange,
    raw: String,
    kind: Option<String>,
    terminated: bool,
}

impl StatementAst {
    #[must_use]
    pub const fn id(&self) -> StatementId {
        self.id
    }

    /// The statement's tokens in document order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.document_tokens[self.token_span.clone()]
    }

    /// Indices of this statement's tokens within [`FileMap::tokens`].
    #[must_use]
    pub fn token_span(&self) -> std::ops::Range<usize> {
        self.token_span.clone()
    }

    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub const fn offset(&self) -> OffsetRange {
        self.offset
    }

    /// The statement's source text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Upper-cased leading keyword (`SELECT`, `UPDATE`, `WITH`, ...), if the
    /// statement starts with one.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Whether a `;` closed this statement (the last one may run to end of file).
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Tokens that are neither whitespace, newlines nor comments, paired with
    /// their index in [`FileMap::tokens`].
    pub fn significant_tokens(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.tokens()
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_significant())
            .map(|(i, token)| (self.token_span.start + i, token))
    }

    /// Line of the first significant token (or of the first token for
    /// comment-only statements).
    #[must_use]
    pub fn start_line(&self) -> u32 {
        self.significant_tokens()
            .next()
            .map_or(self.range.start.line, |(_, token)| token.range.start.line)
    }
}

/// The parsed document as seen by rules.
///
/// An ordered mapping from [`StatementId`] to [`StatementAst`] (insertion
/// order is document order), plus the full token stream so layout rules can
/// look at separators and trivia between statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMap {
    source: Arc<str>,
    tokens: Arc<[Token]>,
    statements: Vec<(StatementId, StatementAst)>,
    end: Position,
}

impl FileMap {
    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// `true` when the document holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: StatementId) -> Option<&StatementAst> {
        self.statements
            .binary_search_by_key(&id, |(key, _)| *key)
            .ok()
            .map(|i| &self.statements[i].1)
    }

    /// Statements in document order, with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (StatementId, &StatementAst)> + '_ {
        self.statements.iter().map(|(id, statement)| (*id, statement))
    }

    pub fn keys(&self) -> impl Iterator<Item = StatementId> + '_ {
        self.statements.iter().map(|(id, _)| *id)
    }

    pub fn statements(&self) -> impl Iterator<Item = &StatementAst> + '_ {
        self.statements.iter().map(|(_, statement)| statement)
    }

    /// Every token of the document, separators and inter-statement trivia included.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Position just past the last character of the document.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Index of the first significant token after `index` in [`FileMap::tokens`].
    #[must_use]
    pub fn next_significant(&self, index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, token)| token.is_significant())
            .map(|(i, _)| i)
    }
}

impl<'a> IntoIterator for &'a FileMap {
    type Item = (StatementId, &'a StatementAst);
    type IntoIter = Box<dyn Iterator<Item = (StatementId, &'a StatementAst)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Parse a document into a [`FileMap`].
///
/// Splits at `;` tokens outside any bracket pair. Segments without a single
/// non-whitespace token are dropped; a document without terminators yields
/// one statement.
#[must_use]
pub fn parse(text: &str) -> FileMap {
    let tokens: Arc<[Token]> = tokenize(text).into();
    let end = LineIndex::new(text).position(text, text.len());

    let mut statements = Vec::new();
    let mut depth: usize = 0;
    let mut segment_start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Punctuation {
            continue;
        }
        match token.text.as_str() {
            "(" | "[" | "{" => depth += 1,
            // Stray closers are tolerated; depth never goes negative
            ")" | "]" | "}" => depth = depth.saturating_sub(1),
            ";" if depth == 0 => {
                push_statement(&mut statements, &tokens, text, segment_start..i, true);
                segment_start = i + 1;
            }
            _ => {}
        }
    }
    push_statement(
        &mut statements,
        &tokens,
        text,
        segment_start..tokens.len(),
        false,
    );

    tracing::debug!(
        statements = statements.len(),
        tokens = tokens.len(),
        "Parsed document"
    );

    FileMap {
        source: Arc::from(text),
        tokens,
        statements,
        end,
    }
}

fn push_statement(
    statements: &mut Vec<(StatementId, StatementAst)>,
    tokens: &Arc<[Token]>,
    text: &str,
    span: std::ops::Range<usize>,
    terminated: bool,
) {
    let segment = &tokens[span.clone()];
    if segment.iter().all(Token::is_trivia) {
        return;
    }
    let (Some(first), Some(last)) = (segment.first(), segment.last()) else {
        return;
    };

    let kind = segment
        .iter()
        .find(|token| token.is_significant())
        .filter(|token| token.kind == TokenKind::Keyword)
        .map(|token| token.text.to_ascii_uppercase());

    let offset = OffsetRange::new(first.offset.start, last.offset.end);
    let id = StatementId::new(statements.len());
    statements.push((
        id,
        StatementAst {
            id,
            document_tokens: Arc::clone(tokens),
            token_span: span,
            range: Range::new(first.range.start, last.range.end),
            offset,
            raw: text[offset.as_std()].to_string(),
            kind,
            terminated,
        },
    ));
}
