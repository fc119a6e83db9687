//! Lexing and statement splitting for SQL documents.
//!
//! [`parse`] is the entry point: it tokenizes a document and groups the
//! tokens into top-level statements, producing a [`FileMap`] that lint rules
//! evaluate against. Parsing never fails; text the lexer cannot classify is
//! kept as [`TokenKind::Other`].

mod keywords;
mod lexer;
mod line_index;
mod parser;
mod token;

pub use keywords::is_keyword;
pub use lexer::{tokenize, Lexer};
pub use line_index::LineIndex;
pub use parser::{parse, FileMap, StatementAst, StatementId};
pub use token::{join_token_text, Token, TokenKind};
