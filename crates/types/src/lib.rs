//! Foundation types for the SQL linter.
//!
//! This crate provides shared types used across the tokenizer, the parser
//! and the rule engine. Its only dependency is `serde`, so hosts can map
//! values straight onto their own wire types.
//!
//! # Type Categories
//!
//! - **Position types**: [`Position`], [`Range`], [`OffsetRange`]
//! - **Severity types**: [`DiagnosticSeverity`], [`RuleSeverity`]
//! - **Edit types**: [`TextEdit`], [`CodeFix`]

mod edits;
mod position;
mod severity;

pub use edits::{CodeFix, TextEdit};
pub use position::{OffsetRange, Position, Range};
pub use severity::{DiagnosticSeverity, RuleSeverity};
