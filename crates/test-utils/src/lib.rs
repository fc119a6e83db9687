//! Shared test utilities for the SQL linter crates.
//!
//! - [`assertions`]: stable, readable formatting of diagnostics for `insta`
//!   snapshots.
//! - [`fixes`]: apply a diagnostic's [`CodeFix`](sqlint_types::CodeFix) to
//!   the source text it was computed against.

pub mod assertions;
pub mod fixes;

pub use assertions::{format_diagnostic_messages, format_diagnostics};
pub use fixes::{apply_fix, apply_fixes, offset_at};
