//! Whole-text rewrite pipeline for C-family sources.
//!
//! This crate composes the two transformation stages into one pure function:
//!
//! 1. Blanking legacy `#include <ciso646>` lines (via [`strip`])
//! 2. Respelling alternative operator tokens outside comments and literals
//!    (via `opsym-scanner`)
//!
//! The stripper runs on the raw text before the scanner, so an include line
//! buried in a block comment is blanked too — the stripper is line-anchored
//! and knows nothing about lexical context. The composed function performs
//! no I/O and never fails; feeding it malformed C++ just produces equally
//! malformed output.

pub mod strip;

use opsym_common::OperatorTable;
use opsym_scanner::Scanner;

pub use strip::strip_ciso646_includes;

/// Rewrite one file's worth of source text.
///
/// Strips ciso646 includes, then respells alternative operator tokens in
/// code context. Pure: the same input and table always produce the same
/// output.
///
/// # Example
///
/// ```
/// use opsym_common::OperatorTable;
/// use opsym_rewrite::rewrite_source;
///
/// let table = OperatorTable::new();
/// let source = "#include <ciso646>\nif (a and b) { s = \"and\"; }\n";
/// assert_eq!(
///     rewrite_source(source, &table),
///     "\nif (a && b) { s = \"and\"; }\n"
/// );
/// ```
pub fn rewrite_source(source: &str, table: &OperatorTable) -> String {
    let stripped = strip_ciso646_includes(source);
    Scanner::rewrite(&stripped, table)
}
