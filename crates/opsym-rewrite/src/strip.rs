//! Removal of legacy `#include <ciso646>` lines.
//!
//! The header only exists to provide the alternative operator spellings, so
//! once those are rewritten the include is dead. Matching is anchored to
//! whole lines; a matched line is blanked rather than deleted so line
//! numbering in the rest of the file is preserved.

/// The legacy header whose include lines are blanked.
const LEGACY_HEADER: &str = "<ciso646>";

/// Blank every line that is an `#include <ciso646>` directive.
///
/// A line matches when it consists of optional spaces/tabs, `#include`,
/// optional spaces/tabs, `<ciso646>`, and then anything at all (a trailing
/// comment does not save the line). The line terminator survives, so the
/// output has the same number of lines as the input.
pub fn strip_ciso646_includes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        if is_ciso646_include(body) {
            out.push_str(newline);
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Whether a single line (without its terminator) is a ciso646 include.
fn is_ciso646_include(line: &str) -> bool {
    let rest = line.trim_start_matches([' ', '\t']);
    let Some(rest) = rest.strip_prefix("#include") else {
        return false;
    };
    let rest = rest.trim_start_matches([' ', '\t']);
    rest.starts_with(LEGACY_HEADER)
}
