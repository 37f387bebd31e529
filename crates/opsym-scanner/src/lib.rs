// opsym scanner -- single-pass rewriter for alternative operator spellings.

mod cursor;

use cursor::Cursor;
use opsym_common::OperatorTable;

/// Lexical context of the current scan position.
///
/// Exactly one context is active at a time; substitution happens only in
/// `Code`. The other contexts copy their contents verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Plain code, the initial state.
    Code,
    /// Inside a `//` comment, up to and including the terminating newline.
    LineComment,
    /// Inside a `/* ... */` comment.
    BlockComment,
    /// Inside a string or char literal opened by the given quote character.
    StringLiteral(char),
}

/// The operator-respelling scanner.
///
/// Walks the source once, classifying every character into a [`LexState`],
/// and replaces whole-word occurrences of the table's spellings with their
/// symbols while in `Code`. Comment and literal contents pass through
/// untouched, and malformed input (unterminated comments or literals) is
/// copied verbatim rather than rejected.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    table: &'a OperatorTable,
    state: LexState,
    out: String,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over the given source text.
    pub fn new(source: &'a str, table: &'a OperatorTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            table,
            state: LexState::Code,
            out: String::with_capacity(source.len()),
        }
    }

    /// Convenience: rewrite the entire source in one call.
    pub fn rewrite(source: &str, table: &OperatorTable) -> String {
        Scanner::new(source, table).run()
    }

    /// Consume the scanner and produce the rewritten text.
    ///
    /// Halts at end of input regardless of the active state; an EOF inside
    /// a comment or literal leaves the already-copied tail in the output.
    pub fn run(mut self) -> String {
        while !self.cursor.is_eof() {
            match self.state {
                LexState::Code => self.scan_code(),
                LexState::LineComment => self.scan_line_comment(),
                LexState::BlockComment => self.scan_block_comment(),
                LexState::StringLiteral(quote) => self.scan_string(quote),
            }
        }
        self.out
    }

    /// One step in the `Code` state: open a comment or literal, rewrite a
    /// whole word, or copy a single character.
    fn scan_code(&mut self) {
        let Some(c) = self.cursor.peek() else { return };
        match c {
            '/' if self.cursor.peek_next() == Some('/') => {
                self.emit_char();
                self.emit_char();
                self.state = LexState::LineComment;
            }
            '/' if self.cursor.peek_next() == Some('*') => {
                self.emit_char();
                self.emit_char();
                self.state = LexState::BlockComment;
            }
            '"' | '\'' => {
                self.emit_char();
                self.state = LexState::StringLiteral(c);
            }
            c if is_word_char(c) => self.scan_word(),
            _ => self.emit_char(),
        }
    }

    /// Read a maximal identifier word and emit its replacement, or the word
    /// itself if it is not an alternative spelling.
    ///
    /// In `Code` the scanner only ever consumes word characters through this
    /// function, and every other consumption is a non-word character, so a
    /// word character at the cursor always sits at a left word boundary.
    /// The maximal read supplies the right boundary: `android` is looked up
    /// as one word and never matches `and`.
    fn scan_word(&mut self) {
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(is_word_char);
        let word = self.cursor.slice(start, self.cursor.pos());
        match self.table.replacement(word) {
            Some(symbol) => self.out.push_str(symbol),
            None => self.out.push_str(word),
        }
    }

    /// Copy verbatim up to and including the newline, then return to `Code`.
    fn scan_line_comment(&mut self) {
        while let Some(c) = self.cursor.advance() {
            self.out.push(c);
            if c == '\n' {
                self.state = LexState::Code;
                return;
            }
        }
    }

    /// Copy verbatim until `*/`; both closer characters are emitted.
    fn scan_block_comment(&mut self) {
        while let Some(c) = self.cursor.advance() {
            self.out.push(c);
            if c == '*' && self.cursor.peek() == Some('/') {
                self.emit_char();
                self.state = LexState::Code;
                return;
            }
        }
    }

    /// Copy verbatim until an unescaped closing quote.
    ///
    /// The escape check is a single character of lookback: a quote preceded
    /// by `\` does not close the literal. The lookback does not ask whether
    /// that backslash is itself escaped, so a literal ending in `\\` scans
    /// past its real terminator. Deliberate; see DESIGN.md.
    fn scan_string(&mut self, quote: char) {
        while let Some(c) = self.cursor.peek() {
            let closes = c == quote && self.cursor.prev() != Some('\\');
            self.out.push(c);
            self.cursor.advance();
            if closes {
                self.state = LexState::Code;
                return;
            }
        }
    }

    /// Copy the current character to the output unchanged.
    fn emit_char(&mut self) {
        if let Some(c) = self.cursor.advance() {
            self.out.push(c);
        }
    }
}

/// Whether a character can be part of an identifier word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(source: &str) -> String {
        let table = OperatorTable::new();
        Scanner::rewrite(source, &table)
    }

    #[test]
    fn replaces_spellings_in_plain_code() {
        assert_eq!(rewrite("if (a and b or not c) {}"), "if (a && b || ! c) {}");
    }

    #[test]
    fn replaces_every_spelling() {
        assert_eq!(rewrite("a and b"), "a && b");
        assert_eq!(rewrite("a or b"), "a || b");
        assert_eq!(rewrite("not a"), "! a");
        assert_eq!(rewrite("a xor b"), "a ^ b");
        assert_eq!(rewrite("a bitand b"), "a & b");
        assert_eq!(rewrite("a bitor b"), "a | b");
        assert_eq!(rewrite("compl a"), "~ a");
        assert_eq!(rewrite("a and_eq b"), "a &= b");
        assert_eq!(rewrite("a or_eq b"), "a |= b");
        assert_eq!(rewrite("a xor_eq b"), "a ^= b");
        assert_eq!(rewrite("a not_eq b"), "a != b");
    }

    #[test]
    fn spelling_inside_longer_identifier_is_untouched() {
        assert_eq!(rewrite("android = 1;"), "android = 1;");
        assert_eq!(rewrite("operand and android"), "operand && android");
        assert_eq!(rewrite("x_and_y"), "x_and_y");
        assert_eq!(rewrite("1and"), "1and");
    }

    #[test]
    fn line_comment_contents_are_untouched() {
        assert_eq!(rewrite("x; // a and b\ny and z"), "x; // a and b\ny && z");
    }

    #[test]
    fn line_comment_at_eof_without_newline() {
        assert_eq!(rewrite("// and or not"), "// and or not");
    }

    #[test]
    fn block_comment_contents_are_untouched() {
        assert_eq!(rewrite("/* and */ and /* or */"), "/* and */ && /* or */");
    }

    #[test]
    fn unterminated_block_comment_is_copied_verbatim() {
        assert_eq!(rewrite("x and y /* trailing and"), "x && y /* trailing and");
    }

    #[test]
    fn block_comment_spanning_lines() {
        assert_eq!(
            rewrite("/* and\n   or\n*/ not x"),
            "/* and\n   or\n*/ ! x"
        );
    }

    #[test]
    fn string_contents_are_untouched() {
        assert_eq!(rewrite("s = \"a and b\";"), "s = \"a and b\";");
        assert_eq!(rewrite("s = \"and\" and t;"), "s = \"and\" && t;");
    }

    #[test]
    fn char_literal_contents_are_untouched() {
        assert_eq!(rewrite("c = 'x' and d;"), "c = 'x' && d;");
    }

    #[test]
    fn escaped_quote_does_not_close_the_literal() {
        assert_eq!(rewrite(r#"s = "a\"and\"b";"#), r#"s = "a\"and\"b";"#);
    }

    #[test]
    fn unterminated_string_is_copied_verbatim() {
        assert_eq!(rewrite("s = \"and or not"), "s = \"and or not");
    }

    #[test]
    fn double_backslash_before_quote_keeps_the_literal_open() {
        // Single-character lookback: the quote after `\\` reads as escaped,
        // so the literal runs to end of input and nothing is rewritten.
        assert_eq!(rewrite(r#"s = "a\\" and b"#), r#"s = "a\\" and b"#);
    }

    #[test]
    fn adjacent_spellings_are_each_replaced() {
        assert_eq!(rewrite("not not x"), "! ! x");
    }

    #[test]
    fn spelling_directly_after_literal_or_comment_is_replaced() {
        assert_eq!(rewrite("\"s\"and x"), "\"s\"&& x");
        assert_eq!(rewrite("/*c*/and x"), "/*c*/&& x");
    }

    #[test]
    fn comment_opener_inside_string_is_content() {
        assert_eq!(rewrite("s = \"// and\"; x and y"), "s = \"// and\"; x && y");
    }

    #[test]
    fn rewrite_is_idempotent_on_code() {
        let once = rewrite("if (a and b or not c) { d = e bitand f; }");
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert_eq!(rewrite(""), "");
    }
}
