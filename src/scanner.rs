//! Low-level cursors shared by both parsers.
//!
//! `CharScanner` walks a source string character by character with a
//! single-slot checkpoint for speculative lookahead. `TokenScanner` walks a
//! fully-materialized token list with sticky end-of-input semantics. Neither
//! ever fails: out-of-range operations degrade to `None` or empty results.

/// Cursor over an immutable source string.
///
/// Offsets are byte positions, but `peek` and `read` count characters, so
/// multi-byte text is never split mid-code-point.
pub struct CharScanner<'a> {
    source: &'a str,
    cursor: usize,
    saved: usize,
}

impl<'a> CharScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: 0,
            saved: 0,
        }
    }

    /// The next `n` characters without consuming them, or `None` when fewer
    /// than `n` remain. A partial window near end-of-input is `None`, same
    /// as a single-character peek at the end.
    pub fn peek(&self, n: usize) -> Option<&'a str> {
        let mut end = self.cursor;
        let mut count = 0;
        for (offset, ch) in self.source[self.cursor..].char_indices() {
            end = self.cursor + offset + ch.len_utf8();
            count += 1;
            if count == n {
                break;
            }
        }
        if count < n {
            None
        } else {
            Some(&self.source[self.cursor..end])
        }
    }

    /// Consume and return the next `n` characters. Reading past the end
    /// returns whatever remains.
    pub fn read(&mut self, n: usize) -> &'a str {
        let start = self.cursor;
        let mut end = start;
        let mut count = 0;
        for (offset, ch) in self.source[start..].char_indices() {
            if count == n {
                break;
            }
            end = start + offset + ch.len_utf8();
            count += 1;
        }
        self.cursor = end;
        &self.source[start..end]
    }

    /// Consume a maximal run of spaces, tabs and newlines.
    pub fn eat_whitespace(&mut self) -> &'a str {
        self.eat_while(|ch| matches!(ch, ' ' | '\t' | '\n'))
    }

    /// Consume a maximal run of the space character only.
    pub fn eat_spaces(&mut self) -> &'a str {
        self.eat_while(|ch| ch == ' ')
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.cursor;
        while let Some(ch) = self.source[self.cursor..].chars().next() {
            if !pred(ch) {
                break;
            }
            self.cursor += ch.len_utf8();
        }
        &self.source[start..self.cursor]
    }

    /// Save the cursor into the single checkpoint slot. A later store
    /// overwrites the slot; only one level of speculation is supported.
    pub fn store_position(&mut self) {
        self.saved = self.cursor;
    }

    /// Rewind the cursor to the stored checkpoint.
    pub fn restore_position(&mut self) {
        self.cursor = self.saved;
    }
}

/// Cursor over a token list produced up front by a tokenizer.
///
/// The final token is an end-of-input sentinel; once it has been returned,
/// further reads keep returning it without advancing.
pub struct TokenScanner<T> {
    tokens: Vec<T>,
    position: Option<usize>,
}

impl<T> TokenScanner<T> {
    /// The token list must be non-empty (tokenizers always append the
    /// end-of-input sentinel last).
    pub fn new(tokens: Vec<T>) -> Self {
        debug_assert!(!tokens.is_empty());
        Self {
            tokens,
            position: None,
        }
    }

    /// Advance to and return the next token, clamping at the final sentinel.
    pub fn read(&mut self) -> &T {
        let next = match self.position {
            None => 0,
            Some(i) => (i + 1).min(self.tokens.len() - 1),
        };
        self.position = Some(next);
        &self.tokens[next]
    }

    /// The token most recently returned by `read`, observable separately so
    /// call sites can re-inspect it after advancing in a loop.
    pub fn current(&self) -> Option<&T> {
        self.position.map(|i| &self.tokens[i])
    }

    /// The current cursor index, suitable for a later `reset`.
    #[allow(dead_code)]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Rewind to a previously-observed index (restart semantics).
    #[allow(dead_code)]
    pub fn reset(&mut self, position: Option<usize>) {
        self.position = position.map(|i| i.min(self.tokens.len() - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let scanner = CharScanner::new("abc");
        assert_eq!(scanner.peek(1), Some("a"));
        assert_eq!(scanner.peek(2), Some("ab"));
        assert_eq!(scanner.peek(3), Some("abc"));
    }

    #[test]
    fn peek_past_end_is_none() {
        let mut scanner = CharScanner::new("ab");
        assert_eq!(scanner.peek(3), None);
        scanner.read(2);
        assert_eq!(scanner.peek(1), None);
    }

    #[test]
    fn read_past_end_returns_remainder() {
        let mut scanner = CharScanner::new("ab");
        assert_eq!(scanner.read(5), "ab");
        assert_eq!(scanner.read(1), "");
    }

    #[test]
    fn read_advances() {
        let mut scanner = CharScanner::new("abcd");
        assert_eq!(scanner.read(2), "ab");
        assert_eq!(scanner.read(1), "c");
        assert_eq!(scanner.peek(1), Some("d"));
    }

    #[test]
    fn multibyte_never_split() {
        let mut scanner = CharScanner::new("é—x");
        assert_eq!(scanner.read(1), "é");
        assert_eq!(scanner.read(1), "—");
        assert_eq!(scanner.read(1), "x");
    }

    #[test]
    fn eat_whitespace_spans_lines() {
        let mut scanner = CharScanner::new(" \t\n  foo");
        assert_eq!(scanner.eat_whitespace(), " \t\n  ");
        assert_eq!(scanner.peek(3), Some("foo"));
    }

    #[test]
    fn eat_spaces_stops_at_tab_and_newline() {
        let mut scanner = CharScanner::new("  \tfoo");
        assert_eq!(scanner.eat_spaces(), "  ");
        assert_eq!(scanner.peek(1), Some("\t"));

        let mut scanner = CharScanner::new("  \nfoo");
        assert_eq!(scanner.eat_spaces(), "  ");
        assert_eq!(scanner.peek(1), Some("\n"));
    }

    #[test]
    fn store_and_restore_position() {
        let mut scanner = CharScanner::new("abcdef");
        scanner.read(2);
        scanner.store_position();
        scanner.read(3);
        assert_eq!(scanner.peek(1), Some("f"));
        scanner.restore_position();
        assert_eq!(scanner.peek(1), Some("c"));
    }

    #[test]
    fn token_scanner_reads_in_order() {
        let mut scanner = TokenScanner::new(vec![1, 2, 0]);
        assert_eq!(*scanner.read(), 1);
        assert_eq!(*scanner.read(), 2);
        assert_eq!(scanner.current(), Some(&2));
    }

    #[test]
    fn token_scanner_sticks_at_sentinel() {
        let mut scanner = TokenScanner::new(vec![1, 0]);
        scanner.read();
        scanner.read();
        assert_eq!(*scanner.read(), 0);
        assert_eq!(*scanner.read(), 0);
        assert_eq!(scanner.position(), Some(1));
    }

    #[test]
    fn token_scanner_reset_rewinds() {
        let mut scanner = TokenScanner::new(vec![1, 2, 3, 0]);
        scanner.read();
        let mark = scanner.position();
        scanner.read();
        scanner.read();
        scanner.reset(mark);
        assert_eq!(*scanner.read(), 2);
        scanner.reset(None);
        assert_eq!(*scanner.read(), 1);
    }
}
