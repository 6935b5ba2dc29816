use crate::error::ParseError;

/// A cursor for character-by-character scanning of one line.
///
/// Block classification consumes markers from the front; the remaining
/// cursor is then handed to the inline engine, so columns in errors stay
/// relative to the original line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The line being scanned, without its terminator.
    pub s: &'a str,
    /// 1-based line number, for error reporting.
    pub line: usize,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `s`.
    pub fn new(s: &'a str, line: usize) -> Self {
        Self { s, line, i: 0 }
    }

    /// 1-based column of the current position.
    pub fn column(&self) -> usize {
        self.i + 1
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `offset` bytes ahead of the current position.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + offset).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or_default()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. Callers only skip ASCII markers they have
    /// already matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one full character.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes `expected` or fails with the character actually found.
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.i += 1;
            return Ok(());
        }
        Err(ParseError::UnexpectedChar {
            expected: expected as char,
            found: self.rest().chars().next(),
            line: self.line,
            column: self.column(),
        })
    }
}
