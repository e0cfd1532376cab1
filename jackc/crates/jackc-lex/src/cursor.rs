//! Character cursor for traversing source code.
//!
//! Jack source is ASCII (§6), so the cursor walks bytes rather than
//! `char_indices` — simpler and exact for this encoding.

pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source: source.as_bytes(), position: 0, line: 1, column: 1 }
    }

    /// Byte at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        *self.source.get(self.position + offset).unwrap_or(&0)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        if self.source[self.position] == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// The raw text between `start` (byte offset) and the cursor's current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        std::str::from_utf8(&self.source[start..self.position]).unwrap_or("")
    }
}
