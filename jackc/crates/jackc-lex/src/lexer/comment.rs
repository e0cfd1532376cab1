//! Comment and whitespace skipping.

use crate::lexer::core::Scanner;

impl<'a, 'h> Scanner<'a, 'h> {
    /// Skips whitespace and both comment forms. Called before lexing each
    /// token so `token_start` always lands on real content.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.cursor.advance(),
                b'/' => match self.cursor.peek(1) {
                    b'/' => self.skip_line_comment(),
                    b'*' => self.skip_block_comment(),
                    _ => return,
                },
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
    }

    /// Jack block comments do not nest (§4.1): the first `*/` closes the
    /// comment regardless of any `/*` seen inside.
    fn skip_block_comment(&mut self) {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated block comment".to_string());
                return;
            }
            if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }
}
