//! String literal lexing.

use crate::lexer::core::Scanner;
use crate::token::Token;

impl<'a, 'h> Scanner<'a, 'h> {
    /// Lexes a `"..."` string constant. Jack strings have no escape
    /// sequences and may not contain `"` or a newline (§3); the interior
    /// bytes are kept verbatim, spaces included.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() || self.cursor.current() == b'\n' {
                self.report_error("unterminated string literal".to_string());
                return None;
            }
            if self.cursor.current() == b'"' {
                let text = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance(); // closing quote
                return Some(Token::StringConst(text));
            }
            self.cursor.advance();
        }
    }
}
