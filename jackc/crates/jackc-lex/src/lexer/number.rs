//! Integer literal lexing.

use crate::lexer::core::Scanner;
use crate::token::Token;

/// Jack integer constants are 16-bit and non-negative (§3).
const MAX_INT_CONST: u32 = 32767;

impl<'a, 'h> Scanner<'a, 'h> {
    /// Lexes a maximal run of decimal digits and checks it fits `0..=32767`.
    pub(crate) fn lex_number(&mut self) -> Option<Token> {
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        match text.parse::<u32>() {
            Ok(n) if n <= MAX_INT_CONST => Some(Token::IntConst(n as u16)),
            _ => {
                self.report_error(format!("integer constant '{text}' out of range 0..32767"));
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackc_util::Handler;

    fn lex_one(source: &str) -> (Option<Token>, bool) {
        let mut handler = Handler::new();
        let mut scanner = Scanner {
            cursor: crate::cursor::Cursor::new(source),
            handler: &mut handler,
            interner: jackc_util::Interner::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        };
        let tok = scanner.lex_number();
        (tok, handler.has_errors())
    }

    #[test]
    fn zero_is_valid() {
        assert_eq!(lex_one("0").0, Some(Token::IntConst(0)));
    }

    #[test]
    fn max_value_is_valid() {
        assert_eq!(lex_one("32767").0, Some(Token::IntConst(32767)));
    }

    #[test]
    fn overflow_is_a_lexical_error() {
        let (tok, has_errors) = lex_one("32768");
        assert_eq!(tok, None);
        assert!(has_errors);
    }
}
