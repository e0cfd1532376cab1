//! Identifier and keyword lexing.

use crate::lexer::core::{is_ident_continue, Scanner};
use crate::token::{Keyword, Token};

impl<'a, 'h> Scanner<'a, 'h> {
    /// Lexes a maximal run of identifier characters, then classifies it as
    /// a keyword or an identifier (§3: identifiers are runs that are *not*
    /// reserved words).
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current() as char) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        match Keyword::from_str(text) {
            Some(kw) => Token::Keyword(kw),
            None => Token::Identifier(self.interner.intern(text)),
        }
    }
}
