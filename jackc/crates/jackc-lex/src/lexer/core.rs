//! Core lexer: tokenizes the whole source up front, then exposes it as a
//! one-token-lookahead cursor (§4.1).
//!
//! Tokenizing eagerly rather than lazily keeps the identifier-followed-by
//! `(`/`.`/`[` lookahead trick in the compiler trivial: `peek()` just reads
//! the next slot in an already-built `Vec<Token>`.

use jackc_util::{DiagnosticBuilder, Handler, Interner, Span};

use crate::cursor::Cursor;
use crate::token::{Keyword, Token, TokenKind};

pub struct Lexer {
    tokens: Vec<Token>,
    /// Index of the *current* token (the last one returned by `advance()`).
    /// `None` before the first `advance()` call.
    pos: Option<usize>,
    interner: Interner,
}

pub(crate) struct Scanner<'a, 'h> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) handler: &'h mut Handler,
    pub(crate) interner: Interner,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a, 'h> Scanner<'a, 'h> {
    fn new(source: &'a str, handler: &'h mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            interner: Interner::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    fn tokenize(mut self) -> (Vec<Token>, Interner) {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                break;
            }

            match self.next_token() {
                Some(tok) => tokens.push(tok),
                None => continue,
            }
        }
        (tokens, self.interner)
    }

    fn next_token(&mut self) -> Option<Token> {
        let c = self.cursor.current() as char;
        if crate::token::PUNCTUATORS.contains(&c) {
            self.cursor.advance();
            return Some(Token::Symbol(c));
        }
        match c {
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => Some(self.lex_identifier()),
            c => {
                self.report_error(format!("unexpected character '{c}'"));
                self.cursor.advance();
                None
            },
        }
    }

    pub(crate) fn report_error(&mut self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Lexer {
    /// Tokenizes `source` in full. Lexical errors (bad integer, unterminated
    /// string, unrecognized character) are reported to `handler`; the caller
    /// checks `handler.has_errors()` before trusting the token stream.
    pub fn new(source: &str, handler: &mut Handler) -> Self {
        let (tokens, interner) = Scanner::new(source, handler).tokenize();
        Lexer { tokens, pos: None, interner }
    }

    /// True while there are tokens beyond the current one.
    pub fn has_more(&self) -> bool {
        match self.pos {
            None => !self.tokens.is_empty(),
            Some(p) => p + 1 < self.tokens.len(),
        }
    }

    /// Consumes and returns the next token, making it current.
    ///
    /// # Panics
    /// Panics if called with no more tokens; callers must check `has_more()`.
    pub fn advance(&mut self) -> &Token {
        let next = match self.pos {
            None => 0,
            Some(p) => p + 1,
        };
        self.pos = Some(next);
        &self.tokens[next]
    }

    /// The next token's lexeme, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        let next = match self.pos {
            None => 0,
            Some(p) => p + 1,
        };
        self.tokens.get(next)
    }

    fn current(&self) -> &Token {
        let p = self.pos.expect("advance() must be called before reading the current token");
        &self.tokens[p]
    }

    pub fn token_type(&self) -> TokenKind {
        self.current().kind()
    }

    pub fn keyword(&self) -> Keyword {
        match self.current() {
            Token::Keyword(k) => *k,
            other => panic!("keyword() called on non-keyword token {other:?}"),
        }
    }

    pub fn symbol(&self) -> char {
        match self.current() {
            Token::Symbol(s) => *s,
            other => panic!("symbol() called on non-symbol token {other:?}"),
        }
    }

    pub fn identifier(&self) -> &str {
        match self.current() {
            Token::Identifier(sym) => self.interner.resolve(*sym),
            other => panic!("identifier() called on non-identifier token {other:?}"),
        }
    }

    pub fn int_val(&self) -> u16 {
        match self.current() {
            Token::IntConst(n) => *n,
            other => panic!("int_val() called on non-int token {other:?}"),
        }
    }

    pub fn string_val(&self) -> &str {
        match self.current() {
            Token::StringConst(s) => s,
            other => panic!("string_val() called on non-string token {other:?}"),
        }
    }

    /// All tokens, for the debug XML trace (§6) which needs to replay the
    /// whole stream independent of the compiler's own cursor position.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Resolves an interned identifier from anywhere in [`tokens`](Self::tokens),
    /// for callers (the debug XML trace) that walk the stream independent of
    /// the cursor's typed accessors.
    pub fn resolve(&self, sym: jackc_util::Symbol) -> &str {
        self.interner.resolve(sym)
    }
}
