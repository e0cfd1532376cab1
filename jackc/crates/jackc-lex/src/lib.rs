//! Lexical analysis for Jack source files.
//!
//! Tokenizes a whole `.jack` file up front into a [`Lexer`], a one-token
//! lookahead cursor over the resulting stream (§4.1). There is no separate
//! token-stream type: `Lexer` both builds and indexes it.

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Keyword, Token, TokenKind, PUNCTUATORS};
