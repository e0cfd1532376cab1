//! Single-pass recursive-descent compiler (§4.3).
//!
//! No AST is built: every `compile_*` method consumes exactly the tokens of
//! one grammar production and emits VM text as a side effect through
//! [`VmWriter`]. One token of lookahead (`Lexer::peek`) is all the grammar
//! needs, including the identifier-followed-by-`(`/`.`/`[` trick used to
//! tell a bare variable reference from an array access or a call.

mod expr;
mod items;
mod stmt;

use jackc_gen::VmWriter;
use jackc_lex::{Keyword, Lexer, TokenKind};
use jackc_sym::SymbolTable;
use jackc_util::{CompileError, DiagnosticBuilder, Handler};

/// Drives one `.jack` file from source text to VM text. §5 requires a fresh
/// lexer, symbol table and emitter per file, so this type is built and
/// discarded per compilation rather than reused.
pub struct Compiler<'h> {
    lexer: Lexer,
    table: SymbolTable,
    writer: VmWriter,
    handler: &'h mut Handler,
    class_name: String,
    if_counter: u32,
    while_counter: u32,
}

/// Compiles one `.jack` source file to VM text.
///
/// Lexical errors surface first (the lexer has already run to completion
/// over `source`); syntactic and semantic errors are detected and reported
/// as they're encountered, fail-fast (§7) — the first error aborts the
/// whole file.
pub fn compile(source: &str, handler: &mut Handler) -> Result<String, CompileError> {
    let lexer = Lexer::new(source, handler);
    if handler.has_errors() {
        let message = handler
            .first_error()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "lexical error".to_string());
        return Err(CompileError(message));
    }

    let mut compiler = Compiler {
        lexer,
        table: SymbolTable::new(String::new()),
        writer: VmWriter::new(),
        handler,
        class_name: String::new(),
        if_counter: 0,
        while_counter: 0,
    };
    compiler.compile_class()?;
    Ok(compiler.writer.finish())
}

impl<'h> Compiler<'h> {
    /// Consumes the next token, making it current. Unlike [`Lexer::advance`]
    /// this reports a diagnostic instead of panicking when the stream is
    /// exhausted mid-grammar.
    fn advance(&mut self) -> Result<(), CompileError> {
        if !self.lexer.has_more() {
            return Err(self.error("unexpected end of input".to_string()));
        }
        self.lexer.advance();
        Ok(())
    }

    fn peek_is_symbol(&self, c: char) -> bool {
        self.lexer.peek().is_some_and(|t| t.is_symbol(c))
    }

    fn peek_is_keyword(&self, k: Keyword) -> bool {
        self.lexer.peek().is_some_and(|t| t.is_keyword(k))
    }

    fn expect_symbol(&mut self, c: char) -> Result<(), CompileError> {
        self.advance()?;
        if self.lexer.token_type() == TokenKind::Symbol && self.lexer.symbol() == c {
            Ok(())
        } else {
            Err(self.error(format!("expected '{c}'")))
        }
    }

    fn expect_identifier(&mut self) -> Result<String, CompileError> {
        self.advance()?;
        if self.lexer.token_type() == TokenKind::Identifier {
            Ok(self.lexer.identifier().to_string())
        } else {
            Err(self.error("expected identifier".to_string()))
        }
    }

    /// `int` | `char` | `boolean` | a class name.
    fn compile_type(&mut self) -> Result<String, CompileError> {
        self.advance()?;
        match self.lexer.token_type() {
            TokenKind::Keyword => match self.lexer.keyword() {
                Keyword::Int => Ok("int".to_string()),
                Keyword::Char => Ok("char".to_string()),
                Keyword::Boolean => Ok("boolean".to_string()),
                _ => Err(self.error("expected type".to_string())),
            },
            TokenKind::Identifier => Ok(self.lexer.identifier().to_string()),
            _ => Err(self.error("expected type".to_string())),
        }
    }

    fn error(&mut self, message: String) -> CompileError {
        DiagnosticBuilder::error(message.clone()).emit(self.handler);
        CompileError(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_ok(source: &str) -> String {
        let mut handler = Handler::new();
        compile(source, &mut handler).expect("expected successful compilation")
    }

    #[test]
    fn empty_method() {
        let vm = compile_ok("class A { method void m() { return; } }");
        assert_eq!(
            vm,
            "function A.m 0\n\
             push argument 0\n\
             pop pointer 0\n\
             push constant 0\n\
             return\n"
        );
    }

    #[test]
    fn constructor_with_one_field() {
        let vm = compile_ok(
            "class P { field int x; constructor P new(int v) { let x = v; return this; } }",
        );
        assert_eq!(
            vm,
            "function P.new 0\n\
             push constant 1\n\
             call Memory.alloc 1\n\
             pop pointer 0\n\
             push argument 0\n\
             pop this 0\n\
             push pointer 0\n\
             return\n"
        );
    }

    #[test]
    fn while_loop_counting_down() {
        let vm = compile_ok(
            "class Test { function void f() { var int i; let i = 3; \
             while (i > 0) { let i = i - 1; } return; } }",
        );
        assert_eq!(
            vm,
            "function Test.f 1\n\
             push constant 3\n\
             pop local 0\n\
             label WHILE_EXP_0\n\
             push local 0\n\
             push constant 0\n\
             gt\n\
             not\n\
             if-goto WHILE_END_0\n\
             push local 0\n\
             push constant 1\n\
             sub\n\
             pop local 0\n\
             goto WHILE_EXP_0\n\
             label WHILE_END_0\n\
             push constant 0\n\
             return\n"
        );
    }

    #[test]
    fn if_else_with_two_locals() {
        let vm = compile_ok(
            "class Test { function void f() { var int x, y; let x = 0; \
             if (x = 0) { let y = 1; } else { let y = 2; } return; } }",
        );
        assert_eq!(
            vm,
            "function Test.f 2\n\
             push constant 0\n\
             pop local 0\n\
             push local 0\n\
             push constant 0\n\
             eq\n\
             if-goto IF_TRUE_0\n\
             goto IF_FALSE_0\n\
             label IF_TRUE_0\n\
             push constant 1\n\
             pop local 1\n\
             goto IF_END_0\n\
             label IF_FALSE_0\n\
             push constant 2\n\
             pop local 1\n\
             label IF_END_0\n\
             push constant 0\n\
             return\n"
        );
    }

    #[test]
    fn string_term_is_built_byte_by_byte() {
        let vm = compile_ok(
            "class Test { function void f() { var String s; let s = \"Hi\"; return; } }",
        );
        assert_eq!(
            vm,
            "function Test.f 1\n\
             push constant 2\n\
             call String.new 1\n\
             push constant 72\n\
             call String.appendChar 2\n\
             push constant 105\n\
             call String.appendChar 2\n\
             pop local 0\n\
             push constant 0\n\
             return\n"
        );
    }

    #[test]
    fn instance_method_call_pushes_receiver_first() {
        let vm = compile_ok(
            "class Test { function void f() { var Point p; do p.move(1, 2); return; } }",
        );
        assert_eq!(
            vm,
            "function Test.f 1\n\
             push local 0\n\
             push constant 1\n\
             push constant 2\n\
             call Point.move 3\n\
             pop temp 0\n\
             push constant 0\n\
             return\n"
        );
    }

    #[test]
    fn unresolved_receiver_is_treated_as_a_class_name() {
        let vm = compile_ok(
            "class Test { function void f() { var int x; do Math.abs(x); return; } }",
        );
        assert_eq!(
            vm,
            "function Test.f 1\n\
             push local 0\n\
             call Math.abs 1\n\
             pop temp 0\n\
             push constant 0\n\
             return\n"
        );
    }

    #[test]
    fn no_operator_precedence() {
        let vm = compile_ok("class A { function void f() { do g(1+2*3); return; } }");
        assert!(vm.contains(
            "push constant 1\n\
             push constant 2\n\
             push constant 3\n\
             call Math.multiply 2\n\
             add\n"
        ));
    }

    #[test]
    fn implicit_method_call_pushes_this_first() {
        let vm = compile_ok("class A { method void m() { do helper(); return; } }");
        assert!(vm.contains("push pointer 0\ncall A.helper 1\n"));
    }

    #[test]
    fn undeclared_identifier_is_a_semantic_error() {
        let mut handler = Handler::new();
        let result = compile("class A { function void f() { let x = 1; return; } }", &mut handler);
        assert!(result.is_err());
        assert!(handler.has_errors());
    }

    #[test]
    fn overflowing_integer_literal_is_a_lexical_error() {
        let mut handler = Handler::new();
        let result = compile("class A { function void f() { return 99999; } }", &mut handler);
        assert!(result.is_err());
    }
}
