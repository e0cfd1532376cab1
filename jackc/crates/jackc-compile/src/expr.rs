//! Expression, term and subroutine-call compilation (§4.3).
//!
//! No operator precedence: every binary operator is emitted immediately
//! after its right operand, so `a+b*c` lowers as `(a+b)*c` would.

use jackc_lex::{Keyword, Token, TokenKind};
use jackc_util::CompileError;

use crate::Compiler;

const BINARY_OPERATORS: [char; 9] = ['+', '-', '*', '/', '&', '|', '<', '>', '='];

impl<'h> Compiler<'h> {
    /// `expr := term (op term)*`
    pub(crate) fn compile_expression(&mut self) -> Result<(), CompileError> {
        self.compile_term()?;
        while let Some(op) = self.peek_binary_operator() {
            self.advance()?;
            self.compile_term()?;
            self.emit_binary_op(op);
        }
        Ok(())
    }

    fn peek_binary_operator(&self) -> Option<char> {
        match self.lexer.peek()? {
            Token::Symbol(c) if BINARY_OPERATORS.contains(c) => Some(*c),
            _ => None,
        }
    }

    fn emit_binary_op(&mut self, op: char) {
        match op {
            '+' => self.writer.write_add(),
            '-' => self.writer.write_sub(),
            '*' => self.writer.write_call("Math.multiply", 2),
            '/' => self.writer.write_call("Math.divide", 2),
            '&' => self.writer.write_and(),
            '|' => self.writer.write_or(),
            '<' => self.writer.write_lt(),
            '>' => self.writer.write_gt(),
            '=' => self.writer.write_eq(),
            _ => unreachable!("peek_binary_operator only yields operators from BINARY_OPERATORS"),
        }
    }

    /// `term := intConst | strConst | 'true'|'false'|'null'|'this'`
    /// `     | varName | varName '[' expr ']' | subroutineCall`
    /// `     | '(' expr ')' | ('-'|'~') term`
    fn compile_term(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        match self.lexer.token_type() {
            TokenKind::IntConst => {
                self.writer.write_push("constant", self.lexer.int_val());
                Ok(())
            },
            TokenKind::StringConst => {
                let s = self.lexer.string_val().to_string();
                self.writer.write_push("constant", s.len() as u16);
                self.writer.write_call("String.new", 1);
                for byte in s.bytes() {
                    self.writer.write_push("constant", byte as u16);
                    self.writer.write_call("String.appendChar", 2);
                }
                Ok(())
            },
            TokenKind::Keyword => match self.lexer.keyword() {
                Keyword::True => {
                    self.writer.write_push("constant", 0);
                    self.writer.write_not();
                    Ok(())
                },
                Keyword::False | Keyword::Null => {
                    self.writer.write_push("constant", 0);
                    Ok(())
                },
                Keyword::This => {
                    self.writer.write_push("pointer", 0);
                    Ok(())
                },
                _ => Err(self.error("expected term".to_string())),
            },
            TokenKind::Symbol => match self.lexer.symbol() {
                '(' => {
                    self.compile_expression()?;
                    self.expect_symbol(')')?;
                    Ok(())
                },
                '-' => {
                    self.compile_term()?;
                    self.writer.write_neg();
                    Ok(())
                },
                '~' => {
                    self.compile_term()?;
                    self.writer.write_not();
                    Ok(())
                },
                _ => Err(self.error("expected term".to_string())),
            },
            TokenKind::Identifier => {
                let name = self.lexer.identifier().to_string();
                self.compile_identifier_term(&name)
            },
        }
    }

    /// Dispatches on the identifier already consumed as `name`: a plain
    /// variable reference, an array access, or (via `compile_subroutine_call_named`)
    /// a call — the one-token lookahead trick named in §4.3.
    fn compile_identifier_term(&mut self, name: &str) -> Result<(), CompileError> {
        if self.peek_is_symbol('[') {
            self.advance()?;
            let (kind, index) = match (self.table.kind_of(name), self.table.index_of(name)) {
                (Some(k), Some(i)) => (k, i),
                _ => return Err(self.error(format!("undeclared identifier '{name}'"))),
            };
            self.writer.write_push(kind.segment(), index);
            self.compile_expression()?;
            self.expect_symbol(']')?;
            self.writer.write_add();
            self.writer.write_pop("pointer", 1);
            self.writer.write_push("that", 0);
            Ok(())
        } else if self.peek_is_symbol('(') || self.peek_is_symbol('.') {
            self.compile_subroutine_call_named(name)
        } else {
            match (self.table.kind_of(name), self.table.index_of(name)) {
                (Some(k), Some(i)) => {
                    self.writer.write_push(k.segment(), i);
                    Ok(())
                },
                _ => Err(self.error(format!("undeclared identifier '{name}'"))),
            }
        }
    }

    /// `subroutineCall := ident '(' exprList ')' | ident '.' ident '(' exprList ')'`
    ///
    /// Entry point for `do` statements, which haven't consumed the leading
    /// identifier yet.
    pub(crate) fn compile_subroutine_call(&mut self) -> Result<(), CompileError> {
        let name = self.expect_identifier()?;
        self.compile_subroutine_call_named(&name)
    }

    /// The central call-resolution rule (§4.3): `x(args)` is an implicit
    /// method call on `this`; `x.y(args)` disambiguates purely by whether
    /// `x` resolves in the symbol table — found means instance, absent means
    /// class name.
    fn compile_subroutine_call_named(&mut self, name: &str) -> Result<(), CompileError> {
        if self.peek_is_symbol('.') {
            self.advance()?;
            let member = self.expect_identifier()?;
            self.expect_symbol('(')?;

            let receiver = match (self.table.kind_of(name), self.table.index_of(name), self.table.type_of(name)) {
                (Some(k), Some(i), Some(ty)) => Some((k, i, ty.to_string())),
                _ => None,
            };

            match receiver {
                Some((kind, index, ty)) => {
                    self.writer.write_push(kind.segment(), index);
                    let n_args = self.compile_expression_list()?;
                    self.expect_symbol(')')?;
                    self.writer.write_call(&format!("{ty}.{member}"), n_args + 1);
                },
                None => {
                    let n_args = self.compile_expression_list()?;
                    self.expect_symbol(')')?;
                    self.writer.write_call(&format!("{name}.{member}"), n_args);
                },
            }
            Ok(())
        } else {
            self.expect_symbol('(')?;
            self.writer.write_push("pointer", 0);
            let n_args = self.compile_expression_list()?;
            self.expect_symbol(')')?;
            let class_name = self.class_name.clone();
            self.writer.write_call(&format!("{class_name}.{name}"), n_args + 1);
            Ok(())
        }
    }

    /// `exprList := ε | expr (',' expr)*`. Returns the argument count.
    fn compile_expression_list(&mut self) -> Result<u16, CompileError> {
        if self.peek_is_symbol(')') {
            return Ok(0);
        }
        self.compile_expression()?;
        let mut count: u16 = 1;
        while self.peek_is_symbol(',') {
            self.advance()?;
            self.compile_expression()?;
            count += 1;
        }
        Ok(count)
    }
}
