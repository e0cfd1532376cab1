//! Statement compilation: let, if, while, do, return (§4.3).

use jackc_lex::Keyword;
use jackc_util::CompileError;

use crate::Compiler;

impl<'h> Compiler<'h> {
    /// `statement := letStmt | ifStmt | whileStmt | doStmt | returnStmt`
    pub(crate) fn compile_statement(&mut self) -> Result<(), CompileError> {
        if self.peek_is_keyword(Keyword::Let) {
            self.compile_let()
        } else if self.peek_is_keyword(Keyword::If) {
            self.compile_if()
        } else if self.peek_is_keyword(Keyword::While) {
            self.compile_while()
        } else if self.peek_is_keyword(Keyword::Do) {
            self.compile_do()
        } else if self.peek_is_keyword(Keyword::Return) {
            self.compile_return()
        } else {
            self.advance()?;
            Err(self.error("expected statement".to_string()))
        }
    }

    /// `letStmt := 'let' varName ('[' expr ']')? '=' expr ';'`
    fn compile_let(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let name = self.expect_identifier()?;
        let target = match (self.table.kind_of(&name), self.table.index_of(&name)) {
            (Some(k), Some(i)) => (k, i),
            _ => return Err(self.error(format!("undeclared identifier '{name}'"))),
        };
        let (kind, index) = target;

        if self.peek_is_symbol('[') {
            self.advance()?;
            self.compile_expression()?;
            self.expect_symbol(']')?;
            self.writer.write_push(kind.segment(), index);
            self.writer.write_add();
            self.expect_symbol('=')?;
            self.compile_expression()?;
            self.writer.write_pop("temp", 0);
            self.writer.write_pop("pointer", 1);
            self.writer.write_push("temp", 0);
            self.writer.write_pop("that", 0);
        } else {
            self.expect_symbol('=')?;
            self.compile_expression()?;
            self.writer.write_pop(kind.segment(), index);
        }
        self.expect_symbol(';')?;
        Ok(())
    }

    /// `ifStmt := 'if' '(' expr ')' '{' stmts '}' ('else' '{' stmts '}')?`
    fn compile_if(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let k = self.if_counter;
        self.if_counter += 1;

        self.expect_symbol('(')?;
        self.compile_expression()?;
        self.expect_symbol(')')?;

        let true_label = format!("IF_TRUE_{k}");
        let false_label = format!("IF_FALSE_{k}");
        let end_label = format!("IF_END_{k}");

        self.writer.write_if(&true_label);
        self.writer.write_goto(&false_label);
        self.writer.write_label(&true_label);

        self.expect_symbol('{')?;
        while !self.peek_is_symbol('}') {
            self.compile_statement()?;
        }
        self.expect_symbol('}')?;

        if self.peek_is_keyword(Keyword::Else) {
            self.advance()?;
            self.writer.write_goto(&end_label);
            self.writer.write_label(&false_label);
            self.expect_symbol('{')?;
            while !self.peek_is_symbol('}') {
                self.compile_statement()?;
            }
            self.expect_symbol('}')?;
            self.writer.write_label(&end_label);
        } else {
            self.writer.write_label(&false_label);
        }
        Ok(())
    }

    /// `whileStmt := 'while' '(' expr ')' '{' stmts '}'`
    fn compile_while(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let k = self.while_counter;
        self.while_counter += 1;
        let exp_label = format!("WHILE_EXP_{k}");
        let end_label = format!("WHILE_END_{k}");

        self.writer.write_label(&exp_label);
        self.expect_symbol('(')?;
        self.compile_expression()?;
        self.expect_symbol(')')?;
        self.writer.write_not();
        self.writer.write_if(&end_label);

        self.expect_symbol('{')?;
        while !self.peek_is_symbol('}') {
            self.compile_statement()?;
        }
        self.expect_symbol('}')?;

        self.writer.write_goto(&exp_label);
        self.writer.write_label(&end_label);
        Ok(())
    }

    /// `doStmt := 'do' subroutineCall ';'`
    fn compile_do(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        self.compile_subroutine_call()?;
        self.writer.write_pop("temp", 0);
        self.expect_symbol(';')?;
        Ok(())
    }

    /// `returnStmt := 'return' expr? ';'`
    fn compile_return(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        if self.peek_is_symbol(';') {
            self.writer.write_push("constant", 0);
        } else {
            self.compile_expression()?;
        }
        self.expect_symbol(';')?;
        self.writer.write_return();
        Ok(())
    }
}
