//! Class, class-variable, subroutine and local-variable declarations.
//!
//! Declarations only touch the symbol table; they never emit VM text
//! directly (§4.3) — the one exception is the subroutine header + prologue,
//! which is emitted once the body's `var` declarations are known.

use jackc_lex::Keyword;
use jackc_sym::Kind;
use jackc_util::{CompileError, SubroutineKind};

use crate::Compiler;

impl<'h> Compiler<'h> {
    /// `class := 'class' ident '{' classVarDec* subroutine* '}'`
    pub(crate) fn compile_class(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(Keyword::Class)?;
        let class_name = self.expect_identifier()?;
        self.class_name = class_name.clone();
        self.table = jackc_sym::SymbolTable::new(class_name);
        self.expect_symbol('{')?;

        while self.peek_is_keyword(Keyword::Static) || self.peek_is_keyword(Keyword::Field) {
            self.compile_class_var_dec()?;
        }
        while self.peek_is_keyword(Keyword::Constructor)
            || self.peek_is_keyword(Keyword::Function)
            || self.peek_is_keyword(Keyword::Method)
        {
            self.compile_subroutine()?;
        }
        self.expect_symbol('}')?;
        Ok(())
    }

    /// `classVarDec := ('static'|'field') type varName (',' varName)* ';'`
    fn compile_class_var_dec(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let kind = match self.lexer.keyword() {
            Keyword::Static => Kind::Static,
            Keyword::Field => Kind::Field,
            _ => return Err(self.error("expected 'static' or 'field'".to_string())),
        };
        let ty = self.compile_type()?;
        let name = self.expect_identifier()?;
        self.table.define(&name, &ty, kind);
        while self.peek_is_symbol(',') {
            self.advance()?;
            let name = self.expect_identifier()?;
            self.table.define(&name, &ty, kind);
        }
        self.expect_symbol(';')?;
        Ok(())
    }

    /// `subroutine := ('constructor'|'function'|'method') ('void'|type) ident '(' paramList ')' subBody`
    fn compile_subroutine(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let kind = match self.lexer.keyword() {
            Keyword::Constructor => SubroutineKind::Constructor,
            Keyword::Function => SubroutineKind::Function,
            Keyword::Method => SubroutineKind::Method,
            _ => return Err(self.error("expected 'constructor', 'function' or 'method'".to_string())),
        };
        self.table.start_subroutine(kind);
        self.if_counter = 0;
        self.while_counter = 0;

        self.compile_return_type()?;
        let name = self.expect_identifier()?;
        self.expect_symbol('(')?;
        self.compile_param_list()?;
        self.expect_symbol(')')?;
        self.compile_subroutine_body(kind, &name)?;
        Ok(())
    }

    /// `'void' | type` — Jack doesn't check this against the body, so it's
    /// consumed and discarded (§4.3 Non-goals: no type checking beyond
    /// method/function disambiguation).
    fn compile_return_type(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        match self.lexer.token_type() {
            jackc_lex::TokenKind::Keyword | jackc_lex::TokenKind::Identifier => Ok(()),
            _ => Err(self.error("expected return type".to_string())),
        }
    }

    /// `paramList := ε | type ident (',' type ident)*`
    fn compile_param_list(&mut self) -> Result<(), CompileError> {
        if self.peek_is_symbol(')') {
            return Ok(());
        }
        let ty = self.compile_type()?;
        let name = self.expect_identifier()?;
        self.table.define(&name, &ty, Kind::Argument);
        while self.peek_is_symbol(',') {
            self.advance()?;
            let ty = self.compile_type()?;
            let name = self.expect_identifier()?;
            self.table.define(&name, &ty, Kind::Argument);
        }
        Ok(())
    }

    /// `subBody := '{' varDec* statement* '}'`
    ///
    /// The `function` header is emitted only once all `var` declarations
    /// are seen, since `N = varCount(Var)` (§4.3) — safe because Jack's
    /// grammar requires every `var` before the first statement.
    fn compile_subroutine_body(&mut self, kind: SubroutineKind, name: &str) -> Result<(), CompileError> {
        self.expect_symbol('{')?;
        while self.peek_is_keyword(Keyword::Var) {
            self.compile_var_dec()?;
        }

        let n_locals = self.table.var_count(Kind::Var);
        let n_fields = self.table.var_count(Kind::Field);
        self.writer.write_function(kind, &self.class_name, name, n_locals, n_fields);

        while !self.peek_is_symbol('}') {
            self.compile_statement()?;
        }
        self.expect_symbol('}')?;
        Ok(())
    }

    /// `varDec := 'var' type varName (',' varName)* ';'`
    fn compile_var_dec(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let ty = self.compile_type()?;
        let name = self.expect_identifier()?;
        self.table.define(&name, &ty, Kind::Var);
        while self.peek_is_symbol(',') {
            self.advance()?;
            let name = self.expect_identifier()?;
            self.table.define(&name, &ty, Kind::Var);
        }
        self.expect_symbol(';')?;
        Ok(())
    }

    fn expect_keyword(&mut self, k: Keyword) -> Result<(), CompileError> {
        self.advance()?;
        if self.lexer.token_type() == jackc_lex::TokenKind::Keyword && self.lexer.keyword() == k {
            Ok(())
        } else {
            Err(self.error(format!("expected keyword '{}'", k.as_str())))
        }
    }
}
