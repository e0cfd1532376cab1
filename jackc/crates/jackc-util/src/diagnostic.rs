//! Diagnostic reporting.
//!
//! A fluent `DiagnosticBuilder` + `Handler` split: a builder accumulates a
//! message/span, then `.emit(&handler)` records it. Policy is fail-fast —
//! the driver checks `Handler::has_errors()` after compiling each file and
//! aborts that file's output on the first error; there is no multi-error
//! recovery.

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message with its source location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}: {}", self.level, self.span.line, self.span.column, self.message)
    }
}

/// Fluent constructor for a [`Diagnostic`].
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into(), span: Span::DUMMY }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: Level::Warning, message: message.into(), span: Span::DUMMY }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic { level: self.level, message: self.message, span: self.span }
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

/// Collects diagnostics for a single file compilation.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    /// First error recorded, if any — the fail-fast policy only ever acts on this one.
    pub fn first_error(&self) -> Option<Diagnostic> {
        self.diagnostics.borrow().iter().find(|d| d.level == Level::Error).cloned()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
