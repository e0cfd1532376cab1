//! jackc-util - shared foundation types for the jackc crates.
//!
//! Spans, diagnostics and string interning, split the way `faxc-util`
//! splits them, scaled down to what a single-threaded, single-pass
//! compiler needs: no cross-file source map, no global interner, no
//! diagnostic code table.

mod diagnostic;
mod error;
mod span;
mod subroutine_kind;
mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::CompileError;
pub use span::Span;
pub use subroutine_kind::SubroutineKind;
pub use symbol::{Interner, Symbol};
