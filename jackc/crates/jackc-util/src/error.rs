//! Crate-wide error type shared between the compiler and the driver.

use thiserror::Error;

/// Failure to fully compile a single `.jack` file.
///
/// Carries only the first diagnostic (§7: fail-fast, no multi-error
/// reporting) formatted as a string so this type stays `Send + 'static`
/// independent of the file's own `Handler` lifetime.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CompileError(pub String);
