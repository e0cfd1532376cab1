//! String interning for identifiers and string literals.
//!
//! Each compiled file gets its own [`Interner`] (§5: no shared mutable state
//! across files), so unlike a typical multi-threaded compiler's global
//! string table this one is a plain, single-threaded arena owned by the
//! `Lexer`. `Symbol` is a 4-byte handle; comparing symbols is an integer
//! comparison instead of a string comparison.

use rustc_hash::FxHashMap;

/// An interned string handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

/// Per-file string table.
///
/// Strings are never removed once interned; the whole table is dropped
/// together with the file's `Lexer` at the end of compilation.
#[derive(Default)]
pub struct Interner {
    strings: Vec<String>,
    lookup: FxHashMap<String, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `s`, returning its existing symbol or allocating a new one.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&idx) = self.lookup.get(s) {
            return Symbol(idx);
        }
        let idx = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.lookup.insert(s.to_string(), idx);
        Symbol(idx)
    }

    /// Resolves a symbol back to its string.
    ///
    /// # Panics
    /// Panics if `sym` was not produced by this interner.
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}
