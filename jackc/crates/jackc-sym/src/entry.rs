use crate::kind::Kind;

/// A single symbol: its declared type, kind and slot index (§3).
///
/// `ty` is either a primitive keyword (`int`, `char`, `boolean`) or a class
/// name — both are plain Jack identifiers, so a `String` is enough; there's
/// no need for a type-checking representation beyond this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub ty: String,
    pub kind: Kind,
    pub index: u16,
}
