//! The two-scope symbol table (§4.2).

use rustc_hash::FxHashMap;

use jackc_util::SubroutineKind;

use crate::entry::SymbolEntry;
use crate::kind::Kind;

/// Maps names to `(type, kind, index)` across a class scope and a
/// subroutine scope that is torn down and rebuilt on every `startSubroutine`.
///
/// `ifCounter`/`whileCounter` deliberately do *not* live here (§9 REDESIGN
/// FLAGS): they reset on the same event as `varIndex`/`argIndex`, but that
/// event belongs to the compiler, not to name resolution. The compiler owns
/// them instead.
pub struct SymbolTable {
    class_name: String,
    class_scope: FxHashMap<String, SymbolEntry>,
    subroutine_scope: FxHashMap<String, SymbolEntry>,
    static_index: u16,
    field_index: u16,
    var_index: u16,
    arg_index: u16,
}

impl SymbolTable {
    /// A fresh table for a class named `class_name`. Class scope lives from
    /// `class` to the closing `}` (§3 Lifecycles).
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            class_scope: FxHashMap::default(),
            subroutine_scope: FxHashMap::default(),
            static_index: 0,
            field_index: 0,
            var_index: 0,
            arg_index: 0,
        }
    }

    /// Clears subroutine scope and resets `varIndex`/`argIndex`. For a
    /// `method`, immediately binds `this` as argument 0 of the enclosing
    /// class type.
    pub fn start_subroutine(&mut self, kind: SubroutineKind) {
        self.subroutine_scope.clear();
        self.var_index = 0;
        self.arg_index = 0;
        if kind == SubroutineKind::Method {
            let class_name = self.class_name.clone();
            self.define("this", &class_name, Kind::Argument);
        }
    }

    /// Inserts `name` into the scope selected by `kind`, at the current
    /// counter value for that kind, then advances the counter. Redefining an
    /// existing name in the same scope is "last wins" — the reference does
    /// not diagnose it, and neither do we (§4.2).
    pub fn define(&mut self, name: &str, ty: &str, kind: Kind) {
        let index = match kind {
            Kind::Static => {
                let i = self.static_index;
                self.static_index += 1;
                i
            },
            Kind::Field => {
                let i = self.field_index;
                self.field_index += 1;
                i
            },
            Kind::Var => {
                let i = self.var_index;
                self.var_index += 1;
                i
            },
            Kind::Argument => {
                let i = self.arg_index;
                self.arg_index += 1;
                i
            },
        };
        let entry = SymbolEntry { ty: ty.to_string(), kind, index };
        match kind {
            Kind::Static | Kind::Field => self.class_scope.insert(name.to_string(), entry),
            Kind::Var | Kind::Argument => self.subroutine_scope.insert(name.to_string(), entry),
        };
    }

    /// The number of symbols of `kind` defined so far.
    pub fn var_count(&self, kind: Kind) -> u16 {
        match kind {
            Kind::Static => self.static_index,
            Kind::Field => self.field_index,
            Kind::Var => self.var_index,
            Kind::Argument => self.arg_index,
        }
    }

    fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.subroutine_scope.get(name).or_else(|| self.class_scope.get(name))
    }

    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.lookup(name).map(|e| e.kind)
    }

    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|e| e.ty.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.lookup(name).map(|e| e.index)
    }

    /// Whether `name` resolves in either scope — the lookup-based
    /// instance-vs-class-name disambiguation rule of §4.3.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_field_counters_survive_subroutines() {
        let mut table = SymbolTable::new("Point");
        table.define("count", "int", Kind::Static);
        table.define("x", "int", Kind::Field);
        table.define("y", "int", Kind::Field);
        table.start_subroutine(SubroutineKind::Function);
        assert_eq!(table.var_count(Kind::Static), 1);
        assert_eq!(table.var_count(Kind::Field), 2);
    }

    #[test]
    fn var_and_arg_counters_reset_per_subroutine() {
        let mut table = SymbolTable::new("Point");
        table.start_subroutine(SubroutineKind::Function);
        table.define("a", "int", Kind::Argument);
        table.define("b", "int", Kind::Var);
        table.define("c", "int", Kind::Var);
        assert_eq!(table.var_count(Kind::Argument), 1);
        assert_eq!(table.var_count(Kind::Var), 2);

        table.start_subroutine(SubroutineKind::Function);
        assert_eq!(table.var_count(Kind::Argument), 0);
        assert_eq!(table.var_count(Kind::Var), 0);
    }

    #[test]
    fn method_implicitly_binds_this_as_argument_zero() {
        let mut table = SymbolTable::new("Point");
        table.start_subroutine(SubroutineKind::Method);
        assert_eq!(table.kind_of("this"), Some(Kind::Argument));
        assert_eq!(table.index_of("this"), Some(0));
        assert_eq!(table.type_of("this"), Some("Point"));

        table.define("dx", "int", Kind::Argument);
        assert_eq!(table.index_of("dx"), Some(1));
    }

    #[test]
    fn constructor_and_function_do_not_bind_this() {
        let mut table = SymbolTable::new("Point");
        table.start_subroutine(SubroutineKind::Constructor);
        assert_eq!(table.kind_of("this"), None);

        table.start_subroutine(SubroutineKind::Function);
        assert_eq!(table.kind_of("this"), None);
    }

    #[test]
    fn subroutine_scope_shadows_class_scope() {
        let mut table = SymbolTable::new("Point");
        table.define("x", "int", Kind::Field);
        table.start_subroutine(SubroutineKind::Method);
        table.define("x", "boolean", Kind::Var);

        assert_eq!(table.kind_of("x"), Some(Kind::Var));
        assert_eq!(table.type_of("x"), Some("boolean"));
    }

    #[test]
    fn unknown_name_is_absent_from_both_scopes() {
        let table = SymbolTable::new("Point");
        assert_eq!(table.kind_of("nope"), None);
        assert!(!table.contains("nope"));
    }

    #[test]
    fn slot_indices_are_contiguous_in_declaration_order() {
        let mut table = SymbolTable::new("Point");
        table.define("a", "int", Kind::Field);
        table.define("b", "int", Kind::Field);
        table.define("c", "int", Kind::Field);
        assert_eq!(table.index_of("a"), Some(0));
        assert_eq!(table.index_of("b"), Some(1));
        assert_eq!(table.index_of("c"), Some(2));
    }
}
