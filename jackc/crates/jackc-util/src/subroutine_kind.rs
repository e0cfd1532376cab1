use std::fmt;

/// The three subroutine flavors (§3, §4.3). Shared between `jackc-sym`
/// (which reacts to `Method` by seeding an implicit `this`) and `jackc-gen`
/// (which emits a different prologue per kind).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubroutineKind {
    Constructor,
    Function,
    Method,
}

impl SubroutineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubroutineKind::Constructor => "constructor",
            SubroutineKind::Function => "function",
            SubroutineKind::Method => "method",
        }
    }
}

impl fmt::Display for SubroutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
