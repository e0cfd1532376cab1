//! Stateless VM text emitter (§4.4).
//!
//! Every method appends one line to `output`; nothing here looks back at
//! what was already written. Label/counter bookkeeping belongs to the
//! caller (the compiler), not the emitter.

use std::fmt::Write as _;

use jackc_util::SubroutineKind;

pub struct VmWriter {
    output: String,
}

impl VmWriter {
    pub fn new() -> Self {
        Self { output: String::new() }
    }

    pub fn write_push(&mut self, segment: &str, index: u16) {
        writeln!(self.output, "push {segment} {index}").unwrap();
    }

    pub fn write_pop(&mut self, segment: &str, index: u16) {
        writeln!(self.output, "pop {segment} {index}").unwrap();
    }

    pub fn write_add(&mut self) {
        self.line("add");
    }

    pub fn write_sub(&mut self) {
        self.line("sub");
    }

    /// Unary minus. Kept distinct from `write_sub` (§9 design notes) rather
    /// than overloading one call with a boolean flag.
    pub fn write_neg(&mut self) {
        self.line("neg");
    }

    pub fn write_and(&mut self) {
        self.line("and");
    }

    pub fn write_or(&mut self) {
        self.line("or");
    }

    pub fn write_not(&mut self) {
        self.line("not");
    }

    pub fn write_eq(&mut self) {
        self.line("eq");
    }

    pub fn write_lt(&mut self) {
        self.line("lt");
    }

    pub fn write_gt(&mut self) {
        self.line("gt");
    }

    pub fn write_label(&mut self, name: &str) {
        writeln!(self.output, "label {name}").unwrap();
    }

    pub fn write_goto(&mut self, name: &str) {
        writeln!(self.output, "goto {name}").unwrap();
    }

    pub fn write_if(&mut self, name: &str) {
        writeln!(self.output, "if-goto {name}").unwrap();
    }

    pub fn write_call(&mut self, name: &str, n_args: u16) {
        writeln!(self.output, "call {name} {n_args}").unwrap();
    }

    /// Emits the `function C.s N` header, where `n_locals` is the body's
    /// declared local count, then the kind-specific prologue (§4.3):
    /// - `method`: bind `this` to the receiver pushed as argument 0.
    /// - `constructor`: allocate `n_fields` words and bind `this` to them.
    /// - `function`: no prologue.
    pub fn write_function(
        &mut self,
        kind: SubroutineKind,
        class: &str,
        name: &str,
        n_locals: u16,
        n_fields: u16,
    ) {
        writeln!(self.output, "function {class}.{name} {n_locals}").unwrap();
        match kind {
            SubroutineKind::Method => {
                self.write_push("argument", 0);
                self.write_pop("pointer", 0);
            },
            SubroutineKind::Constructor => {
                self.write_push("constant", n_fields);
                self.write_call("Memory.alloc", 1);
                self.write_pop("pointer", 0);
            },
            SubroutineKind::Function => {},
        }
    }

    pub fn write_return(&mut self) {
        self.line("return");
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Consumes the writer, returning the accumulated VM text.
    pub fn finish(self) -> String {
        self.output
    }

    /// The VM text emitted so far, without consuming the writer.
    pub fn as_str(&self) -> &str {
        &self.output
    }
}

impl Default for VmWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_prologue_binds_this_to_argument_zero() {
        let mut w = VmWriter::new();
        w.write_function(SubroutineKind::Method, "A", "m", 0, 0);
        w.write_push("constant", 0);
        w.write_return();
        assert_eq!(
            w.finish(),
            "function A.m 0\npush argument 0\npop pointer 0\npush constant 0\nreturn\n"
        );
    }

    #[test]
    fn constructor_prologue_allocates_field_count_words() {
        let mut w = VmWriter::new();
        w.write_function(SubroutineKind::Constructor, "P", "new", 0, 1);
        assert_eq!(
            w.finish(),
            "function P.new 0\npush constant 1\ncall Memory.alloc 1\npop pointer 0\n"
        );
    }

    #[test]
    fn function_has_no_prologue() {
        let mut w = VmWriter::new();
        w.write_function(SubroutineKind::Function, "Main", "main", 2, 0);
        assert_eq!(w.finish(), "function Main.main 2\n");
    }

    #[test]
    fn every_line_ends_in_newline() {
        let mut w = VmWriter::new();
        w.write_add();
        w.write_call("Math.multiply", 2);
        assert_eq!(w.finish(), "add\ncall Math.multiply 2\n");
    }
}
