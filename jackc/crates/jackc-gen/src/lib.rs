//! VM code emission (§4.4).

mod writer;

pub use writer::VmWriter;
