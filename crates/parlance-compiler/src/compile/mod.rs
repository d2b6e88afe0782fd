//! Thompson-style compilation of patterns into bytecode.
//!
//! Sequences concatenate, alternations and quantifiers become `Split`/`Jump`
//! fragments with patched addresses, captures become `Open`/`Close` pairs
//! around their body. Every program ends with the end-of-input sentinel
//! followed by `Accept`, so a match always covers the whole word sequence.

mod compiler;
mod error;
mod validate;


pub use error::CompileError;

use parlance_bytecode::Program;

use crate::Pattern;

/// Compiled program plus the capture payloads, indexed by slot.
#[derive(Clone, Debug)]
pub struct CompiledPattern<P = ()> {
    program: Program,
    payloads: Vec<Option<P>>,
}

impl<P> CompiledPattern<P> {
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Payload of each slot, in slot order.
    pub fn payloads(&self) -> &[Option<P>] {
        &self.payloads
    }

    pub fn into_parts(self) -> (Program, Vec<Option<P>>) {
        (self.program, self.payloads)
    }
}

/// Validate and compile a pattern.
///
/// Captures sharing a name inside the same enclosing capture share one slot;
/// the first payload declared for a slot wins.
pub fn compile<P>(pattern: Pattern<P>) -> Result<CompiledPattern<P>, CompileError> {
    validate::validate(&pattern)?;
    compiler::Compiler::new().finish(pattern)
}

/// Parse the textual syntax and compile the result.
pub fn compile_str<P>(source: &str) -> Result<CompiledPattern<P>, CompileError> {
    compile(crate::parse(source)?)
}
