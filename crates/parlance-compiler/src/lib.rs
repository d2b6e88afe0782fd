//! Compiler for Parlance word patterns.
//!
//! A pattern is built either with the combinators in [`pattern`] or parsed
//! from text by [`parse`], then compiled into a [`Program`] by [`compile`].
//!
//! ```
//! use parlance_compiler::{compile, lemma, pos, Pattern};
//!
//! let pattern: Pattern = lemma("who") + lemma("be") + pos("NNP").plus().capture("person");
//! let compiled = compile(pattern).unwrap();
//! assert_eq!(compiled.program().slots().len(), 1);
//! ```
//!
//! [`Program`]: parlance_bytecode::Program

pub mod compile;
pub mod parser;
pub mod pattern;


pub use compile::{CompileError, CompiledPattern, compile, compile_str};
pub use parser::{ParseError, parse};
pub use pattern::{
    Pattern, Quantifier, any, lemma, lemmas, pos, poss, sequence, token, tokens,
};
