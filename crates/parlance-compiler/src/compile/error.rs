use parlance_bytecode::ProgramError;
use thiserror::Error;

use crate::ParseError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("repetition `{pattern}` can match without consuming a word")]
    NullableRepetition { pattern: String },

    #[error("alternation has no alternatives")]
    EmptyAlternation,

    #[error("invalid capture name `{name}`")]
    InvalidCaptureName { name: String },

    #[error("too many capture slots (limit {limit})")]
    TooManySlots { limit: usize },

    #[error("internal: {0}")]
    Program(#[from] ProgramError),
}
