use parlance_compiler::CompileError;
use parlance_vm::RuntimeError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::render::GenerationError;
use crate::rule::LookupError;

/// Failures a caller must see. Non-matches, semantic rejections and tagging
/// failures are not errors; they only shorten the list of answers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("rule `{rule}`: {source}")]
    Lookup { rule: String, source: LookupError },

    #[error("rule `{rule}`: {source}")]
    Generation { rule: String, source: GenerationError },

    #[error("rule `{rule}` has an invalid pattern: {source}")]
    Compile { rule: String, source: CompileError },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
