//! Rules: patterns over tagged words and the interpretations attached to them.

mod error;
mod matched;
mod particle;
mod registry;
mod template;

#[cfg(test)]
mod registry_tests;

pub use error::{LookupError, RuleError};
pub use matched::Match;
pub use particle::{Interpreter, Particle};
pub use registry::{RuleRegistry, RuleSet};
pub use template::{CompiledRule, Interpretation, Rule};
