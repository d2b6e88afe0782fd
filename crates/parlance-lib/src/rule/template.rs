//! Rule templates: a pattern, a weight and an interpretation.

use std::fmt;
use std::sync::Arc;

use parlance_bytecode::Program;
use parlance_compiler::{CompileError, Pattern, compile};
use parlance_core::{Expression, TaggedWord};
use parlance_vm::{FuelLimits, VM};
use tracing::debug;

use super::{Interpreter, Match, RuleError};
use crate::Error;
use crate::semantics::HandlerSet;

/// What an interpretation produces: an expression plus optional user data.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpretation {
    pub expression: Expression,
    pub metadata: Option<serde_json::Value>,
}

impl Interpretation {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl From<Expression> for Interpretation {
    fn from(expression: Expression) -> Self {
        Self::new(expression)
    }
}

impl From<(Expression, serde_json::Value)> for Interpretation {
    fn from((expression, metadata): (Expression, serde_json::Value)) -> Self {
        Self::new(expression).with_metadata(metadata)
    }
}

type RuleFn = dyn Fn(&Match<'_>) -> Result<Interpretation, RuleError> + Send + Sync;

/// Registration record for one rule.
///
/// ```
/// use parlance_compiler::{lemma, pos};
/// use parlance_core::dsl::HasKeyword;
/// use parlance_lib::Rule;
///
/// let rule = Rule::new("what-is", lemma("what") + lemma("be") + pos("NN").capture("thing"), |m| {
///     Ok(HasKeyword::DEFAULT.apply(&m.group("thing")?.lemmas()))
/// })
/// .weight(10);
/// assert_eq!(rule.name(), "what-is");
/// ```
#[derive(Clone)]
pub struct Rule {
    name: String,
    weight: i32,
    pattern: Pattern<Interpreter>,
    interpret: Arc<RuleFn>,
}

impl Rule {
    pub fn new<F, R>(name: impl Into<String>, pattern: Pattern<Interpreter>, interpret: F) -> Self
    where
        F: Fn(&Match<'_>) -> Result<R, RuleError> + Send + Sync + 'static,
        R: Into<Interpretation>,
    {
        Self {
            name: name.into(),
            weight: 0,
            pattern,
            interpret: Arc::new(move |m: &Match<'_>| interpret(m).map(Into::into)),
        }
    }

    /// Higher weights are tried first. Default `0`.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern<Interpreter> {
        &self.pattern
    }

    pub(crate) fn compile(self) -> Result<CompiledRule, CompileError> {
        let (program, payloads) = compile(self.pattern)?.into_parts();
        Ok(CompiledRule {
            name: self.name,
            weight: self.weight,
            program,
            payloads,
            interpret: self.interpret,
        })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .field("pattern", &self.pattern.to_string())
            .finish()
    }
}

/// A rule whose pattern has been compiled. Immutable and shareable.
pub struct CompiledRule {
    name: String,
    weight: i32,
    program: Program,
    payloads: Vec<Option<Interpreter>>,
    interpret: Arc<RuleFn>,
}

impl CompiledRule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Match the whole word sequence and interpret it.
    ///
    /// `Ok(None)` covers both a syntactic non-match and a semantic rejection.
    pub fn apply(
        &self,
        words: &[TaggedWord],
        handlers: &HandlerSet,
        limits: FuelLimits,
    ) -> Result<Option<Interpretation>, Error> {
        let vm = VM::builder(words).limits(limits).build();
        let Some(captures) = vm.find_match(&self.program)? else {
            debug!(rule = %self.name, "no match");
            return Ok(None);
        };

        let m = Match::new(words, &self.program, &self.payloads, &captures, handlers);
        match (self.interpret)(&m) {
            Ok(interpretation) => {
                debug!(rule = %self.name, ir = %interpretation.expression, "interpreted");
                Ok(Some(interpretation))
            }
            Err(RuleError::Rejected(reason)) => {
                debug!(rule = %self.name, %reason, "semantic rejection");
                Ok(None)
            }
            Err(RuleError::Lookup(err)) => Err(Error::Lookup {
                rule: self.name.clone(),
                source: err,
            }),
        }
    }
}

impl fmt::Debug for CompiledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledRule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}
