//! Named, reusable sub-patterns.

use std::fmt;
use std::ops::{Add, BitOr};
use std::sync::Arc;

use parlance_compiler::Pattern;
use parlance_core::Expression;

use super::{Match, RuleError};

type InterpretFn = dyn Fn(&Match<'_>) -> Result<Expression, RuleError> + Send + Sync;

/// Interpretation attached to a capture, run lazily by [`Match::interpret`].
#[derive(Clone)]
pub struct Interpreter(Arc<InterpretFn>);

impl Interpreter {
    pub fn new<F>(interpret: F) -> Self
    where
        F: Fn(&Match<'_>) -> Result<Expression, RuleError> + Send + Sync + 'static,
    {
        Self(Arc::new(interpret))
    }

    pub fn call(&self, m: &Match<'_>) -> Result<Expression, RuleError> {
        (self.0)(m)
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Interpreter(..)")
    }
}

/// A sub-pattern captured under a name, optionally with an interpretation.
///
/// The capture name is the particle kind in lower case (`Person` is read
/// back as `person`). Embed the same particle twice under different names
/// with [`Particle::named`].
///
/// ```
/// use parlance_compiler::{lemma, pos};
/// use parlance_core::dsl::HasKeyword;
/// use parlance_lib::{Particle, Pattern};
///
/// let person = Particle::new("Person", pos("NNP").plus())
///     .interpret(|m| Ok(HasKeyword::DEFAULT.apply(&m.words().tokens())));
/// let pattern: Pattern = lemma("who") + lemma("be") + person;
/// assert_eq!(pattern.to_string(), "{ lemma:who lemma:be pos:NNP+ @person }");
/// ```
#[derive(Clone, Debug)]
pub struct Particle {
    name: String,
    pattern: Pattern<Interpreter>,
    interpreter: Option<Interpreter>,
}

impl Particle {
    pub fn new(kind: &str, pattern: Pattern<Interpreter>) -> Self {
        Self {
            name: kind.to_lowercase(),
            pattern,
            interpreter: None,
        }
    }

    pub fn interpret<F>(mut self, interpret: F) -> Self
    where
        F: Fn(&Match<'_>) -> Result<Expression, RuleError> + Send + Sync + 'static,
    {
        self.interpreter = Some(Interpreter::new(interpret));
        self
    }

    /// Same particle captured under a different name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_pattern(self) -> Pattern<Interpreter> {
        Pattern::Capture {
            name: self.name,
            body: Box::new(self.pattern),
            payload: self.interpreter,
        }
    }

    pub fn opt(self) -> Pattern<Interpreter> {
        self.into_pattern().opt()
    }

    pub fn plus(self) -> Pattern<Interpreter> {
        self.into_pattern().plus()
    }

    pub fn star(self) -> Pattern<Interpreter> {
        self.into_pattern().star()
    }
}

impl From<Particle> for Pattern<Interpreter> {
    fn from(particle: Particle) -> Self {
        particle.into_pattern()
    }
}

impl Add<Particle> for Pattern<Interpreter> {
    type Output = Pattern<Interpreter>;

    fn add(self, rhs: Particle) -> Self::Output {
        self + rhs.into_pattern()
    }
}

impl Add<Pattern<Interpreter>> for Particle {
    type Output = Pattern<Interpreter>;

    fn add(self, rhs: Pattern<Interpreter>) -> Self::Output {
        self.into_pattern() + rhs
    }
}

impl Add for Particle {
    type Output = Pattern<Interpreter>;

    fn add(self, rhs: Particle) -> Self::Output {
        self.into_pattern() + rhs.into_pattern()
    }
}

impl BitOr<Particle> for Pattern<Interpreter> {
    type Output = Pattern<Interpreter>;

    fn bitor(self, rhs: Particle) -> Self::Output {
        self | rhs.into_pattern()
    }
}

impl BitOr<Pattern<Interpreter>> for Particle {
    type Output = Pattern<Interpreter>;

    fn bitor(self, rhs: Pattern<Interpreter>) -> Self::Output {
        self.into_pattern() | rhs
    }
}

impl BitOr for Particle {
    type Output = Pattern<Interpreter>;

    fn bitor(self, rhs: Particle) -> Self::Output {
        self.into_pattern() | rhs.into_pattern()
    }
}
