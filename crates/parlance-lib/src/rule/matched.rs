//! Scoped view over one successful match.
//!
//! A [`Match`] covers a span of the word sequence and a capture scope: the
//! top level of a rule pattern, or the body of one capture inside it. Names
//! resolve only against captures declared directly in that scope, and only
//! to spans inside the active span. Reaching deeper goes through
//! [`Match::particle`], which narrows both.

use std::fmt;

use parlance_bytecode::{Program, SlotId};
use parlance_core::{Expression, Span, TaggedWord, WordList};
use parlance_vm::{Captures, SlotValue};

use super::{Interpreter, LookupError, RuleError};
use crate::semantics::HandlerSet;

#[derive(Clone, Copy)]
pub struct Match<'a> {
    words: &'a [TaggedWord],
    program: &'a Program,
    payloads: &'a [Option<Interpreter>],
    captures: &'a Captures,
    handlers: &'a HandlerSet,
    scope: Option<SlotId>,
    span: Span,
}

impl<'a> Match<'a> {
    pub(crate) fn new(
        words: &'a [TaggedWord],
        program: &'a Program,
        payloads: &'a [Option<Interpreter>],
        captures: &'a Captures,
        handlers: &'a HandlerSet,
    ) -> Self {
        Self {
            words,
            program,
            payloads,
            captures,
            handlers,
            scope: None,
            span: captures.span(),
        }
    }

    /// Word range this match covers.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn words(&self) -> WordList<'a> {
        WordList::new(&self.words[self.span.range()])
    }

    /// Word handlers configured on the dispatcher.
    pub fn handlers(&self) -> &'a HandlerSet {
        self.handlers
    }

    /// Span captured under `name` in the current scope.
    pub fn capture(&self, name: &str) -> Result<Span, LookupError> {
        self.resolve(name).map(|(_, span)| span)
    }

    /// Words captured under `name` in the current scope.
    pub fn group(&self, name: &str) -> Result<WordList<'a>, LookupError> {
        let span = self.capture(name)?;
        Ok(WordList::new(&self.words[span.range()]))
    }

    /// Sub-match scoped to the capture `name`.
    pub fn particle(&self, name: &str) -> Result<Match<'a>, LookupError> {
        let (slot, span) = self.resolve(name)?;
        Ok(Match {
            scope: Some(slot),
            span,
            ..*self
        })
    }

    /// Run the interpretation attached to the capture `name`.
    ///
    /// Interpretations run only when asked for, so a rule pays for the
    /// particles it reads and nothing else.
    pub fn interpret(&self, name: &str) -> Result<Expression, RuleError> {
        let (slot, span) = self.resolve(name)?;
        let interpreter = self
            .payloads
            .get(slot.get())
            .and_then(Option::as_ref)
            .ok_or_else(|| LookupError::NoInterpretation {
                name: name.to_owned(),
            })?;
        let sub = Match {
            scope: Some(slot),
            span,
            ..*self
        };
        interpreter.call(&sub)
    }

    /// Whether an optional capture took part in the match.
    ///
    /// Undeclared and repeated names are still errors.
    pub fn is_resolved(&self, name: &str) -> Result<bool, LookupError> {
        match self.resolve(name) {
            Ok(_) => Ok(true),
            Err(LookupError::Unresolved { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn slot(&self, name: &str) -> Result<SlotId, LookupError> {
        self.program
            .find_slot(self.scope, name)
            .ok_or_else(|| LookupError::Undeclared {
                name: name.to_owned(),
                scope: self.scope_name(),
            })
    }

    fn resolve(&self, name: &str) -> Result<(SlotId, Span), LookupError> {
        let slot = self.slot(name)?;
        match self.captures.get(slot) {
            SlotValue::Span(span) if self.span.contains(span) => Ok((slot, span)),
            SlotValue::Span(span) => Err(LookupError::OutOfScope {
                name: name.to_owned(),
                span,
                active: self.span,
            }),
            SlotValue::Unset => Err(LookupError::Unresolved {
                name: name.to_owned(),
            }),
            SlotValue::Repeated => Err(LookupError::Repeated {
                name: name.to_owned(),
            }),
        }
    }

    fn scope_name(&self) -> String {
        match self.scope {
            Some(slot) => format!("`{}`", self.program.slot_path(slot)),
            None => "the rule pattern".to_owned(),
        }
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("scope", &self.scope.map(|slot| self.program.slot_path(slot)))
            .field("span", &self.span)
            .field("words", &self.words().tokens())
            .finish()
    }
}
