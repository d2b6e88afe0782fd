//! Question evaluation.
//!
//! The dispatcher tags a question, tries every rule in weight order and
//! renders each interpretation with the configured backend. Rules that do not
//! match, or whose interpretation rejects the words, are skipped. Everything
//! it holds is read-only after construction, so one dispatcher can serve
//! many threads.

use parlance_core::TaggedWord;
use parlance_vm::FuelLimits;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::render::{QueryRenderer, Target};
use crate::rule::RuleSet;
use crate::semantics::HandlerSet;
use crate::tagger::Tagger;
use crate::Error;

/// One rendered interpretation of a question.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Answer {
    /// Name of the rule that produced it.
    pub rule: String,
    pub target: Target,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

pub struct Dispatcher {
    rules: RuleSet,
    tagger: Box<dyn Tagger>,
    renderer: Box<dyn QueryRenderer>,
    handlers: HandlerSet,
    limits: FuelLimits,
}

impl Dispatcher {
    pub fn new(
        rules: RuleSet,
        tagger: impl Tagger + 'static,
        renderer: impl QueryRenderer + 'static,
    ) -> Self {
        Self {
            rules,
            tagger: Box::new(tagger),
            renderer: Box::new(renderer),
            handlers: HandlerSet::default(),
            limits: FuelLimits::default(),
        }
    }

    /// Backend and fuel taken from `settings`.
    pub fn from_settings(rules: RuleSet, tagger: impl Tagger + 'static, settings: &Settings) -> Self {
        Self::new(rules, tagger, settings.renderer()).fuel(settings.fuel)
    }

    /// Replaces the backend, e.g. one configured for the rule pack's vocabulary.
    pub fn render_with(mut self, renderer: impl QueryRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn handlers(mut self, handlers: HandlerSet) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn renderer(&self) -> &dyn QueryRenderer {
        self.renderer.as_ref()
    }

    /// Every answer for `question`, best rule first, computed lazily.
    ///
    /// A question the tagger cannot handle has no answers.
    pub fn evaluate(&self, question: &str) -> Evaluation<'_> {
        match self.tagger.tag(question) {
            Ok(words) => self.evaluate_words(words),
            Err(err) => {
                warn!(%question, %err, "cannot tag question");
                Evaluation {
                    dispatcher: self,
                    words: Vec::new(),
                    next_rule: self.rules.len(),
                }
            }
        }
    }

    /// The best answer, or `None` when no rule applies.
    pub fn first(&self, question: &str) -> Result<Option<Answer>, Error> {
        self.evaluate(question).next().transpose()
    }

    /// Like [`Dispatcher::evaluate`] for words tagged elsewhere.
    pub fn evaluate_words(&self, words: Vec<TaggedWord>) -> Evaluation<'_> {
        debug!(
            words = %words.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
            "tagged question"
        );
        Evaluation {
            dispatcher: self,
            words,
            next_rule: 0,
        }
    }
}

/// Lazy sequence of answers; see [`Dispatcher::evaluate`].
pub struct Evaluation<'d> {
    dispatcher: &'d Dispatcher,
    words: Vec<TaggedWord>,
    next_rule: usize,
}

impl Evaluation<'_> {
    pub fn words(&self) -> &[TaggedWord] {
        &self.words
    }
}

impl Iterator for Evaluation<'_> {
    type Item = Result<Answer, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let dispatcher = self.dispatcher;
        while let Some(rule) = dispatcher.rules.get(self.next_rule) {
            self.next_rule += 1;
            debug!(rule = rule.name(), weight = rule.weight(), "trying rule");

            let interpretation =
                match rule.apply(&self.words, &dispatcher.handlers, dispatcher.limits) {
                    Ok(Some(interpretation)) => interpretation,
                    Ok(None) => continue,
                    Err(err) => return Some(Err(err)),
                };

            let rendered = match dispatcher.renderer.render(&interpretation.expression) {
                Ok(rendered) => rendered,
                Err(source) => {
                    return Some(Err(Error::Generation {
                        rule: rule.name().to_owned(),
                        source,
                    }));
                }
            };
            debug!(rule = rule.name(), query = %rendered.query, "query generated");

            return Some(Ok(Answer {
                rule: rule.name().to_owned(),
                target: rendered.target,
                query: rendered.query,
                metadata: interpretation.metadata,
            }));
        }
        None
    }
}
