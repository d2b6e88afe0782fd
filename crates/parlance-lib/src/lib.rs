//! Parlance: natural-language questions to database queries.
//!
//! A rule pack registers [`Rule`]s, each a pattern over part-of-speech tagged
//! words plus an interpretation that builds an [`Expression`]. The
//! [`Dispatcher`] tags a question, tries the rules by weight and renders each
//! interpretation as a query.
//!
//! # Example
//!
//! ```
//! use parlance_compiler::{lemma, pos};
//! use parlance_core::dsl::{FixedRelation, HasKeyword};
//! use parlance_lib::{Dispatcher, PretaggedTagger, Rule, RuleRegistry, SparqlRenderer};
//!
//! const DEFINITION: FixedRelation = FixedRelation::new("rdfs:comment").reversed();
//!
//! let rules = RuleRegistry::new()
//!     .with(Rule::new(
//!         "what-is",
//!         lemma("what") + lemma("be") + pos("DT").opt() + pos("NN").capture("thing"),
//!         |m| Ok(DEFINITION.apply(&HasKeyword::DEFAULT.apply(&m.group("thing")?.lemmas()))),
//!     ))
//!     .build()
//!     .expect("valid rules");
//!
//! let dispatcher = Dispatcher::new(rules, PretaggedTagger, SparqlRenderer::new());
//! let answer = dispatcher
//!     .first("what|what|WP is|be|VBZ a|a|DT dog|dog|NN")
//!     .expect("no error")
//!     .expect("an answer");
//! assert_eq!(answer.rule, "what-is");
//! assert!(answer.query.contains("?x1 rdfs:comment ?x0."));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
mod dispatch;
mod error;
pub mod render;
mod rule;
pub mod semantics;
pub mod tagger;

#[cfg(test)]
mod dispatch_tests;
#[cfg(test)]
mod tagger_tests;
#[cfg(test)]
mod test_support;

pub use config::{BackendKind, ConfigError, Settings};
pub use dispatch::{Answer, Dispatcher, Evaluation};
pub use error::{Error, Result};
pub use render::{
    DotRenderer, GenerationError, MqlRenderer, QueryRenderer, Rendered, SparqlRenderer, Target,
};
pub use rule::{
    CompiledRule, Interpretation, Interpreter, LookupError, Match, Particle, Rule, RuleError,
    RuleRegistry, RuleSet,
};
pub use semantics::{HandlerSet, WordHandler};
pub use tagger::{PretaggedTagger, Tagger, TaggingError};

pub use parlance_core::{Expression, Span, TaggedWord, WordList};

/// Patterns whose captures may carry particle interpretations.
pub type Pattern = parlance_compiler::Pattern<Interpreter>;
