#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by every Parlance crate.
//!
//! - **Expression graph** (`Expression`): the intermediate representation of a
//!   query, a tree of nodes with one designated head.
//! - **Canonical form** (`Canonical`): isomorphism-invariant rendering of an
//!   expression, used for deduplication and tests.
//! - **DSL** (`dsl`): typed constructors that rule packs compose into expressions.
//! - **Words** (`TaggedWord`, `WordList`, `Span`): the tagger's output and
//!   index ranges into it.

mod canonical;
mod colors;
pub mod dsl;
mod expression;
mod invariants;
mod span;
mod word;

#[cfg(test)]
mod canonical_tests;
#[cfg(test)]
mod expression_tests;
#[cfg(test)]
mod word_tests;

pub use canonical::{Canonical, CanonicalEdge, CanonicalTarget, Orientation};
pub use colors::Colors;
pub use expression::{Edge, EdgeTarget, Expression, NodeId, Relation};
pub use span::Span;
pub use word::{TaggedWord, WordList};
