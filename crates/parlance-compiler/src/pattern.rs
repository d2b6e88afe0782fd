//! Pattern AST and combinators.
//!
//! Patterns compose with `+` (sequence) and `|` (alternation); quantifiers
//! and captures are methods:
//!
//! ```
//! use parlance_compiler::{lemma, pos, Pattern};
//!
//! let determiner: Pattern = pos("DT").opt();
//! let noun: Pattern = (pos("NN") | pos("NNS")).plus();
//! let what_is = lemma("what") + lemma("be") + (determiner + noun).capture("target");
//! assert_eq!(what_is.to_string(), "{ lemma:what lemma:be { pos:DT? [ pos:NN pos:NNS ]+ } @target }");
//! ```

use std::fmt;
use std::ops::{Add, BitOr};

use parlance_bytecode::Predicate;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Quantifier {
    /// `?`
    Optional,
    /// `*`
    Star,
    /// `+`
    Plus,
}

impl Quantifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optional => "?",
            Self::Star => "*",
            Self::Plus => "+",
        }
    }
}

/// Declarative pattern over tagged words.
///
/// `P` is an opaque payload attached to captures. The compiler keeps it
/// alongside the capture slot; `parlance-lib` uses it for lazy particle
/// interpretation.
#[derive(Clone, PartialEq, Debug)]
pub enum Pattern<P = ()> {
    Word(Predicate),
    Seq(Vec<Pattern<P>>),
    Alt(Vec<Pattern<P>>),
    Repeat {
        body: Box<Pattern<P>>,
        quantifier: Quantifier,
    },
    Capture {
        name: String,
        body: Box<Pattern<P>>,
        payload: Option<P>,
    },
}

pub fn pos<P>(tag: impl Into<String>) -> Pattern<P> {
    Pattern::Word(Predicate::pos(tag))
}

pub fn lemma<P>(lemma: impl Into<String>) -> Pattern<P> {
    Pattern::Word(Predicate::lemma(lemma))
}

pub fn token<P>(token: impl Into<String>) -> Pattern<P> {
    Pattern::Word(Predicate::token(token))
}

pub fn any<P>() -> Pattern<P> {
    Pattern::Word(Predicate::Any)
}

pub fn sequence<P>(items: impl IntoIterator<Item = Pattern<P>>) -> Pattern<P> {
    Pattern::Seq(items.into_iter().collect())
}

fn split_words<P>(text: &str, word: fn(String) -> Predicate) -> Pattern<P> {
    sequence(
        text.split_whitespace()
            .map(|w| Pattern::Word(word(w.to_owned()))),
    )
}

/// One lemma predicate per whitespace-separated word: `lemmas("what be")`.
pub fn lemmas<P>(text: &str) -> Pattern<P> {
    split_words(text, Predicate::Lemma)
}

/// One token predicate per whitespace-separated word.
pub fn tokens<P>(text: &str) -> Pattern<P> {
    split_words(text, Predicate::Token)
}

/// One POS predicate per whitespace-separated tag: `poss("DT NN")`.
pub fn poss<P>(text: &str) -> Pattern<P> {
    split_words(text, Predicate::Pos)
}

impl<P> Pattern<P> {
    fn repeat(self, quantifier: Quantifier) -> Self {
        Self::Repeat {
            body: Box::new(self),
            quantifier,
        }
    }

    pub fn opt(self) -> Self {
        self.repeat(Quantifier::Optional)
    }

    pub fn star(self) -> Self {
        self.repeat(Quantifier::Star)
    }

    pub fn plus(self) -> Self {
        self.repeat(Quantifier::Plus)
    }

    pub fn capture(self, name: impl Into<String>) -> Self {
        Self::Capture {
            name: name.into(),
            body: Box::new(self),
            payload: None,
        }
    }

    pub fn capture_with(self, name: impl Into<String>, payload: P) -> Self {
        Self::Capture {
            name: name.into(),
            body: Box::new(self),
            payload: Some(payload),
        }
    }

    /// Whether the pattern can succeed without consuming a word.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Word(predicate) => predicate.width() == 0,
            Self::Seq(items) => items.iter().all(Self::is_nullable),
            Self::Alt(alternatives) => alternatives.iter().any(Self::is_nullable),
            Self::Repeat { body, quantifier } => {
                *quantifier != Quantifier::Plus || body.is_nullable()
            }
            Self::Capture { body, .. } => body.is_nullable(),
        }
    }

    /// Rebuild the pattern with a different payload type.
    pub fn map_payload<Q>(self, f: &mut impl FnMut(P) -> Q) -> Pattern<Q> {
        match self {
            Self::Word(predicate) => Pattern::Word(predicate),
            Self::Seq(items) => Pattern::Seq(items.into_iter().map(|p| p.map_payload(f)).collect()),
            Self::Alt(alternatives) => {
                Pattern::Alt(alternatives.into_iter().map(|p| p.map_payload(f)).collect())
            }
            Self::Repeat { body, quantifier } => Pattern::Repeat {
                body: Box::new(body.map_payload(f)),
                quantifier,
            },
            Self::Capture {
                name,
                body,
                payload,
            } => Pattern::Capture {
                name,
                body: Box::new(body.map_payload(f)),
                payload: payload.map(&mut *f),
            },
        }
    }
}

impl<P> Add for Pattern<P> {
    type Output = Pattern<P>;

    /// Sequence; nested sequences are flattened.
    fn add(self, rhs: Pattern<P>) -> Pattern<P> {
        let mut items = match self {
            Pattern::Seq(items) => items,
            other => vec![other],
        };
        match rhs {
            Pattern::Seq(rest) => items.extend(rest),
            other => items.push(other),
        }
        Pattern::Seq(items)
    }
}

impl<P> BitOr for Pattern<P> {
    type Output = Pattern<P>;

    /// Alternation, left preferred; nested alternations are flattened.
    fn bitor(self, rhs: Pattern<P>) -> Pattern<P> {
        let mut alternatives = match self {
            Pattern::Alt(alternatives) => alternatives,
            other => vec![other],
        };
        match rhs {
            Pattern::Alt(rest) => alternatives.extend(rest),
            other => alternatives.push(other),
        }
        Pattern::Alt(alternatives)
    }
}

impl<P> fmt::Display for Pattern<P> {
    /// Renders in the textual pattern syntax; payloads are not shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<P>(f: &mut fmt::Formatter<'_>, open: &str, items: &[Pattern<P>], close: &str) -> fmt::Result {
            f.write_str(open)?;
            for item in items {
                write!(f, " {item}")?;
            }
            write!(f, " {close}")
        }

        match self {
            Self::Word(predicate) => write!(f, "{predicate}"),
            Self::Seq(items) => list(f, "{", items, "}"),
            Self::Alt(alternatives) => list(f, "[", alternatives, "]"),
            Self::Repeat { body, quantifier } => write!(f, "{body}{}", quantifier.as_str()),
            Self::Capture { name, body, .. } => write!(f, "{body} @{name}"),
        }
    }
}
