//! Single-word predicates.

use std::fmt;

use parlance_core::TaggedWord;

/// Test applied to the word at the current position.
///
/// `End` is the end-of-input sentinel: it holds only past the last word and
/// consumes nothing. Every compiled pattern finishes with it, so a match
/// always spans the whole input.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Predicate {
    Any,
    Pos(String),
    Lemma(String),
    Token(String),
    End,
}

impl Predicate {
    pub fn pos(tag: impl Into<String>) -> Self {
        Self::Pos(tag.into())
    }

    pub fn lemma(lemma: impl Into<String>) -> Self {
        Self::Lemma(lemma.into())
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Whether the predicate holds at `position` of `words`.
    pub fn matches(&self, words: &[TaggedWord], position: usize) -> bool {
        let Some(word) = words.get(position) else {
            return matches!(self, Self::End) && position == words.len();
        };
        match self {
            Self::Any => true,
            Self::Pos(tag) => word.pos == *tag,
            Self::Lemma(lemma) => word.lemma == *lemma,
            Self::Token(token) => word.token == *token,
            Self::End => false,
        }
    }

    /// Number of words consumed on success.
    pub fn width(&self) -> usize {
        match self {
            Self::End => 0,
            _ => 1,
        }
    }
}

fn is_bare(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || "_.$'-".contains(c))
}

fn write_value(f: &mut fmt::Formatter<'_>, field: &str, value: &str) -> fmt::Result {
    if is_bare(value) {
        write!(f, "{field}:{value}")
    } else {
        write!(f, "{field}:{value:?}")
    }
}

impl fmt::Display for Predicate {
    /// Same notation as the textual pattern syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("_"),
            Self::Pos(tag) => write_value(f, "pos", tag),
            Self::Lemma(lemma) => write_value(f, "lemma", lemma),
            Self::Token(token) => write_value(f, "token", token),
            Self::End => f.write_str("$end"),
        }
    }
}
