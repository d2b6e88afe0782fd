//! Tagged words, the tagger's output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word as produced by a POS tagger.
///
/// Words are identified by position in their sequence, so there is no
/// value-based identity beyond the derived `PartialEq` used in tests.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TaggedWord {
    pub token: String,
    pub lemma: String,
    pub pos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prob: Option<f32>,
}

impl TaggedWord {
    pub fn new(token: impl Into<String>, lemma: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            prob: None,
        }
    }

    pub fn with_prob(mut self, prob: f32) -> Self {
        self.prob = Some(prob);
        self
    }
}

impl fmt::Display for TaggedWord {
    /// `token|lemma|pos`, plus `|prob` when the tagger reported one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.token, self.lemma, self.pos)?;
        if let Some(prob) = self.prob {
            write!(f, "|{prob}")?;
        }
        Ok(())
    }
}

/// Borrowed run of consecutive words.
#[derive(Clone, Copy, Debug)]
pub struct WordList<'a>(pub &'a [TaggedWord]);

impl<'a> WordList<'a> {
    pub fn new(words: &'a [TaggedWord]) -> Self {
        Self(words)
    }

    pub fn as_slice(&self) -> &'a [TaggedWord] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, TaggedWord> {
        self.0.iter()
    }

    /// Tokens joined by single spaces.
    pub fn tokens(&self) -> String {
        self.join(|w| &w.token)
    }

    /// Lemmas joined by single spaces.
    pub fn lemmas(&self) -> String {
        self.join(|w| &w.lemma)
    }

    fn join(&self, field: impl Fn(&'a TaggedWord) -> &'a str) -> String {
        self.0.iter().map(field).collect::<Vec<_>>().join(" ")
    }
}

impl<'a> IntoIterator for WordList<'a> {
    type Item = &'a TaggedWord;
    type IntoIter = std::slice::Iter<'a, TaggedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for WordList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
