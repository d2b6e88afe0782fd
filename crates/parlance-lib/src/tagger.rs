//! Part-of-speech tagging boundary.
//!
//! Tagging itself is an external concern: plug a real tagger in through the
//! [`Tagger`] trait. [`PretaggedTagger`] reads words already rendered as
//! `token|lemma|POS[|prob]`, which is what tests and the CLI use.

use parlance_core::TaggedWord;
use thiserror::Error;
use tracing::warn;

/// Penn Treebank part-of-speech tags.
pub const PENN_TAGSET: &[&str] = &[
    "$", "``", "''", "(", ")", ",", "--", ".", ":", "CC", "CD", "DT", "EX", "FW", "IN", "JJ",
    "JJR", "JJS", "LS", "MD", "NN", "NNP", "NNPS", "NNS", "PDT", "POS", "PRP", "PRP$", "RB",
    "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP",
    "WP$", "WRB",
];

/// The tagger's output could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tagging failed: {message}")]
pub struct TaggingError {
    pub message: String,
}

impl TaggingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggingError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Vec<TaggedWord>, TaggingError> + Send + Sync,
{
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggingError> {
        self(text)
    }
}

/// Log every POS tag outside the Penn tagset. Rules are written against
/// Penn tags, so anything else will silently fail to match.
pub fn warn_non_penn(words: &[TaggedWord]) {
    for word in words {
        if !PENN_TAGSET.contains(&word.pos.as_str()) {
            warn!(pos = %word.pos, token = %word.token, "tagger emitted a non-Penn POS tag");
        }
    }
}

/// Reads `token|lemma|POS` or `token|lemma|POS|prob` entries separated by
/// whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct PretaggedTagger;

impl Tagger for PretaggedTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggingError> {
        let words = text
            .split_whitespace()
            .map(parse_word)
            .collect::<Result<Vec<_>, _>>()?;
        warn_non_penn(&words);
        Ok(words)
    }
}

fn parse_word(entry: &str) -> Result<TaggedWord, TaggingError> {
    let fields: Vec<&str> = entry.split('|').collect();
    let (token, lemma, pos, prob) = match fields.as_slice() {
        [token, lemma, pos] => (*token, *lemma, *pos, None),
        [token, lemma, pos, prob] => (*token, *lemma, *pos, Some(*prob)),
        _ => {
            return Err(TaggingError::new(format!(
                "expected `token|lemma|POS[|prob]`, found `{entry}`"
            )));
        }
    };

    if token.is_empty() || lemma.is_empty() || pos.is_empty() {
        return Err(TaggingError::new(format!("empty field in `{entry}`")));
    }

    let word = TaggedWord::new(token, lemma, pos);
    match prob {
        None => Ok(word),
        Some(prob) => prob
            .parse::<f32>()
            .map(|prob| word.with_prob(prob))
            .map_err(|_| TaggingError::new(format!("invalid probability `{prob}` in `{entry}`"))),
    }
}
