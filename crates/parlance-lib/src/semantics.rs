//! Building blocks for interpretation functions.
//!
//! Word handlers let a rule pack give special meaning to particular words
//! (numbers, dates, known entities) before falling back to keyword search.
//! They live in an explicit [`HandlerSet`] owned by the dispatcher and
//! reachable from every [`Match`](crate::Match).

use std::fmt;
use std::sync::Arc;

use parlance_core::dsl::{HasKeyword, IS_RELATED_TO};
use parlance_core::{Expression, TaggedWord};

use crate::RuleError;

/// POS tags treated as nouns when no handler claims a word.
pub const NOUN_TAGS: &[&str] = &["NN", "NP", "NNP", "NNS"];

pub trait WordHandler: Send + Sync {
    /// Whether this handler takes care of `word`.
    fn check(&self, word: &TaggedWord) -> bool;

    fn handle(&self, word: &TaggedWord) -> Expression;
}

/// Ordered word handlers; the first whose `check` accepts a word wins.
///
/// Words no handler claims become keywords built with [`HandlerSet::keyword`].
#[derive(Clone, Default)]
pub struct HandlerSet {
    handlers: Vec<Arc<dyn WordHandler>>,
    keyword: HasKeyword,
}

impl HandlerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler: impl WordHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    pub fn register(&mut self, handler: impl WordHandler + 'static) -> &mut Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Keyword constructor for the rule pack's database.
    pub fn with_keyword(mut self, keyword: HasKeyword) -> Self {
        self.keyword = keyword;
        self
    }

    pub fn keyword(&self) -> HasKeyword {
        self.keyword
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn get(&self, word: &TaggedWord) -> Option<&dyn WordHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.check(word))
            .map(|handler| handler.as_ref())
    }
}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet")
            .field("len", &self.handlers.len())
            .field("keyword", &self.keyword.relation())
            .finish()
    }
}

/// Keyword edges for `text`: one per whitespace-separated word, or a single
/// one for the whole text when `split` is false.
pub fn handle_keywords(
    text: &str,
    keyword: HasKeyword,
    split: bool,
) -> Result<Expression, RuleError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RuleError::rejected("no keyword in empty text"));
    }
    if !split {
        return Ok(keyword.apply(text));
    }

    let mut expression = Expression::new();
    for part in text.split_whitespace() {
        expression.merge(&keyword.apply(part));
    }
    Ok(expression)
}

/// A handler's meaning for `word`, else a keyword for nouns.
pub fn handle_nounlike(word: &TaggedWord, handlers: &HandlerSet) -> Result<Expression, RuleError> {
    if let Some(handler) = handlers.get(word) {
        return Ok(handler.handle(word));
    }
    if NOUN_TAGS.contains(&word.pos.as_str()) {
        return Ok(handlers.keyword().apply(&word.lemma));
    }
    Err(RuleError::rejected(format!("cannot handle word `{word}`")))
}

/// Meaning of a noun phrase, read right to left.
///
/// Each noun starts a new fragment, adjectives (`JJ`) add a keyword to the
/// current one unless `ignore_jj` is set. Fragments are then merged into one
/// node (`flatten`) or chained so the rightmost noun is the head and each
/// fragment to its left is related to the one after it.
pub fn handle_noun_phrase(
    words: &[TaggedWord],
    handlers: &HandlerSet,
    flatten: bool,
    ignore_jj: bool,
) -> Result<Expression, RuleError> {
    let Some((last, rest)) = words.split_last() else {
        return Err(RuleError::rejected("empty noun phrase"));
    };

    let mut fragments = vec![handle_nounlike(last, handlers)?];
    for word in rest.iter().rev() {
        if word.pos == "JJ" && !ignore_jj {
            let keyword = handlers.keyword().apply(&word.lemma);
            if let Some(current) = fragments.last_mut() {
                current.merge(&keyword);
            }
        } else {
            fragments.push(handle_nounlike(word, handlers)?);
        }
    }

    let Some(mut head) = fragments.pop() else {
        return Err(RuleError::rejected("empty noun phrase"));
    };
    if flatten {
        for fragment in &fragments {
            head.merge(fragment);
        }
    } else {
        while let Some(mut fragment) = fragments.pop() {
            fragment.merge(&IS_RELATED_TO.apply(&head));
            head = fragment;
        }
    }
    Ok(head)
}
