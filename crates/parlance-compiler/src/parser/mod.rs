//! Textual pattern syntax.
//!
//! ```text
//! pos:NN          word whose POS tag is NN
//! lemma:be        word whose lemma is be
//! token:"'s"      word whose token is 's (quoted values take any text)
//! _               any word
//! { a b }         sequence
//! [ a b ]         alternation, first alternative preferred
//! x? x* x+        greedy quantifiers
//! x @name         capture
//! // comment      ignored up to end of line
//! ```
//!
//! The whole input is one implicit sequence.

mod grammar;
mod lexer;

#[cfg(test)]
mod lexer_tests;

use std::ops::Range;

use thiserror::Error;

use crate::Pattern;

pub use lexer::{SyntaxKind, Token, lex, token_text};

/// Syntax error with the byte range it was found at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at {}..{}", .span.start, .span.end)]
pub struct ParseError {
    pub message: String,
    pub span: Range<usize>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// Parse a pattern from text. Captures carry no payload.
pub fn parse<P>(source: &str) -> Result<Pattern<P>, ParseError> {
    grammar::Parser::new(source).parse_root()
}
