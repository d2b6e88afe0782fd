//! Recursive-descent parser.
//!
//! ```text
//! root    = item* EOF
//! item    = atom ( "?" | "*" | "+" | "@" Id )*
//! atom    = "_" | Id ":" value | "{" item* "}" | "[" item* "]"
//! value   = Id | StringLiteral
//! ```

use std::ops::Range;

use parlance_bytecode::Predicate;

use super::lexer::{SyntaxKind, Token, lex, token_text};
use super::ParseError;
use crate::{Pattern, Quantifier};

pub(super) struct Parser<'q> {
    source: &'q str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'q> Parser<'q> {
    pub(super) fn new(source: &'q str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<SyntaxKind> {
        self.peek().map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    fn current_span(&self) -> Range<usize> {
        self.peek().map_or_else(|| self.eof_span(), |t| t.span.clone())
    }

    fn describe(&self, token: Option<&Token>) -> String {
        match token {
            None => "end of input".to_owned(),
            Some(t) if t.kind == SyntaxKind::Garbage => {
                format!("unrecognized input `{}`", token_text(self.source, t))
            }
            Some(t) => format!("`{}`", token_text(self.source, t)),
        }
    }

    fn expect(&mut self, kind: SyntaxKind, what: &str) -> Result<Token, ParseError> {
        if let Some(token) = self.peek().filter(|t| t.kind == kind).cloned() {
            self.pos += 1;
            return Ok(token);
        }
        Err(ParseError::new(
            format!("expected {what}, found {}", self.describe(self.peek())),
            self.current_span(),
        ))
    }

    pub(super) fn parse_root<P>(mut self) -> Result<Pattern<P>, ParseError> {
        let mut items = Vec::new();
        while self.peek().is_some() {
            items.push(self.parse_item()?);
        }
        Ok(match items.len() {
            1 => items.remove(0),
            _ => Pattern::Seq(items),
        })
    }

    fn parse_items_until<P>(&mut self, close: SyntaxKind, what: &str) -> Result<Vec<Pattern<P>>, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.peek_kind() {
                Some(kind) if kind == close => {
                    self.bump();
                    return Ok(items);
                }
                None => {
                    return Err(ParseError::new(
                        format!("expected {what}, found end of input"),
                        self.eof_span(),
                    ));
                }
                Some(_) => items.push(self.parse_item()?),
            }
        }
    }

    fn parse_item<P>(&mut self) -> Result<Pattern<P>, ParseError> {
        let mut pattern = self.parse_atom()?;
        loop {
            let quantifier = match self.peek_kind() {
                Some(SyntaxKind::Question) => Quantifier::Optional,
                Some(SyntaxKind::Star) => Quantifier::Star,
                Some(SyntaxKind::Plus) => Quantifier::Plus,
                Some(SyntaxKind::At) => {
                    self.bump();
                    let name = self.expect(SyntaxKind::Id, "capture name after `@`")?;
                    pattern = pattern.capture(token_text(self.source, &name));
                    continue;
                }
                _ => return Ok(pattern),
            };
            self.bump();
            pattern = Pattern::Repeat {
                body: Box::new(pattern),
                quantifier,
            };
        }
    }

    fn parse_atom<P>(&mut self) -> Result<Pattern<P>, ParseError> {
        let span = self.current_span();
        match self.peek_kind() {
            Some(SyntaxKind::Underscore) => {
                self.bump();
                Ok(Pattern::Word(Predicate::Any))
            }
            Some(SyntaxKind::BraceOpen) => {
                self.bump();
                let items = self.parse_items_until(SyntaxKind::BraceClose, "`}`")?;
                Ok(Pattern::Seq(items))
            }
            Some(SyntaxKind::BracketOpen) => {
                self.bump();
                let alternatives = self.parse_items_until(SyntaxKind::BracketClose, "`]`")?;
                if alternatives.is_empty() {
                    return Err(ParseError::new("empty alternation", span.start..self.current_span().start));
                }
                Ok(Pattern::Alt(alternatives))
            }
            Some(SyntaxKind::Id) => self.parse_predicate(),
            _ => Err(ParseError::new(
                format!("expected a pattern, found {}", self.describe(self.peek())),
                span,
            )),
        }
    }

    fn parse_predicate<P>(&mut self) -> Result<Pattern<P>, ParseError> {
        let field = self.expect(SyntaxKind::Id, "field name")?;
        let field_name = token_text(self.source, &field);
        let make: fn(String) -> Predicate = match field_name {
            "pos" => Predicate::Pos,
            "lemma" => Predicate::Lemma,
            "token" => Predicate::Token,
            _ => {
                return Err(ParseError::new(
                    format!("unknown field `{field_name}`, expected `pos`, `lemma` or `token`"),
                    field.span,
                ));
            }
        };
        self.expect(SyntaxKind::Colon, "`:`")?;

        let value = match self.peek_kind() {
            Some(SyntaxKind::Id) => {
                let token = self.expect(SyntaxKind::Id, "value")?;
                token_text(self.source, &token).to_owned()
            }
            Some(SyntaxKind::StringLiteral) => {
                let token = self.expect(SyntaxKind::StringLiteral, "value")?;
                unescape(token_text(self.source, &token))
            }
            _ => {
                return Err(ParseError::new(
                    format!("expected a value after `{field_name}:`, found {}", self.describe(self.peek())),
                    self.current_span(),
                ));
            }
        };
        Ok(Pattern::Word(make(value)))
    }
}

/// Strip quotes and resolve `\x` escapes to `x`.
fn unescape(literal: &str) -> String {
    let inner = &literal[1..literal.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(escaped) = chars.next()
        {
            out.push(escaped);
        } else {
            out.push(c);
        }
    }
    out
}
