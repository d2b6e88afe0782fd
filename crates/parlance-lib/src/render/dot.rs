//! Graphviz drawings of expressions, for debugging rule packs.

use std::fmt::Write as _;

use parlance_core::dsl::{KEYWORD_RELATION, TYPE_RELATION};
use parlance_core::{EdgeTarget, Expression, NodeId, Relation};

use super::{GenerationError, QueryRenderer, Rendered, Target};

#[derive(Clone, Debug)]
pub struct DotRenderer {
    type_relation: String,
    keyword_relation: String,
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self {
            type_relation: TYPE_RELATION.to_owned(),
            keyword_relation: KEYWORD_RELATION.to_owned(),
        }
    }
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relation drawn as a type assertion.
    pub fn type_relation(mut self, relation: impl Into<String>) -> Self {
        self.type_relation = relation.into();
        self
    }

    /// Relation drawn as a keyword.
    pub fn keyword_relation(mut self, relation: impl Into<String>) -> Self {
        self.keyword_relation = relation.into();
        self
    }
}

impl QueryRenderer for DotRenderer {
    fn name(&self) -> &str {
        "dot"
    }

    fn render(&self, expression: &Expression) -> Result<Rendered, GenerationError> {
        let mut out = String::from("digraph G {\n");
        writeln!(out, "{} [shape=house];", node_id(expression.head())).unwrap();

        let mut blanks = 0;
        for node in expression.iter_nodes() {
            let a = node_id(node);
            for edge in expression.iter_edges(node) {
                let b = match &edge.target {
                    EdgeTarget::Node(other) => node_id(*other),
                    EdgeTarget::Literal(value) => literal(value),
                };
                match edge.relation.as_named() {
                    Some(name) if name == self.type_relation => {
                        writeln!(out, "{b} [shape=box];").unwrap();
                        writeln!(out, "{a} -> {b} [color=red, arrowhead=empty];").unwrap();
                    }
                    Some(name) if name == self.keyword_relation => {
                        let blank = format!("blank{blanks}");
                        blanks += 1;
                        writeln!(out, "{blank} [shape=none label={b}];").unwrap();
                        writeln!(out, "{a} -> {blank} [style=dashed];").unwrap();
                    }
                    _ => {
                        let label = match &edge.relation {
                            Relation::Named(name) => escape(name, false),
                            Relation::Anonymous => String::new(),
                        };
                        writeln!(out, "{a} -> {b} [label=\"{label}\"];").unwrap();
                    }
                }
            }
        }
        out.push_str("}\n");

        Ok(Rendered {
            target: Target::Unbound,
            query: out,
        })
    }
}

fn node_id(node: NodeId) -> String {
    format!("x{node}")
}

fn literal(value: &str) -> String {
    let escaped = escape(value, true);
    if escaped.starts_with('"') {
        escaped
    } else {
        format!("\"{escaped}\"")
    }
}

/// Dot identifiers cannot hold spaces, brackets or backslashes.
fn escape(value: &str, add_quotes: bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut quoted = false;
    for c in value.chars() {
        match c {
            ' ' => out.push('_'),
            '\n' | '\0' | '[' | ']' | '\\' => {}
            '"' => {
                out.push_str("\\\"");
                quoted = true;
            }
            c => out.push(c),
        }
    }
    if quoted && add_quotes {
        format!("\"{out}\"")
    } else {
        out
    }
}
