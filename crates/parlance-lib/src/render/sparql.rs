//! Flat triple queries (SPARQL).
//!
//! Every edge becomes one triple pattern. Nodes are the variables `?x<n>`,
//! anonymous relations get a fresh predicate variable `?y<n>` per occurrence.

use std::fmt::Write as _;

use parlance_core::{EdgeTarget, Expression, NodeId, Relation};

use super::{GenerationError, QueryRenderer, Rendered, Target};

#[derive(Clone, Debug, Default)]
pub struct SparqlRenderer {
    preamble: String,
    select_all: bool,
}

impl SparqlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text placed before `SELECT`, typically `PREFIX` declarations.
    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Select every variable (`*`) instead of the head only.
    pub fn select_all(mut self, select_all: bool) -> Self {
        self.select_all = select_all;
        self
    }
}

impl QueryRenderer for SparqlRenderer {
    fn name(&self) -> &str {
        "flat"
    }

    fn render(&self, expression: &Expression) -> Result<Rendered, GenerationError> {
        let mut anonymous = 0;
        let mut triples = Vec::with_capacity(expression.edge_count());

        for node in expression.iter_nodes() {
            let subject = variable(node);
            for edge in expression.iter_edges(node) {
                let predicate = match &edge.relation {
                    Relation::Named(name) => escape(name)?,
                    Relation::Anonymous => {
                        anonymous += 1;
                        format!("?y{}", anonymous - 1)
                    }
                };
                let object = match &edge.target {
                    EdgeTarget::Node(other) => variable(*other),
                    EdgeTarget::Literal(value) => literal(value)?,
                };
                triples.push(format!("  {subject} {predicate} {object}."));
            }
        }

        let head = variable(expression.head());
        let select = if self.select_all { "*" } else { head.as_str() };

        let mut query = String::new();
        if !self.preamble.is_empty() {
            writeln!(query, "{}", self.preamble).unwrap();
        }
        writeln!(query, "SELECT DISTINCT {select} WHERE {{").unwrap();
        for triple in &triples {
            writeln!(query, "{triple}").unwrap();
        }
        query.push_str("}\n");

        Ok(Rendered {
            target: Target::Variable(head),
            query,
        })
    }
}

fn variable(node: NodeId) -> String {
    format!("?x{node}")
}

/// Quoted literals and prefixed names pass through; anything else is quoted.
fn literal(value: &str) -> Result<String, GenerationError> {
    if value.starts_with('"') || value.contains(':') {
        return escape(value);
    }
    if value.contains('"') {
        return Err(GenerationError::malformed(value, "unquoted literal contains `\"`"));
    }
    escape(&format!("\"{value}\""))
}

/// Drop layout characters, then refuse anything that would break the query.
fn escape(value: &str) -> Result<String, GenerationError> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t' | '\x0b'))
        .collect();

    if cleaned.is_empty() {
        return Err(GenerationError::malformed(value, "empty term"));
    }
    if cleaned.chars().any(char::is_control) {
        return Err(GenerationError::malformed(value, "control character"));
    }
    if cleaned.starts_with(':') || cleaned.ends_with(':') {
        return Err(GenerationError::malformed(value, "dangling `:` prefix separator"));
    }
    Ok(cleaned)
}
