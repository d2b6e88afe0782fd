//! Nested object queries (MQL).
//!
//! The expression tree is re-rooted at a node with outgoing edges and folded
//! bottom-up into nested JSON objects. An edge walked against its direction
//! is spelled `!relation`. A node's object holds its children only; the edge
//! back to the parent is already expressed by the parent's object.

use parlance_core::{EdgeTarget, Expression, NodeId, Relation};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{GenerationError, QueryRenderer, Rendered, Target};

/// Property standing in for an anonymous relation.
pub const ANY_RELATION: &str = "/type/reflect/any_master";

#[derive(Clone, Debug)]
pub struct MqlRenderer {
    any_relation: String,
}

impl Default for MqlRenderer {
    fn default() -> Self {
        Self {
            any_relation: ANY_RELATION.to_owned(),
        }
    }
}

enum Neighbor<'e> {
    Node(NodeId),
    Literal(&'e str),
}

impl MqlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_relation(mut self, relation: impl Into<String>) -> Self {
        self.any_relation = relation.into();
        self
    }

    fn label(&self, relation: &Relation) -> String {
        match relation {
            Relation::Named(name) => name.clone(),
            Relation::Anonymous => self.any_relation.clone(),
        }
    }

    /// Adjacency with every node-to-node edge present in both directions.
    fn bidirected<'e>(&self, expression: &'e Expression) -> Vec<Vec<(String, Neighbor<'e>)>> {
        let mut graph: Vec<Vec<_>> = (0..expression.node_count()).map(|_| Vec::new()).collect();
        for node in expression.iter_nodes() {
            for edge in expression.iter_edges(node) {
                let label = self.label(&edge.relation);
                match &edge.target {
                    EdgeTarget::Node(other) => {
                        graph[other.index()].push((format!("!{label}"), Neighbor::Node(node)));
                        graph[node.index()].push((label, Neighbor::Node(*other)));
                    }
                    EdgeTarget::Literal(value) => {
                        graph[node.index()].push((label, Neighbor::Literal(value)));
                    }
                }
            }
        }
        graph
    }
}

impl QueryRenderer for MqlRenderer {
    fn name(&self) -> &str {
        "nested"
    }

    fn render(&self, expression: &Expression) -> Result<Rendered, GenerationError> {
        let root = choose_root(expression)?;
        let graph = self.bidirected(expression);

        let mut order = vec![root];
        let mut parent: Vec<Option<NodeId>> = vec![None; expression.node_count()];
        let mut seen = vec![false; expression.node_count()];
        seen[root.index()] = true;
        let mut i = 0;
        while i < order.len() {
            let node = order[i];
            for (_, neighbor) in &graph[node.index()] {
                if let Neighbor::Node(other) = neighbor
                    && !seen[other.index()]
                {
                    seen[other.index()] = true;
                    parent[other.index()] = Some(node);
                    order.push(*other);
                }
            }
            i += 1;
        }

        let mut built: Vec<Option<Map<String, Value>>> = vec![None; expression.node_count()];
        let mut key_in_parent: Vec<Option<String>> = vec![None; expression.node_count()];
        for &node in order.iter().rev() {
            let mut object = Map::new();
            for (label, neighbor) in &graph[node.index()] {
                match neighbor {
                    Neighbor::Literal(value) => {
                        let key = free_key(&object, label);
                        object.insert(key, Value::String((*value).to_owned()));
                    }
                    Neighbor::Node(other) => {
                        // Not built yet means `other` is the parent.
                        let Some(child) = built[other.index()].take() else {
                            continue;
                        };
                        let key = free_key(&object, label);
                        key_in_parent[other.index()] = Some(key.clone());
                        object.insert(key, Value::Object(child));
                    }
                }
            }
            built[node.index()] = Some(object);
        }

        let mut path = Vec::new();
        let mut node = expression.head();
        while let Some(up) = parent[node.index()] {
            if let Some(key) = key_in_parent[node.index()].take() {
                path.push(key);
            }
            node = up;
        }
        path.reverse();

        let top = built[root.index()].take().unwrap_or_default();
        let query = to_pretty_json(&Value::Array(vec![Value::Object(top)]))?;

        Ok(Rendered {
            target: Target::Path(path),
            query,
        })
    }
}

/// The head when it has outgoing edges, else the first node that does.
fn choose_root(expression: &Expression) -> Result<NodeId, GenerationError> {
    let head = expression.head();
    if expression.has_edges(head) {
        return Ok(head);
    }
    expression
        .iter_nodes()
        .find(|&node| expression.has_edges(node))
        .ok_or(GenerationError::NoRoot)
}

/// `label`, or `pN:label` when the object already uses it.
///
/// MQL reads `prefix:property` as `property`, so repeated properties survive
/// without overwriting each other.
fn free_key(object: &Map<String, Value>, label: &str) -> String {
    if !object.contains_key(label) {
        return label.to_owned();
    }
    (1..)
        .map(|n| format!("p{n}:{label}"))
        .find(|key| !object.contains_key(key))
        .unwrap_or_else(|| label.to_owned())
}

fn to_pretty_json(value: &Value) -> Result<String, GenerationError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
