//! The `Expression` graph.
//!
//! An expression is the abstract form of a database query: every node is a
//! query variable and every edge a relation, either to another node or to a
//! literal value. Expressions are never built edge by edge. Instead they grow
//! through three operations, all relative to the *head* node:
//!
//! - [`Expression::new`]: a single solitary head node.
//! - [`Expression::decapitate`]: add a fresh node, link it to the old head and
//!   make it the new head (one node and one edge per call).
//! - [`Expression::add_data`]: attach a literal leaf to the head.
//! - [`Expression::merge`]: union two expressions, identifying their heads.
//!
//! Together these only ever produce a single connected tree (viewed without
//! edge direction), so variables cannot clash and cycles cannot be built.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Stable index of a node inside one expression.
///
/// Indices are assigned at creation and never reused or reassigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a NodeId from a raw index. Use only for tests and deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge label.
///
/// `Anonymous` stands for "is related to somehow" when the rule author does
/// not know the predicate. Backends decide how to spell it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Relation {
    Named(String),
    Anonymous,
}

impl Relation {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<&str> for Relation {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for Relation {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Anonymous => f.write_str("<related>"),
        }
    }
}

/// Where an edge points: another node of the same expression, or a literal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum EdgeTarget {
    Node(NodeId),
    Literal(String),
}

impl EdgeTarget {
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            Self::Literal(_) => None,
        }
    }
}

/// Outgoing edge of a node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub relation: Relation,
    pub target: EdgeTarget,
}

/// Query graph with a single head node.
///
/// `==` compares the raw index assignment. Two isomorphic expressions built in
/// a different order are not equal; compare [`Expression::canonical`] forms
/// for that.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Expression {
    /// Adjacency lists, indexed by `NodeId`. Edges keep insertion order.
    nodes: Vec<Vec<Edge>>,
    head: NodeId,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    /// Create a graph with a single blank head node and no edges.
    pub fn new() -> Self {
        Self {
            nodes: vec![Vec::new()],
            head: NodeId(0),
        }
    }

    fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Vec::new());
        id
    }

    /// The node further composition attaches to.
    #[inline]
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// Number of nodes (never zero).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, node and literal targets alike.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    /// Insert a fresh head linked to the old one by `relation`.
    ///
    /// The edge goes `old head -> new head`, or `new head -> old head` when
    /// `reverse` is set.
    pub fn decapitate(&mut self, relation: impl Into<Relation>, reverse: bool) {
        let old_head = self.head;
        let new_head = self.add_node();
        self.head = new_head;

        let (source, target) = if reverse {
            (new_head, old_head)
        } else {
            (old_head, new_head)
        };
        self.nodes[source.index()].push(Edge {
            relation: relation.into(),
            target: EdgeTarget::Node(target),
        });
    }

    /// Relate the head to a constant value.
    ///
    /// Literals can never name a node; use [`Expression::merge`] and
    /// [`Expression::decapitate`] to relate nodes.
    pub fn add_data(&mut self, relation: impl Into<Relation>, value: impl Into<String>) {
        let head = self.head;
        self.nodes[head.index()].push(Edge {
            relation: relation.into(),
            target: EdgeTarget::Literal(value.into()),
        });
    }

    /// Union `other` into `self`, identifying `other`'s head with ours.
    ///
    /// Every other node of `other` gets a fresh index in our index space, in
    /// `other`'s index order. The head stays the same; `other` is untouched.
    pub fn merge(&mut self, other: &Expression) {
        let translation: Vec<NodeId> = other
            .iter_nodes()
            .map(|node| {
                if node == other.head {
                    self.head
                } else {
                    self.add_node()
                }
            })
            .collect();

        for (node, edges) in other.nodes.iter().enumerate() {
            let source = translation[node];
            for edge in edges {
                let target = match &edge.target {
                    EdgeTarget::Node(dest) => EdgeTarget::Node(translation[dest.index()]),
                    EdgeTarget::Literal(value) => EdgeTarget::Literal(value.clone()),
                };
                self.nodes[source.index()].push(Edge {
                    relation: edge.relation.clone(),
                    target,
                });
            }
        }
    }

    /// Node indices in creation order.
    pub fn iter_nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + use<> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Outgoing edges of `node`, in insertion order.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this expression.
    pub fn iter_edges(&self, node: NodeId) -> std::slice::Iter<'_, Edge> {
        self.ensure_node(node).iter()
    }

    /// Whether `node` has at least one outgoing edge.
    pub fn has_edges(&self, node: NodeId) -> bool {
        !self.ensure_node(node).is_empty()
    }

    /// Breadth-first order over the undirected view of the graph, from the head.
    ///
    /// Every node appears exactly once.
    pub fn walk(&self) -> Vec<NodeId> {
        let adjacency = self.undirected();
        let mut order = vec![self.head];
        let mut parents: Vec<Option<NodeId>> = vec![None];
        let mut i = 0;
        while i < order.len() {
            let node = order[i];
            let parent = parents[i];
            let mut skipped_parent = false;
            for &(_, _, other) in &adjacency[node.index()] {
                if Some(other) == parent && !skipped_parent {
                    skipped_parent = true;
                    continue;
                }
                self.ensure_unvisited(&order, other);
                order.push(other);
                parents.push(Some(node));
            }
            i += 1;
        }
        self.ensure_connected(order.len());
        order
    }

    /// Node-to-node edges seen from both ends.
    ///
    /// Entry `(orientation, relation, other)` in the list of `a` means an edge
    /// `a -> other` (forward) or `other -> a` (backward).
    pub(crate) fn undirected(&self) -> Vec<Vec<(crate::Orientation, &Relation, NodeId)>> {
        use crate::Orientation;

        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for (node, edges) in self.nodes.iter().enumerate() {
            for edge in edges {
                if let EdgeTarget::Node(other) = edge.target {
                    adjacency[node].push((Orientation::Forward, &edge.relation, other));
                    adjacency[other.index()].push((
                        Orientation::Backward,
                        &edge.relation,
                        NodeId(node as u32),
                    ));
                }
            }
        }
        adjacency
    }

    pub(crate) fn edges_of(&self, node: NodeId) -> &[Edge] {
        &self.nodes[node.index()]
    }
}

impl fmt::Display for Expression {
    /// Single-line listing, e.g. `x0 -rdf:type-> "Person"; x0 -name-> x1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "head=x{}", self.head)?;
        for node in self.iter_nodes() {
            for edge in self.iter_edges(node) {
                write!(f, "; x{} -{}-> ", node, edge.relation)?;
                match &edge.target {
                    EdgeTarget::Node(other) => write!(f, "x{other}")?,
                    EdgeTarget::Literal(value) => write!(f, "{value:?}")?,
                }
            }
        }
        Ok(())
    }
}

impl AddAssign<&Expression> for Expression {
    fn add_assign(&mut self, other: &Expression) {
        self.merge(other);
    }
}

impl AddAssign for Expression {
    fn add_assign(&mut self, other: Expression) {
        self.merge(&other);
    }
}

impl Add<&Expression> for &Expression {
    type Output = Expression;

    fn add(self, other: &Expression) -> Expression {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }
}

impl Add<&Expression> for Expression {
    type Output = Expression;

    fn add(mut self, other: &Expression) -> Expression {
        self.merge(other);
        self
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(mut self, other: Expression) -> Expression {
        self.merge(&other);
        self
    }
}
