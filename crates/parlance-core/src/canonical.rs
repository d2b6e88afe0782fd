//! Isomorphism-invariant form of an expression.
//!
//! Two expressions built in different orders (e.g. `a + b` and `b + a`) get
//! different node indices but the same canonical form. Every node becomes the
//! sorted list of its edges, with node targets replaced by their own canonical
//! form, rooted at the head.

use std::fmt;

use crate::{EdgeTarget, Expression, NodeId, Relation};

/// Which way an edge pointed relative to the node that lists it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Orientation {
    Forward,
    Backward,
}

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum CanonicalTarget {
    Node(Canonical),
    Literal(String),
}

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CanonicalEdge {
    pub orientation: Orientation,
    pub relation: Relation,
    pub target: CanonicalTarget,
}

/// Frozen, sorted edge list of a node and everything below it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Canonical(pub Vec<CanonicalEdge>);

impl Canonical {
    pub fn edges(&self) -> &[CanonicalEdge] {
        &self.0
    }
}

impl Expression {
    /// Canonical form rooted at the head.
    ///
    /// Not used on the query path; intended for tests and deduplication.
    pub fn canonical(&self) -> Canonical {
        let adjacency = self.undirected();
        let order = self.walk();

        let mut parent: Vec<Option<NodeId>> = vec![None; self.node_count()];
        for &node in &order {
            let mut skipped_parent = false;
            for &(_, _, other) in &adjacency[node.index()] {
                if Some(other) == parent[node.index()] && !skipped_parent {
                    skipped_parent = true;
                    continue;
                }
                parent[other.index()] = Some(node);
            }
        }

        // Children first, so each node's subtrees are ready when it is built.
        let mut built: Vec<Option<Canonical>> = vec![None; self.node_count()];
        for &node in order.iter().rev() {
            let mut edges: Vec<CanonicalEdge> = self
                .edges_of(node)
                .iter()
                .filter_map(|edge| match &edge.target {
                    EdgeTarget::Literal(value) => Some(CanonicalEdge {
                        orientation: Orientation::Forward,
                        relation: edge.relation.clone(),
                        target: CanonicalTarget::Literal(value.clone()),
                    }),
                    EdgeTarget::Node(_) => None,
                })
                .collect();

            let mut skipped_parent = false;
            for &(orientation, relation, other) in &adjacency[node.index()] {
                if Some(other) == parent[node.index()] && !skipped_parent {
                    skipped_parent = true;
                    continue;
                }
                let child = built[other.index()].take().unwrap_or_default();
                edges.push(CanonicalEdge {
                    orientation,
                    relation: relation.clone(),
                    target: CanonicalTarget::Node(child),
                });
            }

            edges.sort();
            built[node.index()] = Some(Canonical(edges));
        }

        built[self.head().index()].take().unwrap_or_default()
    }
}

impl fmt::Display for Canonical {
    /// Compact nested rendering: `(rdf:type "Person" <-name ())`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, edge) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if edge.orientation == Orientation::Backward {
                f.write_str("<-")?;
            }
            write!(f, "{} ", edge.relation)?;
            match &edge.target {
                CanonicalTarget::Node(child) => write!(f, "{child}")?,
                CanonicalTarget::Literal(value) => write!(f, "{value:?}")?,
            }
        }
        f.write_str(")")
    }
}
