//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Edge, Expression, NodeId};

impl Expression {
    pub(crate) fn ensure_node(&self, node: NodeId) -> &[Edge] {
        if node.index() >= self.node_count() {
            panic!(
                "Expression: node x{node} not found \
                 (expression has {} nodes)",
                self.node_count()
            );
        }
        self.edges_of(node)
    }

    pub(crate) fn ensure_unvisited(&self, visited: &[NodeId], node: NodeId) {
        if visited.contains(&node) {
            panic!("Expression: node x{node} reached twice (graph is not a tree): {self}");
        }
    }

    pub(crate) fn ensure_connected(&self, reached: usize) {
        if reached != self.node_count() {
            panic!(
                "Expression: {reached} of {} nodes reachable from head: {self}",
                self.node_count()
            );
        }
    }
}
