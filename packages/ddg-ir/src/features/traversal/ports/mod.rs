//! Traversal Ports - Interface Layer (Hexagonal Architecture)
//!
//! [`GraphWalk`] is the adapter generic graph algorithms are written
//! against. The graph's native storage is "node → outgoing edges"; the
//! adapter additionally projects each edge to its target node, so
//! algorithms phrased as "node → child nodes" need no graph-specific code.
//! Algorithms that care about edge kinds (e.g. treating memory edges
//! differently during cycle classification) use the unprojected
//! `child_edges` view instead.

use crate::features::ddg::domain::{DDGEdge, DataDependenceGraph, NodeId};

/// Uniform traversal shape over a dependence graph.
///
/// Contract: node identities are dense indices `0..node_count()` assigned
/// in insertion order; every iterator below is finite and restartable
/// (each call re-enters from the start).
pub trait GraphWalk {
    /// Number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Outgoing edges of `node` in append order
    fn child_edges(&self, node: NodeId) -> &[DDGEdge];

    /// All nodes in insertion order
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    /// Successor nodes of `node`: the outgoing edges projected to their
    /// targets, lazily, in append order
    fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.child_edges(node).iter().map(DDGEdge::target)
    }

    /// Entry-node convention for algorithms that need a root: the first
    /// node in insertion order. A dependence graph has no inherent
    /// semantic root.
    fn entry_node(&self) -> Option<NodeId> {
        (self.node_count() > 0).then_some(NodeId(0))
    }
}

impl GraphWalk for DataDependenceGraph {
    fn node_count(&self) -> usize {
        DataDependenceGraph::node_count(self)
    }

    fn child_edges(&self, node: NodeId) -> &[DDGEdge] {
        self.node(node).edges()
    }
}
