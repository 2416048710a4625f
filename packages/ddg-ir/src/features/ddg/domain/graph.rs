//! Data Dependence Graph
//!
//! Arena-owned aggregate: the graph owns every node, each node owns its
//! outgoing edges, and edges reference target nodes by plain index. Nothing
//! is ever removed, so index identities stay valid for the graph's whole
//! lifetime. Unlike a CFG-style DAG, this graph is expected to contain
//! cycles (loop-carried dependences) and self-loops.
//!
//! Construction happens exclusively through the builder capability
//! (`features::ddg::infrastructure::DDGBuilder`): the raw mutators here are
//! `pub(crate)` so that outside this crate the graph is read-only once
//! built.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::edge::{DDGEdge, EdgeKind};
use super::node::{DDGNode, NodeKind};
use crate::features::ddg::ports::DependenceOracle;

/// Stable node identity: index into the graph's node arena, assigned in
/// creation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Stable edge identity: source node plus position in its outgoing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    pub source: NodeId,
    pub index: u32,
}

/// Per-graph metadata: diagnostic name plus the held dependence-oracle
/// handle.
///
/// The oracle is stored so later dependence queries can be recomputed on
/// demand instead of materializing one dependence fact per edge; memory
/// stays O(nodes + edges) rather than O(dependence pairs). It is not a
/// public query surface of the graph.
pub struct DDGInfo {
    name: String,
    oracle: Arc<dyn DependenceOracle>,
}

impl DDGInfo {
    pub fn new(name: impl Into<String>, oracle: Arc<dyn DependenceOracle>) -> Self {
        DDGInfo {
            name: name.into(),
            oracle,
        }
    }

    /// Label used to name this graph
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn oracle(&self) -> &Arc<dyn DependenceOracle> {
        &self.oracle
    }
}

impl std::fmt::Debug for DDGInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DDGInfo").field("name", &self.name).finish()
    }
}

/// Data Dependence Graph
///
/// Node iteration order equals creation order; each node's outgoing edges
/// keep append order. Downstream printers and deterministic walks rely on
/// both.
#[derive(Debug)]
pub struct DataDependenceGraph {
    info: DDGInfo,
    nodes: Vec<DDGNode>,
}

impl DataDependenceGraph {
    /// Create an empty graph. Population goes through `DDGBuilder`.
    pub fn new(name: impl Into<String>, oracle: Arc<dyn DependenceOracle>) -> Self {
        DataDependenceGraph {
            info: DDGInfo::new(name, oracle),
            nodes: Vec::new(),
        }
    }

    pub fn info(&self) -> &DDGInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub(crate) fn oracle(&self) -> &Arc<dyn DependenceOracle> {
        self.info.oracle()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Node ids in creation order (restartable)
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &DDGNode> {
        self.nodes.iter()
    }

    /// Node lookup. Contract: `id` belongs to this graph.
    pub fn node(&self, id: NodeId) -> &DDGNode {
        &self.nodes[id.index()]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&DDGNode> {
        self.nodes.get(id.index())
    }

    /// Mutable node lookup for post-construction passes that merge
    /// instructions into existing nodes. Contract: `id` belongs to this
    /// graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut DDGNode {
        &mut self.nodes[id.index()]
    }

    /// Edge lookup. Contract: `id` was returned by this graph's builder.
    pub fn edge(&self, id: EdgeId) -> &DDGEdge {
        &self.node(id.source).edges()[id.index as usize]
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges().len()).sum()
    }

    /// Insert a node the builder created. Creation order is iteration
    /// order.
    pub(crate) fn add_node(&mut self, node: DDGNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append an edge to `source`'s outgoing list.
    ///
    /// Contract: both endpoints belong to this graph and the kind is
    /// classified. Self-loops (source == target) are valid; loop-carried
    /// memory dependence routinely produces them.
    pub(crate) fn connect(&mut self, source: NodeId, edge: DDGEdge) -> EdgeId {
        assert!(self.contains(source), "source node not in graph");
        assert!(self.contains(edge.target()), "target node not in graph");
        assert!(edge.kind() != EdgeKind::Unknown, "edge kind not classified");

        let index = self.nodes[source.index()].push_edge(edge) as u32;
        EdgeId { source, index }
    }

    /// Count nodes and edges by kind
    pub fn stats(&self) -> DDGStats {
        let mut def_use_edges = 0;
        let mut memory_edges = 0;
        let mut multi_instruction_nodes = 0;

        for node in &self.nodes {
            if node.kind() == NodeKind::MultiInstruction {
                multi_instruction_nodes += 1;
            }
            for edge in node.edges() {
                match edge.kind() {
                    EdgeKind::RegisterDefUse => def_use_edges += 1,
                    EdgeKind::MemoryDependence => memory_edges += 1,
                    EdgeKind::Unknown => {}
                }
            }
        }

        DDGStats {
            node_count: self.nodes.len(),
            edge_count: def_use_edges + memory_edges,
            def_use_edges,
            memory_edges,
            multi_instruction_nodes,
        }
    }

    /// Convert to the serializable DTO form
    pub fn to_dto(&self) -> DDGDto {
        DDGDto {
            name: self.info.name().to_string(),
            nodes: self.nodes.clone(),
        }
    }

    /// Serialize the graph as JSON (via the DTO form)
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(&self.to_dto())?)
    }
}

/// DDG statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DDGStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub def_use_edges: usize,
    pub memory_edges: usize,
    pub multi_instruction_nodes: usize,
}

/// Serializable DTO for `DataDependenceGraph`
///
/// The oracle handle cannot travel through serde, so deserialization goes
/// through [`DDGDto::into_graph`] with a fresh handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DDGDto {
    pub name: String,
    pub nodes: Vec<DDGNode>,
}

impl DDGDto {
    /// Parse a DTO from JSON
    pub fn from_json(json: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild a graph from DTO form, rebinding the oracle handle.
    ///
    /// Contract: the DTO came from `to_dto` on a valid graph; every edge
    /// target must be in bounds.
    pub fn into_graph(self, oracle: Arc<dyn DependenceOracle>) -> DataDependenceGraph {
        let count = self.nodes.len();
        for node in &self.nodes {
            for edge in node.edges() {
                assert!(
                    edge.target().index() < count,
                    "DTO edge target out of bounds"
                );
            }
        }

        DataDependenceGraph {
            info: DDGInfo::new(self.name, oracle),
            nodes: self.nodes,
        }
    }
}

// Custom serde implementation via DTO
impl Serialize for DataDependenceGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_dto().serialize(serializer)
    }
}
