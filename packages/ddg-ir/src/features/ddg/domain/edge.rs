//! DDG edge
//!
//! An edge records one ordering constraint from its source node (implicit:
//! the edge lives in the source's outgoing list) to its target node. Kind
//! is fixed at construction; edges are immutable facts once created.

use serde::{Deserialize, Serialize};

use super::graph::NodeId;

/// Kind of DDG edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeKind {
    #[default]
    Unknown,
    /// SSA-style register dependency: the source node defines a value the
    /// target node reads
    RegisterDefUse,
    /// Memory ordering constraint reported by the dependence oracle
    MemoryDependence,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Unknown => "UNKNOWN",
            EdgeKind::RegisterDefUse => "DEF_USE",
            EdgeKind::MemoryDependence => "MEMORY",
        }
    }
}

/// DDG edge: kind plus a non-owning reference to the target node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DDGEdge {
    target: NodeId,
    kind: EdgeKind,
}

impl DDGEdge {
    /// Construct an edge of `kind` pointing at `target`.
    ///
    /// Builder paths only ever construct `RegisterDefUse` or
    /// `MemoryDependence` edges; the graph asserts against `Unknown` when
    /// the edge is connected.
    pub fn new(target: NodeId, kind: EdgeKind) -> Self {
        DDGEdge { target, kind }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// True if this is a register def-use edge
    pub fn is_def_use(&self) -> bool {
        self.kind == EdgeKind::RegisterDefUse
    }

    /// True if this is a memory dependence edge
    pub fn is_memory_dependence(&self) -> bool {
        self.kind == EdgeKind::MemoryDependence
    }
}
