//! DDG domain models
//!
//! Nodes (single- or multi-instruction), edges (register def-use or memory
//! dependence), and the owning graph aggregate.

mod edge;
mod graph;
mod node;

pub use edge::{DDGEdge, EdgeKind};
pub use graph::{DDGDto, DDGInfo, DDGStats, DataDependenceGraph, EdgeId, NodeId};
pub use node::{DDGNode, NodeKind};
