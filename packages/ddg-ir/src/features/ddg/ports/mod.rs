//! DDG Ports - Interface Layer (Hexagonal Architecture)
//!
//! Two seams:
//! - [`DependenceOracle`]: the external memory-dependence analysis the
//!   graph holds a handle to. Queried during construction; results are
//!   recomputed on demand, never cached by the graph.
//! - [`GraphBuilderOps`]: the capability an external construction
//!   algorithm drives to populate a graph. This crate implements it once
//!   with fine-grained nodes (`DDGBuilder`); program-dependence-graph
//!   style variants would implement it differently.

use serde::{Deserialize, Serialize};

use crate::features::ddg::domain::{EdgeId, NodeId};
use crate::shared::models::{InstrId, Instruction};

// ═══════════════════════════════════════════════════════════════════════════
// Dependence Oracle Port
// ═══════════════════════════════════════════════════════════════════════════

/// Classification of a memory dependence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependenceKind {
    /// Read-after-write (true dependence)
    Flow,
    /// Write-after-read
    Anti,
    /// Write-after-write
    Output,
}

/// Direction of a dependence relative to the loop iteration space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DependenceDirection {
    /// Source iteration precedes target iteration
    LessThan,
    /// Same iteration
    Equal,
    /// Source iteration follows target iteration
    GreaterThan,
    #[default]
    Unknown,
}

/// One dependence fact between two memory accesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependenceInfo {
    pub kind: DependenceKind,
    pub direction: DependenceDirection,
    /// Iteration distance when the analysis can compute one
    pub distance: Option<i64>,
}

impl DependenceInfo {
    pub fn new(kind: DependenceKind) -> Self {
        DependenceInfo {
            kind,
            direction: DependenceDirection::Unknown,
            distance: None,
        }
    }

    pub fn loop_carried(&self) -> bool {
        !matches!(self.direction, DependenceDirection::Equal)
    }
}

/// Dependence Oracle Port
///
/// Answers "must `dst` stay ordered after `src`?" for two memory-accessing
/// instructions. `None` is the normal negative answer, not an error.
///
/// # Implementors
/// - `ConservativeAliasOracle` (infrastructure/oracle.rs)
/// - downstream dependence analyses behind this trait
pub trait DependenceOracle: Send + Sync {
    /// Query the dependence from `src` to `dst`.
    ///
    /// Called zero or more times during construction and recomputed on
    /// every call; the graph stores no per-edge dependence fact.
    fn dependence(&self, src: &Instruction, dst: &Instruction) -> Option<DependenceInfo>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Graph Builder Port
// ═══════════════════════════════════════════════════════════════════════════

/// Graph Builder Port - the three privileged construction operations
///
/// A construction algorithm decides which instructions to examine, what to
/// merge, and when to query the oracle; whatever sequence of these calls it
/// issues is materialized verbatim (call order = node iteration order,
/// append order per source node's edge list).
pub trait GraphBuilderOps {
    /// Allocate a new `SingleInstruction` node for exactly one instruction
    /// and insert it into the graph's node set.
    fn create_fine_grained_node(&mut self, instr: InstrId) -> NodeId;

    /// Allocate a `RegisterDefUse` edge from `source` to `target`.
    /// Contract: both nodes already belong to the graph under construction.
    fn create_def_use_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId;

    /// Allocate a `MemoryDependence` edge from `source` to `target`.
    /// Contract: both nodes already belong to the graph under construction.
    fn create_memory_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId;
}
