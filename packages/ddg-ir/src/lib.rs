/*
 * DDG IR - Data Dependence Graph Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Instruction, Region)
 * - features/    : Vertical slices (ddg → traversal)
 *
 * The DDG models ordering constraints inside a region (a function body or
 * a single loop body): register def-use edges come from the region's
 * single-assignment value names, memory dependence edges come from a
 * pluggable dependence oracle. The graph is cyclic by nature (loop-carried
 * dependences), so consumers run cycle-aware algorithms over the
 * traversal adapter instead of assuming a DAG.
 */

#![allow(clippy::upper_case_acronyms)] // DDG naming

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Vertical feature slices
pub mod features;

/// Unified error handling
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Public API Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{DDGError, Result};
pub use shared::models::{BasicBlock, InstrId, Instruction, MemoryAccess, Region, RegionKind};

pub use features::ddg::application::{build_function_ddg, build_loop_ddg};
pub use features::ddg::domain::{
    DDGDto, DDGEdge, DDGInfo, DDGNode, DDGStats, DataDependenceGraph, EdgeId, EdgeKind, NodeId,
    NodeKind,
};
pub use features::ddg::infrastructure::{
    BuilderConfig, ConservativeAliasOracle, DDGBuilder, to_dot, to_petgraph,
};
pub use features::ddg::ports::{
    DependenceDirection, DependenceInfo, DependenceKind, DependenceOracle, GraphBuilderOps,
};

pub use features::traversal::infrastructure::{
    has_cycle, reachable_from, tarjan_scc, topological_sort,
};
pub use features::traversal::ports::GraphWalk;
