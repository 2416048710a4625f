//! DDG Builder
//!
//! Implements the [`GraphBuilderOps`] capability for `DataDependenceGraph`
//! using fine-grained (single-instruction) nodes, plus the default
//! population pass over a region:
//!
//! 1. one node per instruction, in program order;
//! 2. def-use edges from each defining node to every node reading its
//!    value (single-assignment def map, one scan);
//! 3. memory edges from oracle queries over ordered pairs of
//!    memory-accessing instructions. Pairs where neither side writes are
//!    skipped without a query; self pairs are queried so loop-carried
//!    self-dependences become self-loops.
//!
//! Complexity: O(I + U + M^2 * Q) where I = instructions, U = operand
//! reads, M = memory-accessing instructions, Q = oracle query cost.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::features::ddg::domain::{
    DDGEdge, DDGNode, DataDependenceGraph, EdgeId, EdgeKind, NodeId,
};
use crate::features::ddg::ports::GraphBuilderOps;
use crate::shared::models::{InstrId, Instruction, Region};

/// Options gating the default population phases
#[derive(Debug, Clone, Copy)]
pub struct BuilderConfig {
    pub def_use_edges: bool,
    pub memory_edges: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            def_use_edges: true,
            memory_edges: true,
        }
    }
}

/// Fine-grained DDG builder
///
/// Borrows the graph under construction; the borrow is the capability that
/// scopes the privileged creation operations. Construction is
/// single-threaded and single-pass; once the builder is dropped the graph
/// is read-only.
pub struct DDGBuilder<'g> {
    graph: &'g mut DataDependenceGraph,
    config: BuilderConfig,
}

impl<'g> DDGBuilder<'g> {
    pub fn new(graph: &'g mut DataDependenceGraph) -> Self {
        DDGBuilder {
            graph,
            config: BuilderConfig::default(),
        }
    }

    pub fn with_config(graph: &'g mut DataDependenceGraph, config: BuilderConfig) -> Self {
        DDGBuilder { graph, config }
    }

    /// Run the default fine-grained population pass over `region`.
    ///
    /// Contract: `region.validate()` has passed and the graph is still
    /// empty.
    pub fn populate(&mut self, region: &Region) {
        // Phase 1: fine-grained nodes, creation order = program order
        let mut instr_node: FxHashMap<InstrId, NodeId> =
            FxHashMap::with_capacity_and_hasher(region.instruction_count(), Default::default());
        let mut def_node: FxHashMap<&str, NodeId> = FxHashMap::default();

        for (id, instr) in region.instructions() {
            let node = self.create_fine_grained_node(id);
            instr_node.insert(id, node);
            if instr.defines_value() {
                def_node.insert(instr.name.as_str(), node);
            }
        }

        // Phase 2: def-use edges, def node -> use node
        let mut def_use = 0usize;
        if self.config.def_use_edges {
            for (id, instr) in region.instructions() {
                let use_node = instr_node[&id];
                for operand in &instr.operands {
                    // Operands without a defining instruction are
                    // region-external inputs and carry no edge
                    if let Some(&def) = def_node.get(operand.as_str()) {
                        self.create_def_use_edge(def, use_node);
                        def_use += 1;
                    }
                }
            }
        }

        // Phase 3: memory dependence edges from oracle queries
        let mut memory = 0usize;
        if self.config.memory_edges {
            let oracle = Arc::clone(self.graph.oracle());
            let mem_instrs: Vec<(InstrId, &Instruction)> = region
                .instructions()
                .filter(|(_, i)| i.memory.touches_memory())
                .collect();

            for &(src_id, src) in &mem_instrs {
                for &(dst_id, dst) in &mem_instrs {
                    if !src.memory.writes() && !dst.memory.writes() {
                        continue;
                    }
                    if let Some(dep) = oracle.dependence(src, dst) {
                        trace!(
                            src = %src_id,
                            dst = %dst_id,
                            kind = ?dep.kind,
                            "memory dependence"
                        );
                        self.create_memory_edge(instr_node[&src_id], instr_node[&dst_id]);
                        memory += 1;
                    }
                }
            }
        }

        debug!(
            region = %region.name,
            nodes = self.graph.node_count(),
            def_use_edges = def_use,
            memory_edges = memory,
            "ddg populated"
        );
    }
}

impl GraphBuilderOps for DDGBuilder<'_> {
    fn create_fine_grained_node(&mut self, instr: InstrId) -> NodeId {
        self.graph.add_node(DDGNode::new_single(instr))
    }

    fn create_def_use_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.graph
            .connect(source, DDGEdge::new(target, EdgeKind::RegisterDefUse))
    }

    fn create_memory_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.graph
            .connect(source, DDGEdge::new(target, EdgeKind::MemoryDependence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ddg::ports::{DependenceInfo, DependenceKind, DependenceOracle};
    use crate::shared::models::{Instruction, MemoryAccess};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    /// Test oracle scripted on (src pointer, dst pointer) pairs
    struct ScriptedOracle {
        pairs: HashSet<(String, String)>,
    }

    impl ScriptedOracle {
        fn new(pairs: &[(&str, &str)]) -> Self {
            ScriptedOracle {
                pairs: pairs
                    .iter()
                    .map(|(a, b)| (a.to_string(), b.to_string()))
                    .collect(),
            }
        }
    }

    impl DependenceOracle for ScriptedOracle {
        fn dependence(&self, src: &Instruction, dst: &Instruction) -> Option<DependenceInfo> {
            let key = (src.pointer.clone()?, dst.pointer.clone()?);
            self.pairs
                .contains(&key)
                .then(|| DependenceInfo::new(DependenceKind::Flow))
        }
    }

    /// `x = load p; y = x + 1; store y, q` with a q/p aliasing report
    fn straight_line_region() -> Region {
        Region::straight_line(
            "f",
            vec![
                Instruction::new("x", "load")
                    .with_memory(MemoryAccess::Load, Some("p".into()))
                    .at_line(1),
                Instruction::new("y", "add")
                    .with_operands(vec!["x".into()])
                    .at_line(2),
                Instruction::new("", "store")
                    .with_operands(vec!["y".into()])
                    .with_memory(MemoryAccess::Store, Some("q".into()))
                    .at_line(3),
            ],
        )
    }

    fn build(region: &Region, config: BuilderConfig) -> DataDependenceGraph {
        let oracle = Arc::new(ScriptedOracle::new(&[("q", "p")]));
        let mut graph = DataDependenceGraph::new(region.name.clone(), oracle);
        DDGBuilder::with_config(&mut graph, config).populate(region);
        graph
    }

    #[test]
    fn test_straight_line_build() {
        let region = straight_line_region();
        let graph = build(&region, BuilderConfig::default());

        let stats = graph.stats();
        assert_eq!(stats.node_count, 3);
        // x feeds the add, y feeds the store
        assert_eq!(stats.def_use_edges, 2);
        // the one scripted q -> p aliasing fact
        assert_eq!(stats.memory_edges, 1);

        let n = |i| NodeId(i);
        assert!(graph.node(n(0)).edges()[0].is_def_use());
        assert_eq!(graph.node(n(0)).edges()[0].target(), n(1));
        assert!(graph.node(n(1)).edges()[0].is_def_use());
        assert_eq!(graph.node(n(1)).edges()[0].target(), n(2));
        assert!(graph.node(n(2)).edges()[0].is_memory_dependence());
        assert_eq!(graph.node(n(2)).edges()[0].target(), n(0));
    }

    #[test]
    fn test_node_order_matches_program_order() {
        let region = straight_line_region();
        let graph = build(&region, BuilderConfig::default());

        for (idx, id) in graph.node_ids().enumerate() {
            assert_eq!(graph.node(id).first_instruction(), InstrId(idx as u32));
        }
    }

    #[test]
    fn test_region_external_operands_carry_no_edge() {
        let region = Region::straight_line(
            "g",
            vec![Instruction::new("y", "add").with_operands(vec!["argc".into()])],
        );
        let graph = build(&region, BuilderConfig::default());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_config_gates_phases() {
        let region = straight_line_region();

        let no_mem = build(
            &region,
            BuilderConfig {
                def_use_edges: true,
                memory_edges: false,
            },
        );
        assert_eq!(no_mem.stats().memory_edges, 0);
        assert_eq!(no_mem.stats().def_use_edges, 2);

        let no_du = build(
            &region,
            BuilderConfig {
                def_use_edges: false,
                memory_edges: true,
            },
        );
        assert_eq!(no_du.stats().def_use_edges, 0);
        assert_eq!(no_du.stats().memory_edges, 1);
    }

    #[test]
    fn test_self_dependence_becomes_self_loop() {
        // a[i] = a[i-1] style loop body: load and store through the same
        // symbol, plus the store's own self pair
        let region = Region::loop_body(
            "loop",
            vec![crate::shared::models::BasicBlock::new(
                "body",
                vec![
                    Instruction::new("t", "load")
                        .with_memory(MemoryAccess::Load, Some("a".into())),
                    Instruction::new("", "store")
                        .with_operands(vec!["t".into()])
                        .with_memory(MemoryAccess::Store, Some("a".into())),
                ],
            )],
        );
        let oracle = Arc::new(ScriptedOracle::new(&[("a", "a")]));
        let mut graph = DataDependenceGraph::new("loop", oracle);
        DDGBuilder::new(&mut graph).populate(&region);

        // (load,store), (store,load), (store,store) all hit the script;
        // (load,load) is skipped because neither side writes
        assert_eq!(graph.stats().memory_edges, 3);
        let self_loops: Vec<_> = graph
            .node(NodeId(1))
            .edges()
            .iter()
            .filter(|e| e.target() == NodeId(1))
            .collect();
        assert_eq!(self_loops.len(), 1);
        assert!(self_loops[0].is_memory_dependence());
    }

    #[test]
    fn test_builder_ops_are_materialized_verbatim() {
        let oracle = Arc::new(ScriptedOracle::new(&[]));
        let mut graph = DataDependenceGraph::new("manual", oracle);
        let mut ops = DDGBuilder::new(&mut graph);

        let a = ops.create_fine_grained_node(InstrId(0));
        let b = ops.create_fine_grained_node(InstrId(1));
        let c = ops.create_fine_grained_node(InstrId(2));
        ops.create_def_use_edge(a, b);
        ops.create_memory_edge(c, a);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node(a).edges()[0].target(), b);
        assert!(graph.node(c).edges()[0].is_memory_dependence());
        assert!(graph.node(b).edges().is_empty());
    }
}
