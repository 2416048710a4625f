//! Graph export helpers
//!
//! Projects the DDG onto a `petgraph::DiGraph` for interop with the wider
//! graph-algorithm ecosystem, and renders Graphviz DOT for diagnostics.
//! Node insertion order is preserved, so petgraph `NodeIndex` values line
//! up with `NodeId` indices.

use petgraph::graph::DiGraph;

use crate::features::ddg::domain::{DataDependenceGraph, EdgeKind, NodeId};

/// Project the graph onto petgraph; node weights are the DDG `NodeId`s,
/// edge weights the edge kinds.
pub fn to_petgraph(graph: &DataDependenceGraph) -> DiGraph<NodeId, EdgeKind> {
    let mut pg = DiGraph::with_capacity(graph.node_count(), graph.edge_count());

    let indices: Vec<_> = graph.node_ids().map(|id| pg.add_node(id)).collect();
    for id in graph.node_ids() {
        for edge in graph.node(id).edges() {
            pg.add_edge(
                indices[id.index()],
                indices[edge.target().index()],
                edge.kind(),
            );
        }
    }

    pg
}

/// Render the graph as Graphviz DOT
pub fn to_dot(graph: &DataDependenceGraph) -> String {
    let mut pg: DiGraph<String, &'static str> =
        DiGraph::with_capacity(graph.node_count(), graph.edge_count());

    let indices: Vec<_> = graph
        .node_ids()
        .map(|id| {
            let instrs: Vec<String> = graph
                .node(id)
                .instructions()
                .iter()
                .map(|i| i.to_string())
                .collect();
            pg.add_node(format!("{} [{}]", id, instrs.join(",")))
        })
        .collect();

    for id in graph.node_ids() {
        for edge in graph.node(id).edges() {
            pg.add_edge(
                indices[id.index()],
                indices[edge.target().index()],
                edge.kind().as_str(),
            );
        }
    }

    format!("{}", petgraph::dot::Dot::new(&pg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ddg::domain::{DDGEdge, DDGNode};
    use crate::features::ddg::infrastructure::ConservativeAliasOracle;
    use crate::shared::models::InstrId;
    use std::sync::Arc;

    fn sample_graph() -> DataDependenceGraph {
        let mut g =
            DataDependenceGraph::new("viz", Arc::new(ConservativeAliasOracle::default()));
        let a = g.add_node(DDGNode::new_single(InstrId(0)));
        let b = g.add_node(DDGNode::new_single(InstrId(1)));
        g.connect(a, DDGEdge::new(b, EdgeKind::RegisterDefUse));
        g.connect(b, DDGEdge::new(a, EdgeKind::MemoryDependence));
        g
    }

    #[test]
    fn test_petgraph_projection_shape() {
        let g = sample_graph();
        let pg = to_petgraph(&g);

        assert_eq!(pg.node_count(), 2);
        assert_eq!(pg.edge_count(), 2);
        // Insertion order lines NodeIndex up with NodeId
        assert_eq!(pg[petgraph::graph::NodeIndex::new(0)], NodeId(0));
        assert_eq!(pg[petgraph::graph::NodeIndex::new(1)], NodeId(1));
    }

    #[test]
    fn test_dot_output_mentions_edge_kinds() {
        let g = sample_graph();
        let dot = to_dot(&g);

        assert!(dot.contains("digraph"));
        assert!(dot.contains("DEF_USE"));
        assert!(dot.contains("MEMORY"));
        assert!(dot.contains("n0 [i0]"));
    }
}
