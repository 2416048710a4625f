//! Graph algorithms over the traversal adapter
//!
//! All functions here are generic over [`GraphWalk`] and never touch the
//! graph's storage directly. Dependence graphs are cyclic by nature, so
//! every algorithm tolerates cycles and self-loops.
//!
//! # Complexity
//! - `reachable_from`: O(V + E) worklist BFS
//! - `tarjan_scc`: O(V + E), iterative (no recursion, deep graphs safe)
//! - `topological_sort`: O(V + E) Kahn, `None` when a cycle exists
//! - `has_cycle`: O(V + E)

use std::collections::VecDeque;

use crate::features::ddg::domain::NodeId;
use crate::features::traversal::ports::GraphWalk;

/// All nodes reachable from `start` (including `start`), in BFS visit
/// order.
pub fn reachable_from(graph: &impl GraphWalk, start: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut worklist = VecDeque::new();

    visited[start.index()] = true;
    worklist.push_back(start);

    while let Some(current) = worklist.pop_front() {
        order.push(current);
        for child in graph.children(current) {
            if !visited[child.index()] {
                visited[child.index()] = true;
                worklist.push_back(child);
            }
        }
    }

    order
}

/// Strongly connected components, Tarjan's algorithm (iterative).
///
/// Components come out in reverse topological order of the condensation.
/// A node with a self-loop forms a cyclic size-1 component; a node without
/// one forms a trivial size-1 component.
pub fn tarjan_scc(graph: &impl GraphWalk) -> Vec<Vec<NodeId>> {
    const UNVISITED: u32 = u32::MAX;

    let n = graph.node_count();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0u32; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<NodeId> = Vec::new();
    let mut next_index = 0u32;
    let mut sccs: Vec<Vec<NodeId>> = Vec::new();

    // Explicit DFS frames: (node, next child position)
    let mut frames: Vec<(NodeId, usize)> = Vec::new();

    for root in graph.nodes() {
        if index[root.index()] != UNVISITED {
            continue;
        }

        index[root.index()] = next_index;
        lowlink[root.index()] = next_index;
        next_index += 1;
        on_stack[root.index()] = true;
        stack.push(root);
        frames.push((root, 0));

        while let Some(&mut (v, ref mut child_pos)) = frames.last_mut() {
            let edges = graph.child_edges(v);
            if *child_pos < edges.len() {
                let w = edges[*child_pos].target();
                *child_pos += 1;

                if index[w.index()] == UNVISITED {
                    index[w.index()] = next_index;
                    lowlink[w.index()] = next_index;
                    next_index += 1;
                    on_stack[w.index()] = true;
                    stack.push(w);
                    frames.push((w, 0));
                } else if on_stack[w.index()] {
                    lowlink[v.index()] = lowlink[v.index()].min(index[w.index()]);
                }
            } else {
                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    lowlink[parent.index()] = lowlink[parent.index()].min(lowlink[v.index()]);
                }
                if lowlink[v.index()] == index[v.index()] {
                    let mut component = Vec::new();
                    loop {
                        let w = stack.pop().expect("tarjan stack underflow");
                        on_stack[w.index()] = false;
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    sccs.push(component);
                }
            }
        }
    }

    sccs
}

/// True if the graph contains any cycle, self-loops included.
pub fn has_cycle(graph: &impl GraphWalk) -> bool {
    if tarjan_scc(graph).iter().any(|scc| scc.len() > 1) {
        return true;
    }
    graph
        .nodes()
        .any(|n| graph.children(n).any(|child| child == n))
}

/// Topological order of all nodes (Kahn's algorithm), or `None` when the
/// graph has a cycle. Ties break by insertion order for determinism.
pub fn topological_sort(graph: &impl GraphWalk) -> Option<Vec<NodeId>> {
    let n = graph.node_count();
    let mut indegree = vec![0usize; n];

    for node in graph.nodes() {
        for child in graph.children(node) {
            indegree[child.index()] += 1;
        }
    }

    let mut ready: VecDeque<NodeId> = graph
        .nodes()
        .filter(|id| indegree[id.index()] == 0)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(node) = ready.pop_front() {
        order.push(node);
        for child in graph.children(node) {
            indegree[child.index()] -= 1;
            if indegree[child.index()] == 0 {
                ready.push_back(child);
            }
        }
    }

    (order.len() == n).then_some(order)
}
