//! Traversal infrastructure: cycle-aware graph algorithms over
//! [`GraphWalk`](crate::features::traversal::ports::GraphWalk).

mod algorithms;

pub use algorithms::{has_cycle, reachable_from, tarjan_scc, topological_sort};
