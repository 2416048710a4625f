//! Traversal feature
//!
//! Generic graph-algorithm support: the [`ports::GraphWalk`] adapter trait
//! and cycle-aware algorithms written against it, so that SCC detection,
//! reachability, and topological ordering run over the DDG without knowing
//! its storage shape.

pub mod infrastructure;
pub mod ports;
