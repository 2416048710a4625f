//! DDG (Data Dependence Graph) feature
//!
//! Node/edge/graph models, the capability-scoped builder contract, the
//! fine-grained builder implementation, and the region-level entry points.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
