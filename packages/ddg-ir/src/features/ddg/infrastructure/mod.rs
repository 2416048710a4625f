//! DDG infrastructure: the fine-grained builder, the default conservative
//! oracle, and graph export helpers.

mod builder;
mod oracle;
mod viz;

pub use builder::{BuilderConfig, DDGBuilder};
pub use oracle::ConservativeAliasOracle;
pub use viz::{to_dot, to_petgraph};
