//! DDG Application Layer
//!
//! Region-level construction entry points: validate the region, create an
//! empty graph carrying a copy of the oracle handle, run the fine-grained
//! builder over it, and hand the finished graph to consumers. Each call
//! returns a fully independent graph instance; graphs built from
//! overlapping regions share no structure.

use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::features::ddg::domain::DataDependenceGraph;
use crate::features::ddg::infrastructure::{BuilderConfig, DDGBuilder};
use crate::features::ddg::ports::DependenceOracle;
use crate::shared::models::{Region, RegionKind};

fn build_ddg(
    region: &Region,
    oracle: &Arc<dyn DependenceOracle>,
    config: BuilderConfig,
) -> Result<DataDependenceGraph> {
    region.validate()?;

    let mut graph = DataDependenceGraph::new(region.name.clone(), Arc::clone(oracle));
    DDGBuilder::with_config(&mut graph, config).populate(region);

    debug!(
        name = %graph.name(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "ddg built"
    );
    Ok(graph)
}

/// Build the DDG for a function's full body.
pub fn build_function_ddg(
    region: &Region,
    oracle: &Arc<dyn DependenceOracle>,
) -> Result<DataDependenceGraph> {
    debug_assert!(region.kind == RegionKind::Function);
    build_ddg(region, oracle, BuilderConfig::default())
}

/// Build the DDG for a single loop's body (its contained basic blocks
/// only).
pub fn build_loop_ddg(
    region: &Region,
    oracle: &Arc<dyn DependenceOracle>,
) -> Result<DataDependenceGraph> {
    debug_assert!(region.kind == RegionKind::Loop);
    build_ddg(region, oracle, BuilderConfig::default())
}
