use std::ops::RangeInclusive;

use rand::prelude::*;

use crate::graph::builder::{GraphBuilder, LabeledGraph};
use crate::graph::labels::alphabetic_label;
use crate::{Error, Result};

/// Smallest node count of a demo graph
pub const DEMO_MIN_NODES: usize = 10;
/// Largest node count of a demo graph
pub const DEMO_MAX_NODES: usize = 20;
/// Edge weights of demo graphs are drawn from this range
pub const DEMO_WEIGHTS: RangeInclusive<i64> = 40..=80;

/// Generates the demo graph: an even number of nodes in `[10, 20]`, each with
/// `n / 3` outgoing edges weighted in `[40, 80]`
pub fn generate_demo_graph<R: Rng + ?Sized>(rng: &mut R) -> Result<LabeledGraph<i64>> {
    let node_count = DEMO_MIN_NODES + rng.gen_range(0..=(DEMO_MAX_NODES - DEMO_MIN_NODES) / 2) * 2;
    generate_random_graph(node_count, node_count / 3, DEMO_WEIGHTS, rng)
}

/// Generates a random simple digraph with labels `A`, `B`, ..., `AA`, ...
///
/// Every node gets exactly `out_degree` outgoing edges to distinct other
/// nodes, with integer weights drawn uniformly from `weights`.
pub fn generate_random_graph<R: Rng + ?Sized>(
    node_count: usize,
    out_degree: usize,
    weights: RangeInclusive<i64>,
    rng: &mut R,
) -> Result<LabeledGraph<i64>> {
    if node_count == 0 {
        return Err(Error::InvalidShape("graph has no nodes".to_string()));
    }
    if out_degree >= node_count {
        return Err(Error::InvalidShape(format!(
            "out-degree {} needs more than {} nodes",
            out_degree, node_count
        )));
    }
    if weights.is_empty() {
        return Err(Error::InvalidShape(format!(
            "empty weight range {}..={}",
            weights.start(),
            weights.end()
        )));
    }

    let labels: Vec<String> = (0..node_count).map(alphabetic_label).collect();
    let mut builder = GraphBuilder::new();
    for label in &labels {
        builder.add_node(label.as_str());
    }

    for source in 0..node_count {
        // Sample among the other n - 1 nodes, skipping the source itself
        let targets = rand::seq::index::sample(rng, node_count - 1, out_degree);
        for offset in targets.iter() {
            let target = if offset >= source { offset + 1 } else { offset };
            let weight = rng.gen_range(weights.clone());
            builder.add_edge(&labels[source], &labels[target], weight)?;
        }
    }

    log::debug!(
        "Generated random graph with {} nodes and {} edges",
        node_count,
        builder.edge_count()
    );
    builder.build()
}
