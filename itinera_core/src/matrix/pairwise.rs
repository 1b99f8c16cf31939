use std::time::Duration;

use rayon::prelude::*;
use tracing::debug;

use crate::graph::RoadGraph;
use crate::heuristic::Heuristic;
use crate::matrix::matrix::CostMatrix;
use crate::routing::astar::AStar;
use crate::stopwatch::Stopwatch;
use crate::types::{Cost, NodeId};

pub struct MatrixBuildResult {
    pub matrix: CostMatrix,

    /// Total nodes expanded across all searches, for diagnostics only.
    pub expanded_nodes: usize,
    pub duration: Duration,
}

/// Runs one shortest-path search per ordered pair of distinct nodes. The
/// searches are independent given a read-only graph, so rows are computed
/// on the rayon pool with per-worker search state. Diagonal entries come
/// from the source == target short-circuit, not from a search.
pub fn build_cost_matrix<H: Heuristic>(
    graph: &RoadGraph,
    nodes: &[NodeId],
    heuristic: &H,
) -> MatrixBuildResult {
    let stopwatch = Stopwatch::new("matrix/build_cost_matrix");

    let rows: Vec<(Vec<Cost>, usize)> = nodes
        .par_iter()
        .map(|&source| {
            let mut astar = AStar::with_heuristic(heuristic);
            let mut expanded = 0;

            let row = nodes
                .iter()
                .map(|&target| {
                    let result = astar.calc_path(graph, source, target);
                    expanded += result.expanded;
                    result.cost
                })
                .collect();

            (row, expanded)
        })
        .collect();

    let mut costs = Vec::with_capacity(rows.len());
    let mut expanded_nodes = 0;
    for (row, expanded) in rows {
        costs.push(row);
        expanded_nodes += expanded;
    }

    let duration = stopwatch.elapsed();
    stopwatch.report();
    debug!(
        pairs = nodes.len() * nodes.len().saturating_sub(1),
        expanded_nodes, "cost matrix built"
    );

    MatrixBuildResult {
        matrix: CostMatrix::from_rows(nodes.to_vec(), costs),
        expanded_nodes,
        duration,
    }
}
